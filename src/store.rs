use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::models::{Bookmark, Meme, MemeSort, Tag};

/// Fixed listing page size. There is no pagination cursor; every
/// listing is a bounded single page.
pub const PAGE_SIZE: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkState {
    Saved,
    Unsaved,
}

impl BookmarkState {
    pub fn is_saved(&self) -> bool {
        matches!(self, BookmarkState::Saved)
    }
}

/// Return the id of the tag with the given name, creating the row if it
/// does not exist yet. Names are trimmed and lowercased before lookup.
/// Concurrent resolutions of the same new name converge on one row via
/// the unique index on `tags.name`.
pub async fn resolve_tag(db: &SqlitePool, name: &str) -> Result<String, sqlx::Error> {
    let tag = Tag::new(name);

    sqlx::query("INSERT OR IGNORE INTO tags (id, name, created_at) VALUES (?, ?, ?)")
        .bind(&tag.id)
        .bind(&tag.name)
        .bind(&tag.created_at)
        .execute(db)
        .await?;

    let (id,): (String,) = sqlx::query_as("SELECT id FROM tags WHERE name = ?")
        .bind(&tag.name)
        .fetch_one(db)
        .await?;

    Ok(id)
}

/// Record that a meme carries a tag. Idempotent: the pair primary key
/// on `meme_tags` makes re-linking a no-op.
pub async fn link_meme_tag(db: &SqlitePool, meme_id: &str, tag_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT OR IGNORE INTO meme_tags (meme_id, tag_id) VALUES (?, ?)")
        .bind(meme_id)
        .bind(tag_id)
        .execute(db)
        .await?;

    Ok(())
}

pub async fn insert_meme(db: &SqlitePool, meme: &Meme) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO memes (id, title, image_url, description, popularity, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&meme.id)
    .bind(&meme.title)
    .bind(&meme.image_url)
    .bind(&meme.description)
    .bind(meme.popularity)
    .bind(&meme.created_at)
    .execute(db)
    .await?;

    Ok(())
}

/// Flip the (user, meme) bookmark pair and report the new state.
///
/// The conditional insert is guarded by the unique index on the pair,
/// so a racing duplicate toggle cannot double-insert or double-count.
/// Saving bumps the meme's popularity with a server-side atomic
/// increment; removal only decrements when `decrement_on_remove` is
/// set, and never below zero.
pub async fn toggle_bookmark(
    db: &SqlitePool,
    user_id: &str,
    meme_id: &str,
    decrement_on_remove: bool,
) -> Result<BookmarkState, sqlx::Error> {
    let bookmark = Bookmark::new(user_id.to_string(), meme_id.to_string());

    let inserted = sqlx::query(
        "INSERT OR IGNORE INTO bookmarks (id, user_id, meme_id, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&bookmark.id)
    .bind(&bookmark.user_id)
    .bind(&bookmark.meme_id)
    .bind(&bookmark.created_at)
    .execute(db)
    .await?;

    if inserted.rows_affected() == 1 {
        sqlx::query("UPDATE memes SET popularity = popularity + 1 WHERE id = ?")
            .bind(meme_id)
            .execute(db)
            .await?;

        return Ok(BookmarkState::Saved);
    }

    sqlx::query("DELETE FROM bookmarks WHERE user_id = ? AND meme_id = ?")
        .bind(user_id)
        .bind(meme_id)
        .execute(db)
        .await?;

    if decrement_on_remove {
        sqlx::query("UPDATE memes SET popularity = MAX(popularity - 1, 0) WHERE id = ?")
            .bind(meme_id)
            .execute(db)
            .await?;
    }

    Ok(BookmarkState::Unsaved)
}

pub async fn is_bookmarked(db: &SqlitePool, user_id: &str, meme_id: &str) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM bookmarks WHERE user_id = ? AND meme_id = ?")
            .bind(user_id)
            .bind(meme_id)
            .fetch_one(db)
            .await?;

    Ok(count > 0)
}

pub async fn list_memes(db: &SqlitePool, sort: MemeSort, limit: i64) -> Result<Vec<Meme>, sqlx::Error> {
    let query = match sort {
        MemeSort::Trending => "SELECT * FROM memes ORDER BY popularity DESC LIMIT ?",
        MemeSort::Recent => "SELECT * FROM memes ORDER BY created_at DESC LIMIT ?",
    };

    sqlx::query_as(query).bind(limit).fetch_all(db).await
}

pub async fn memes_for_tag(db: &SqlitePool, tag_name: &str, limit: i64) -> Result<Vec<Meme>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT m.* FROM memes m
        JOIN meme_tags mt ON mt.meme_id = m.id
        JOIN tags t ON t.id = mt.tag_id
        WHERE t.name = ?
        ORDER BY m.popularity DESC
        LIMIT ?
        "#,
    )
    .bind(tag_name.trim().to_lowercase())
    .bind(limit)
    .fetch_all(db)
    .await
}

/// The caller's saved memes, most recently saved first.
pub async fn bookmarked_memes(db: &SqlitePool, user_id: &str, limit: i64) -> Result<Vec<Meme>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT m.* FROM memes m
        JOIN bookmarks b ON b.meme_id = m.id
        WHERE b.user_id = ?
        ORDER BY b.created_at DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(db)
    .await
}

pub async fn get_meme(db: &SqlitePool, id: &str) -> Result<Option<Meme>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM memes WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn meme_popularity(db: &SqlitePool, id: &str) -> Result<i64, sqlx::Error> {
    let (popularity,): (i64,) = sqlx::query_as("SELECT popularity FROM memes WHERE id = ?")
        .bind(id)
        .fetch_one(db)
        .await?;

    Ok(popularity)
}

/// Tag names for a whole page of memes in one aggregated query, keyed
/// by meme id. Replaces a per-row follow-up query loop.
pub async fn tags_for_memes(
    db: &SqlitePool,
    meme_ids: &[String],
) -> Result<HashMap<String, Vec<String>>, sqlx::Error> {
    if meme_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let placeholders = vec!["?"; meme_ids.len()].join(", ");
    let sql = format!(
        r#"
        SELECT mt.meme_id, t.name FROM meme_tags mt
        JOIN tags t ON t.id = mt.tag_id
        WHERE mt.meme_id IN ({placeholders})
        ORDER BY t.name ASC
        "#
    );

    let mut query = sqlx::query_as::<_, (String, String)>(&sql);
    for id in meme_ids {
        query = query.bind(id);
    }

    let rows = query.fetch_all(db).await?;

    let mut tags: HashMap<String, Vec<String>> = HashMap::new();
    for (meme_id, name) in rows {
        tags.entry(meme_id).or_default().push(name);
    }

    Ok(tags)
}

/// Most-used tag names, for the category strip on the listing pages.
pub async fn popular_tags(db: &SqlitePool, limit: i64) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT t.name FROM tags t
        JOIN meme_tags mt ON mt.tag_id = t.id
        GROUP BY t.id
        ORDER BY COUNT(mt.meme_id) DESC, t.name ASC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}
