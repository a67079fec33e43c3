use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use std::collections::HashMap;

use crate::auth::MaybeUser;
use crate::error::AppError;
use crate::models::{Meme, MemeSort, User};
use crate::{store, AppState};

pub struct MemeCard {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub popularity: i64,
    pub tags: Vec<String>,
}

#[derive(Template)]
#[template(path = "memes/list.html")]
struct MemeListTemplate {
    memes: Vec<MemeCard>,
    filter: String,
    categories: Vec<String>,

    static_hash: &'static str,
    user: Option<User>,
}

#[derive(Template)]
#[template(path = "memes/detail.html")]
struct MemeDetailTemplate {
    meme: Meme,
    tags: Vec<String>,
    button_html: String,

    static_hash: &'static str,
    user: Option<User>,
}

#[derive(Template)]
#[template(path = "memes/not_found.html")]
struct MemeNotFoundTemplate {
    static_hash: &'static str,
    user: Option<User>,
}

#[derive(Template)]
#[template(path = "memes/bookmark_button.html")]
pub struct BookmarkButtonTemplate {
    pub meme_id: String,
    pub bookmarked: bool,
    pub popularity: i64,
    pub signed_in: bool,
}

#[derive(Deserialize, Default)]
pub struct ListQuery {
    #[serde(default)]
    sort: MemeSort,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/category/{name}", get(category))
        .route("/meme/{id}", get(meme_detail))
}

/// Tags for a page of memes, folded into view cards. A failed tag read
/// is logged and the cards render without tags.
pub async fn load_cards(db: &SqlitePool, memes: Vec<Meme>) -> Vec<MemeCard> {
    let ids: Vec<String> = memes.iter().map(|m| m.id.clone()).collect();

    let mut tags = store::tags_for_memes(db, &ids).await.unwrap_or_else(|e| {
        tracing::error!("Failed to load tags for listing: {e}");
        HashMap::new()
    });

    memes
        .into_iter()
        .map(|meme| MemeCard {
            tags: tags.remove(&meme.id).unwrap_or_default(),
            id: meme.id,
            title: meme.title,
            image_url: meme.image_url,
            popularity: meme.popularity,
        })
        .collect()
}

async fn load_categories(db: &SqlitePool) -> Vec<String> {
    store::popular_tags(db, 8).await.unwrap_or_else(|e| {
        tracing::error!("Failed to load categories: {e}");
        Vec::new()
    })
}

async fn home(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let memes = store::list_memes(&state.db, query.sort, store::PAGE_SIZE)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to load meme listing: {e}");
            Vec::new()
        });

    let template = MemeListTemplate {
        memes: load_cards(&state.db, memes).await,
        filter: query.sort.to_string(),
        categories: load_categories(&state.db).await,

        static_hash: crate::STATIC_HASH,
        user,
    };
    Ok(Html(template.render()?))
}

async fn category(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let name = name.trim().to_lowercase();

    let memes = store::memes_for_tag(&state.db, &name, store::PAGE_SIZE)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to load category {name:?}: {e}");
            Vec::new()
        });

    let template = MemeListTemplate {
        memes: load_cards(&state.db, memes).await,
        filter: name,
        categories: load_categories(&state.db).await,

        static_hash: crate::STATIC_HASH,
        user,
    };
    Ok(Html(template.render()?))
}

async fn meme_detail(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let meme = match store::get_meme(&state.db, &id).await {
        Ok(Some(meme)) => meme,
        Ok(None) => return not_found_page(user),
        Err(e) => {
            tracing::error!("Failed to load meme {id}: {e}");
            return not_found_page(user);
        }
    };

    let tags = store::tags_for_memes(&state.db, std::slice::from_ref(&meme.id))
        .await
        .map(|mut tags| tags.remove(&meme.id).unwrap_or_default())
        .unwrap_or_else(|e| {
            tracing::error!("Failed to load tags for meme {id}: {e}");
            Vec::new()
        });

    let bookmarked = match &user {
        Some(user) => store::is_bookmarked(&state.db, &user.id, &meme.id)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Failed to check bookmark state for meme {id}: {e}");
                false
            }),
        None => false,
    };

    let button = BookmarkButtonTemplate {
        meme_id: meme.id.clone(),
        bookmarked,
        popularity: meme.popularity,
        signed_in: user.is_some(),
    };

    let template = MemeDetailTemplate {
        button_html: button.render()?,
        meme,
        tags,

        static_hash: crate::STATIC_HASH,
        user,
    };
    Ok(Html(template.render()?).into_response())
}

fn not_found_page(user: Option<User>) -> Result<Response, AppError> {
    let template = MemeNotFoundTemplate {
        static_hash: crate::STATIC_HASH,
        user,
    };
    Ok((StatusCode::NOT_FOUND, Html(template.render()?)).into_response())
}
