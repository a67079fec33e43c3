use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};

use crate::auth::{AuthUser, MaybeUser};
use crate::error::AppError;
use crate::models::User;
use crate::routes::memes::{load_cards, BookmarkButtonTemplate, MemeCard};
use crate::{store, AppState};

#[derive(Template)]
#[template(path = "bookmarks/list.html")]
struct BookmarkListTemplate {
    memes: Vec<MemeCard>,

    static_hash: &'static str,
    user: Option<User>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks))
        .route("/meme/{id}/bookmark", post(toggle_bookmark))
}

async fn list_bookmarks(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let memes = store::bookmarked_memes(&state.db, &user.id, store::PAGE_SIZE)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to load bookmarks for user {}: {e}", user.id);
            Vec::new()
        });

    let template = BookmarkListTemplate {
        memes: load_cards(&state.db, memes).await,

        static_hash: crate::STATIC_HASH,
        user: Some(user),
    };
    Ok(Html(template.render()?))
}

async fn toggle_bookmark(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(user) = user else {
        // Anonymous callers get a sign-in prompt and no state change.
        return Ok((
            StatusCode::UNAUTHORIZED,
            Html(r#"<a class="bookmark-button" href="/login">Sign in to save memes</a>"#),
        )
            .into_response());
    };

    let Some(meme) = store::get_meme(&state.db, &id).await? else {
        return Err(AppError::NotFound);
    };

    let new_state = store::toggle_bookmark(
        &state.db,
        &user.id,
        &meme.id,
        state.config.decrement_popularity_on_remove,
    )
    .await?;

    let popularity = store::meme_popularity(&state.db, &meme.id).await?;

    let button = BookmarkButtonTemplate {
        meme_id: meme.id,
        bookmarked: new_state.is_saved(),
        popularity,
        signed_in: true,
    };
    Ok(Html(button.render()?).into_response())
}
