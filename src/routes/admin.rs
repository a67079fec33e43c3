use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use sqlx::FromRow;

use crate::{seed, AppState};

#[derive(Serialize, FromRow)]
struct MemeProbe {
    id: String,
    title: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/seed-memes", get(seed_memes))
        .route("/api/test-db", get(test_db))
}

/// Bulk-loads the bundled sample memes. Repeated invocation duplicates
/// meme rows; tag rows and links are idempotent.
async fn seed_memes(State(state): State<AppState>) -> impl IntoResponse {
    let inserted = seed::run(&state.db).await;

    Json(json!({
        "message": format!("Seeded {inserted} memes."),
        "inserted": inserted,
    }))
}

/// Connectivity probe: a bounded read reporting success and row count.
async fn test_db(State(state): State<AppState>) -> impl IntoResponse {
    let probe: Result<Vec<MemeProbe>, sqlx::Error> =
        sqlx::query_as("SELECT id, title FROM memes LIMIT 3")
            .fetch_all(&state.db)
            .await;

    match probe {
        Ok(rows) => Json(json!({
            "success": true,
            "message": "Database connection successful",
            "count": rows.len(),
            "data": rows,
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("Database probe failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": e.to_string(),
                    "details": "Database query failed",
                })),
            )
                .into_response()
        }
    }
}
