use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum AppError {
    Database(sqlx::Error),
    Template(askama::Error),
    Session(tower_sessions::session::Error),
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::Database(e) => internal_error("Database error", &e),
            AppError::Template(e) => internal_error("Template error", &e),
            AppError::Session(e) => internal_error("Session error", &e),
        }
    }
}

fn internal_error(kind: &str, err: &dyn std::fmt::Display) -> Response {
    tracing::error!("{kind}: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(e: tower_sessions::session::Error) -> Self {
        AppError::Session(e)
    }
}
