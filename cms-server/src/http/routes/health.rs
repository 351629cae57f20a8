//! Health check endpoint

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::get, Router};

/// Fixed response body for `GET /health`
pub const HEALTH_BODY: &str = r#"{"status": "Server is running"}"#;

/// GET /health
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        HEALTH_BODY,
    )
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
