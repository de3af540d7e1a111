//! Health check and landing endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use super::MessageResponse;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /
async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome!",
    })
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}
