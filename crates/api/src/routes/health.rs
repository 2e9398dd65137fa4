use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the media root exists and is a directory.
    pub media_root_readable: bool,
}

/// GET /health -- returns service health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let media_root_readable = tokio::fs::metadata(&state.config.media_root)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);

    let status = if media_root_readable { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        media_root_readable,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
