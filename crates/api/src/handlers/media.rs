//! Handler for the media library scan.

use axum::extract::State;
use axum::Json;

use localtube_core::media::{scan_media, ScanReport};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/media
///
/// Scans the configured media root and returns every video with its
/// thumbnail, if any. The scan does blocking filesystem I/O, so it runs on
/// the blocking pool. Each request scans afresh.
pub async fn list_media(State(state): State<AppState>) -> AppResult<Json<ScanReport>> {
    let root = state.config.media_root.clone();

    let report = tokio::task::spawn_blocking(move || scan_media(&root))
        .await
        .map_err(|e| AppError::InternalError(format!("Scan task failed: {e}")))??;

    Ok(Json(report))
}
