//! Static file serving from the site root.
//!
//! Paths are resolved lexically by [`resolve_site_path`] and then
//! canonicalized, so neither `..` segments nor symlinks can reach files
//! outside the root. The actual transfer (content type, ranges,
//! conditional requests) is delegated to tower-http's `ServeFile`.

use std::io;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::extract::{Request, State};
use axum::response::Response;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use localtube_core::error::CoreError;
use localtube_core::site::{resolve_site_path, INDEX_FILE};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn io_error(path: &Path, err: io::Error) -> AppError {
    if err.kind() == io::ErrorKind::NotFound {
        AppError::Core(CoreError::NotFound(path.display().to_string()))
    } else {
        AppError::InternalError(format!("Failed to access {}: {err}", path.display()))
    }
}

/// Canonicalize `path` and verify it still lies under `root`.
async fn canonicalize_within(root: &Path, path: &Path) -> AppResult<PathBuf> {
    let canonical = tokio::fs::canonicalize(path)
        .await
        .map_err(|e| io_error(path, e))?;

    if !canonical.starts_with(root) {
        return Err(AppError::Core(CoreError::Forbidden(
            path.display().to_string(),
        )));
    }

    Ok(canonical)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Fallback for every path not matched by another route.
///
/// `/` and directories are served as their `index.html`.
pub async fn serve_static(State(state): State<AppState>, request: Request) -> AppResult<Response> {
    let site_root = &state.config.site_root;
    let root = tokio::fs::canonicalize(site_root)
        .await
        .map_err(|e| AppError::InternalError(format!("Site root unavailable: {e}")))?;

    let requested = resolve_site_path(&root, request.uri().path())?;
    let mut file = canonicalize_within(&root, &requested).await?;

    let metadata = tokio::fs::metadata(&file)
        .await
        .map_err(|e| io_error(&file, e))?;
    if metadata.is_dir() {
        file = canonicalize_within(&root, &file.join(INDEX_FILE)).await?;
    }

    tracing::debug!(path = %file.display(), "Serving static file");

    let response = ServeFile::new(&file)
        .oneshot(request)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to serve {}: {e}", file.display())))?;

    Ok(response.map(Body::new))
}
