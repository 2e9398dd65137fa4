use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use localtube_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `localtube_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Scan { path, message } => {
                    tracing::error!(path = %path.display(), error = %message, "Media scan failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "SCAN_FAILED",
                        "Error scanning media files".to_string(),
                    )
                }
                CoreError::NotFound(_) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "File not found".to_string(),
                ),
                CoreError::Forbidden(path) => {
                    tracing::warn!(path = %path, "Rejected path outside site root");
                    (StatusCode::FORBIDDEN, "FORBIDDEN", "Forbidden".to_string())
                }
            },

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
