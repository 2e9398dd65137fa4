pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /media                                           scan media library (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/media", get(handlers::media::list_media))
}
