#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use localtube_api::config::ServerConfig;
use localtube_api::router::build_app_router;
use localtube_api::state::AppState;

/// Build a test `ServerConfig` serving and scanning `root`.
pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        media_root: root.to_path_buf(),
        site_root: root.to_path_buf(),
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with the production middleware
/// stack, over `root`.
pub fn build_test_app(root: &Path) -> Router {
    build_app_router(AppState::new(test_config(root)))
}

/// Build the application from an explicit config.
pub fn build_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState::new(config))
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an empty (or given-content) file at `root/rel`, creating parents.
pub fn write_file(root: &Path, rel: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
