//! Integration tests for `GET /api/media`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_app_with, build_test_app, get, test_config, write_file};

fn path_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

// ---------------------------------------------------------------------------
// Test: empty library returns zero counts and an empty list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_library_returns_empty_report() {
    let dir = tempfile::tempdir().unwrap();

    let response = get(build_test_app(dir.path()), "/api/media").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_videos"], 0);
    assert_eq!(json["videos_with_thumbs"], 0);
    assert_eq!(json["media_files"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Test: direct, aliased and missing thumbnails in one library
// ---------------------------------------------------------------------------

#[tokio::test]
async fn report_pairs_direct_and_aliased_thumbnails() {
    let dir = tempfile::tempdir().unwrap();
    let a_video = write_file(dir.path(), "a.mp4", b"");
    let a_thumb = write_file(dir.path(), "a.webp", b"");
    write_file(dir.path(), "b.webm", b"");
    write_file(dir.path(), "c.mp4", b"");
    let c_thumb = write_file(dir.path(), "c_thumb.webp", b"");
    write_file(dir.path(), "thumbnail_mapping.json", br#"{"c": "c_thumb"}"#);

    let response = get(build_test_app(dir.path()), "/api/media").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_videos"], 3);
    assert_eq!(json["videos_with_thumbs"], 2);

    let files = json["media_files"].as_array().unwrap();
    assert_eq!(files.len(), 3);

    assert_eq!(files[0]["name"], "a");
    assert_eq!(files[0]["video_path"], path_string(&a_video));
    assert_eq!(files[0]["thumb_path"], path_string(&a_thumb));
    assert_eq!(files[0]["has_thumb"], true);

    assert_eq!(files[1]["name"], "b");
    assert_eq!(files[1]["has_thumb"], false);
    assert!(
        files[1].get("thumb_path").is_none(),
        "thumb_path must be omitted for unmatched videos"
    );

    assert_eq!(files[2]["name"], "c");
    assert_eq!(files[2]["thumb_path"], path_string(&c_thumb));
}

// ---------------------------------------------------------------------------
// Test: subfolders are scanned one level deep only
// ---------------------------------------------------------------------------

#[tokio::test]
async fn subfolder_videos_are_included_one_level_deep() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "Cartoons/d.mp4", b"");
    write_file(dir.path(), "Cartoons/d.webp", b"");
    write_file(dir.path(), "Cartoons/Extras/e.mp4", b"");

    let response = get(build_test_app(dir.path()), "/api/media").await;

    let json = body_json(response).await;
    assert_eq!(json["total_videos"], 1);
    assert_eq!(json["videos_with_thumbs"], 1);
    assert_eq!(json["media_files"][0]["name"], "d");
}

// ---------------------------------------------------------------------------
// Test: a broken mapping file does not fail the scan
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_mapping_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "c.mp4", b"");
    write_file(dir.path(), "c_thumb.webp", b"");
    write_file(dir.path(), "thumbnail_mapping.json", b"{\"c\": ");

    let response = get(build_test_app(dir.path()), "/api/media").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_videos"], 1);
    assert_eq!(json["videos_with_thumbs"], 0);
}

// ---------------------------------------------------------------------------
// Test: an unreadable media root is a 500 with a sanitized message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_media_root_returns_scan_failed() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.media_root = dir.path().join("unplugged-drive");

    let response = get(build_app_with(config), "/api/media").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "SCAN_FAILED");
    assert_eq!(json["error"], "Error scanning media files");
}

// ---------------------------------------------------------------------------
// Test: repeated requests see a fresh scan each time
// ---------------------------------------------------------------------------

#[tokio::test]
async fn each_request_rescans() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "first.mp4", b"");

    let json = body_json(get(build_test_app(dir.path()), "/api/media").await).await;
    assert_eq!(json["total_videos"], 1);

    write_file(dir.path(), "second.webm", b"");
    write_file(dir.path(), "second.webp", b"");

    let json = body_json(get(build_test_app(dir.path()), "/api/media").await).await;
    assert_eq!(json["total_videos"], 2);
    assert_eq!(json["videos_with_thumbs"], 1);
}
