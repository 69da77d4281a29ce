// tests/health_tests.rs
// Health and fallback route behavior

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tempfile::tempdir;

use common::{get_json, test_app, RecordingMailer};

#[tokio::test]
async fn health_reports_ok_with_reachable_store() {
    let dir = tempdir().unwrap();
    let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["uptime_secs"].is_number());
}

#[tokio::test]
async fn unknown_route_falls_back_to_not_found() {
    let dir = tempdir().unwrap();
    let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

    let (status, body) = get_json(app, "/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "error": "Route not found" }));
}
