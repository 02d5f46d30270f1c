//! Health checks and API documentation routes.
//!
//! Run with: `cargo test -p eventdeck-api --test health_test`

mod helpers;

use axum::http::StatusCode;
use helpers::setup_test_app;
use serde_json::Value;

#[tokio::test]
async fn test_liveness() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_dependencies() {
    let app = setup_test_app().await;

    let response = app.client().get("/health/ready").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "ready");
    assert_eq!(body["storage"], "ready");
}

#[tokio::test]
async fn test_openapi_lists_admin_routes() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;

    response.assert_status_ok();
    let spec: Value = response.json();
    let paths = spec["paths"].as_object().expect("paths object");
    for path in [
        "/api/admin/login",
        "/api/admin/events",
        "/api/admin/create",
        "/api/admin/edit/{id}",
        "/api/admin/event/{id}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = setup_test_app().await;

    app.client()
        .get("/api/admin/nope")
        .await
        .assert_status_not_found();
}
