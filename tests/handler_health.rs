mod common;

use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

use common::{BrokenRepository, SequenceSalt};

#[tokio::test]
async fn test_health_ok() {
    let (state, _pool) = common::create_sqlite_state().await;
    let server = common::test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded() {
    let state = common::create_test_state(
        Arc::new(BrokenRepository),
        Arc::new(SequenceSalt::new(&[])),
    );
    let server = common::test_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_root_redirects_to_web() {
    let (state, _pool) = common::create_sqlite_state().await;
    let server = common::test_server(state);

    let response = server.get("/").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "/web/");
}

#[tokio::test]
async fn test_web_ui_is_served() {
    let (state, _pool) = common::create_sqlite_state().await;
    let server = common::test_server(state);

    let response = server.get("/web/index.html").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"src="/web/main.js""#));
}
