mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

use common::{BrokenRepository, SequenceSalt};

#[tokio::test]
async fn test_lookup_success() {
    let (state, pool) = common::create_sqlite_state().await;
    common::insert_mapping(&pool, "abcdefg", "https://rust-lang.org").await;
    let server = common::test_server(state);

    let response = server.get("/api/url/abcdefg").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "url": "https://rust-lang.org" }));
}

#[tokio::test]
async fn test_lookup_invalid_short_url() {
    let (state, _pool) = common::create_sqlite_state().await;
    let server = common::test_server(state);

    let response = server.get("/api/url/invalid_short_url").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "invalid short url" }));
}

#[tokio::test]
async fn test_lookup_too_short() {
    let (state, _pool) = common::create_sqlite_state().await;
    let server = common::test_server(state);

    let response = server.get("/api/url/abc").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "invalid short url" }));
}

#[tokio::test]
async fn test_lookup_not_found() {
    let (state, _pool) = common::create_sqlite_state().await;
    let server = common::test_server(state);

    let response = server.get("/api/url/zzzzzzz").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "message": "url not found" }));
}

#[tokio::test]
async fn test_lookup_foreign_characters_not_found() {
    let (state, _pool) = common::create_sqlite_state().await;
    let server = common::test_server(state);

    let response = server.get("/api/url/abc.def").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_lookup_wrong_length_skips_storage() {
    let state = common::create_test_state(
        Arc::new(BrokenRepository),
        Arc::new(SequenceSalt::new(&[])),
    );
    let server = common::test_server(state);

    let response = server.get("/api/url/abc").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_lookup_storage_error() {
    let state = common::create_test_state(
        Arc::new(BrokenRepository),
        Arc::new(SequenceSalt::new(&[])),
    );
    let server = common::test_server(state);

    let response = server.get("/api/url/abcdefg").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "error has occurred" }));
}
