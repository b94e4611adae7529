//! Integration Tests for the REST store client
//!
//! Runs the RPC client, and the full router on top of it, against a mock
//! data store.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use cleanup_gateway::api::{create_router, CLEANUP_PATH};
use cleanup_gateway::{AppState, Config, ExpiredDataStore, RestStore, StoreError};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

const RPC_PATH: &str = "/rest/v1/rpc/cleanup_expired_data";

fn store_for(server: &MockServer) -> RestStore {
    RestStore::new(
        &server.base_url(),
        "cleanup_expired_data",
        "service-key",
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_purge_sends_authenticated_rpc() {
    let server = MockServer::start_async().await;
    let rpc = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(RPC_PATH)
                .header("apikey", "service-key")
                .header("authorization", "Bearer service-key")
                .json_body(json!({}));
            then.status(204);
        })
        .await;

    let result = store_for(&server).purge_expired().await;

    assert!(result.is_ok());
    rpc.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_purge_ignores_success_payload() {
    let server = MockServer::start_async().await;
    let rpc = server
        .mock_async(|when, then| {
            when.method(POST).path(RPC_PATH);
            then.status(200).json_body(json!({ "deleted": 42 }));
        })
        .await;

    assert!(store_for(&server).purge_expired().await.is_ok());
    rpc.assert_async().await;
}

#[tokio::test]
async fn test_purge_surfaces_store_error_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(RPC_PATH);
            then.status(500).json_body(json!({
                "code": "XX000",
                "message": "db unreachable",
                "details": null,
                "hint": null
            }));
        })
        .await;

    let result = store_for(&server).purge_expired().await;

    assert_eq!(
        result.unwrap_err(),
        StoreError::Rejected("db unreachable".to_string())
    );
}

#[tokio::test]
async fn test_purge_unreachable_store_is_transport_error() {
    let store = RestStore::new(
        "http://127.0.0.1:1",
        "cleanup_expired_data",
        "service-key",
        Duration::from_secs(2),
    )
    .unwrap();

    match store.purge_expired().await {
        Err(StoreError::Transport(msg)) => {
            // Cause chain is appended and the store URL stays private
            assert!(msg.starts_with("error sending request: "), "{msg}");
            assert!(!msg.contains("127.0.0.1"), "{msg}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_purge_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(RPC_PATH);
            then.status(200).delay(Duration::from_secs(3));
        })
        .await;

    let store = RestStore::new(
        &server.base_url(),
        "cleanup_expired_data",
        "service-key",
        Duration::from_millis(200),
    )
    .unwrap();

    match store.purge_expired().await {
        Err(StoreError::Transport(msg)) => {
            assert!(msg.contains("timed out"), "{msg}");
            assert!(!msg.contains(RPC_PATH), "{msg}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_router_over_rest_store_end_to_end() {
    let server = MockServer::start_async().await;
    let rpc = server
        .mock_async(|when, then| {
            when.method(POST).path(RPC_PATH);
            then.status(503).json_body(json!({ "message": "db unreachable" }));
        })
        .await;

    let config = Config::new("abc123", server.base_url(), "service-key");
    let store = RestStore::from_config(&config).unwrap();
    let app = create_router(AppState::new(config, Arc::new(store)));

    // Unauthorized requests never reach the store
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(CLEANUP_PATH)
                .header("X-Cleanup-Key", "wrong-secret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    rpc.assert_hits_async(0).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(CLEANUP_PATH)
                .header("X-Cleanup-Key", "abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json,
        json!({ "error": "Internal server error", "details": "db unreachable" })
    );
    rpc.assert_hits_async(1).await;
}
