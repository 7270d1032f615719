//! Integration tests for listing, fetching and deleting bookmarks.

use axum::http::StatusCode;
use serde_json::Value;

use super::test_utils::{
    delete, get, make_bookmarks_array, not_found_body, plain_json, seeded_store, send,
    test_router,
};

// =============================================================================
// GET /bookmarks
// =============================================================================

#[tokio::test]
async fn test_list_empty() {
    let (store, _) = seeded_store(vec![]).await;
    let router = test_router(store);

    let response = send(&router, get("/bookmarks")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!([]));
}

#[tokio::test]
async fn test_list_returns_all_in_insertion_order() {
    let (store, stored) = seeded_store(make_bookmarks_array()).await;
    let router = test_router(store);

    let response = send(&router, get("/bookmarks")).await;

    assert_eq!(response.status, StatusCode::OK);
    let expected: Vec<Value> = stored.iter().map(plain_json).collect();
    assert_eq!(response.json(), Value::Array(expected));
}

// =============================================================================
// GET /bookmarks/{id}
// =============================================================================

#[tokio::test]
async fn test_get_missing_bookmark() {
    let (store, _) = seeded_store(vec![]).await;
    let router = test_router(store);

    let response = send(&router, get("/bookmarks/123")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), not_found_body());
}

#[tokio::test]
async fn test_get_existing_bookmark() {
    let (store, stored) = seeded_store(make_bookmarks_array()).await;
    let router = test_router(store);

    let response = send(&router, get("/bookmarks/2")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), plain_json(&stored[1]));
}

#[tokio::test]
async fn test_get_non_numeric_id() {
    let (store, _) = seeded_store(make_bookmarks_array()).await;
    let router = test_router(store);

    let response = send(&router, get("/bookmarks/not-a-number")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), not_found_body());
}

// =============================================================================
// DELETE /bookmarks/{id}
// =============================================================================

#[tokio::test]
async fn test_delete_missing_bookmark() {
    let (store, _) = seeded_store(vec![]).await;
    let router = test_router(store);

    let response = send(&router, delete("/bookmarks/12345")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), not_found_body());
}

#[tokio::test]
async fn test_delete_removes_bookmark() {
    let (store, stored) = seeded_store(make_bookmarks_array()).await;
    let router = test_router(store);

    let response = send(&router, delete("/bookmarks/1")).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    let expected: Vec<Value> = stored
        .iter()
        .filter(|bookmark| bookmark.id != 1)
        .map(plain_json)
        .collect();
    let list = send(&router, get("/bookmarks")).await;
    assert_eq!(list.json(), Value::Array(expected));

    let again = send(&router, get("/bookmarks/1")).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_twice() {
    let (store, _) = seeded_store(make_bookmarks_array()).await;
    let router = test_router(store);

    assert_eq!(
        send(&router, delete("/bookmarks/3")).await.status,
        StatusCode::NO_CONTENT
    );

    let second = send(&router, delete("/bookmarks/3")).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(second.json(), not_found_body());
}

// =============================================================================
// Misc
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (store, _) = seeded_store(vec![]).await;
    let router = test_router(store);

    let response = send(&router, get("/health")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");
}

#[tokio::test]
async fn test_unsupported_method() {
    let (store, _) = seeded_store(vec![]).await;
    let router = test_router(store);

    let response = send(&router, delete("/bookmarks")).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
