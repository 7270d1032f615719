//! Test utilities for integration tests.
//!
//! This module provides fixture bookmarks, a store that always fails, and
//! helpers for sending requests through the router.

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bookmarks_service::{
    create_router, Bookmark, BookmarkStore, NewBookmark, RouterConfig, SqliteBookmarkStore,
    StoreError,
};

// =============================================================================
// Fixtures
// =============================================================================

/// Three well-formed bookmarks, ids 1..=3 once inserted into a fresh store.
pub fn make_bookmarks_array() -> Vec<NewBookmark> {
    vec![
        NewBookmark {
            title: "Thinkful".to_string(),
            url: "https://www.thinkful.com".to_string(),
            description: Some("Think outside the classroom".to_string()),
            rating: 5,
        },
        NewBookmark {
            title: "Google".to_string(),
            url: "https://www.google.com".to_string(),
            description: Some("Where we find everything else".to_string()),
            rating: 4,
        },
        NewBookmark {
            title: "MDN".to_string(),
            url: "https://developer.mozilla.org".to_string(),
            description: Some("The only place to find web documentation".to_string()),
            rating: 5,
        },
    ]
}

/// A bookmark carrying script payloads, and what clients should see instead.
pub struct MaliciousFixture {
    pub malicious: NewBookmark,
    pub expected_title: &'static str,
    pub expected_description: &'static str,
}

pub fn make_malicious_bookmark() -> MaliciousFixture {
    MaliciousFixture {
        malicious: NewBookmark {
            title: r#"Naughty naughty very naughty <script>alert("xss");</script>"#.to_string(),
            url: "https://www.hackers.com".to_string(),
            description: Some(
                r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#
                    .to_string(),
            ),
            rating: 1,
        },
        expected_title: r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#,
        expected_description: r#"Bad image <img src="https://url.to.file.which/does-not.exist">. But not <strong>all</strong> bad."#,
    }
}

/// Open an in-memory store and insert `bookmarks` in order.
pub async fn seeded_store(bookmarks: Vec<NewBookmark>) -> (SqliteBookmarkStore, Vec<Bookmark>) {
    let store = SqliteBookmarkStore::open_in_memory().unwrap();
    let mut stored = Vec::with_capacity(bookmarks.len());
    for bookmark in bookmarks {
        stored.push(store.insert(bookmark).await.unwrap());
    }
    (store, stored)
}

/// Build a router over `store` with tracing disabled.
pub fn test_router<S: BookmarkStore + 'static>(store: S) -> Router {
    create_router(store, RouterConfig::new().without_tracing())
}

/// Expected JSON for a bookmark whose fields contain no markup.
pub fn plain_json(bookmark: &Bookmark) -> Value {
    serde_json::json!({
        "id": bookmark.id,
        "title": bookmark.title,
        "url": bookmark.url,
        "description": bookmark.description.clone().unwrap_or_default(),
        "rating": bookmark.rating,
    })
}

// =============================================================================
// Failing Store
// =============================================================================

/// A store whose every call fails, for exercising the 500 path.
pub struct FailingStore;

#[async_trait]
impl BookmarkStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        Err(StoreError::Database("connection refused".to_string()))
    }

    async fn get_by_id(&self, _id: i64) -> Result<Option<Bookmark>, StoreError> {
        Err(StoreError::Database("connection refused".to_string()))
    }

    async fn insert(&self, _bookmark: NewBookmark) -> Result<Bookmark, StoreError> {
        Err(StoreError::Database("connection refused".to_string()))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), StoreError> {
        Err(StoreError::Database("connection refused".to_string()))
    }
}

// =============================================================================
// Request Helpers
// =============================================================================

/// A fully buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// The body every 404 carries.
pub fn not_found_body() -> Value {
    serde_json::json!({ "error": { "message": "Bookmark Not Found" } })
}
