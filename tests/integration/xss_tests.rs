//! Integration tests for output sanitization.
//!
//! Markup is stored exactly as submitted and neutralized on every read path.

use axum::http::StatusCode;
use serde_json::json;

use bookmarks_service::BookmarkStore;

use super::test_utils::{get, make_malicious_bookmark, post_json, seeded_store, send, test_router};

#[tokio::test]
async fn test_list_sanitizes_malicious_bookmark() {
    let fixture = make_malicious_bookmark();
    let (store, _) = seeded_store(vec![fixture.malicious.clone()]).await;
    let router = test_router(store);

    let response = send(&router, get("/bookmarks")).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body[0]["title"], fixture.expected_title);
    assert_eq!(body[0]["description"], fixture.expected_description);
}

#[tokio::test]
async fn test_get_sanitizes_malicious_bookmark() {
    let fixture = make_malicious_bookmark();
    let (store, stored) = seeded_store(vec![fixture.malicious.clone()]).await;
    let router = test_router(store);

    let response = send(&router, get(&format!("/bookmarks/{}", stored[0].id))).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["title"], fixture.expected_title);
    assert_eq!(body["description"], fixture.expected_description);
    assert_eq!(body["url"], "https://www.hackers.com");
}

#[tokio::test]
async fn test_create_sanitizes_response_but_stores_verbatim() {
    let fixture = make_malicious_bookmark();
    let (store, _) = seeded_store(vec![]).await;
    let router = test_router(store.clone());

    let body = json!({
        "title": &fixture.malicious.title,
        "url": &fixture.malicious.url,
        "description": &fixture.malicious.description,
        "rating": fixture.malicious.rating,
    });

    let response = send(&router, post_json("/bookmarks", &body)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();
    assert_eq!(created["title"], fixture.expected_title);
    assert_eq!(created["description"], fixture.expected_description);

    let id = created["id"].as_i64().unwrap();
    let row = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.title, fixture.malicious.title);
    assert_eq!(row.description, fixture.malicious.description);
}

#[tokio::test]
async fn test_plain_text_passes_through() {
    let (store, _) = seeded_store(vec![]).await;
    let router = test_router(store);

    let body = json!({
        "title": "Rock & Roll \"Hall\" of Fame",
        "url": "https://www.rockhall.com",
        "description": "It's 5 > 4, obviously",
        "rating": 5,
    });

    let created = send(&router, post_json("/bookmarks", &body)).await.json();

    assert_eq!(created["title"], "Rock & Roll \"Hall\" of Fame");
    assert_eq!(created["description"], "It's 5 &gt; 4, obviously");
}
