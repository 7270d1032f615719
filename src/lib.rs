//! # Bookmarks Service
//!
//! A small HTTP service for storing, listing and deleting bookmarks.
//!
//! Each bookmark has a title, an absolute http(s) URL, an optional
//! description and a rating from 0 to 5. Rows are stored exactly as
//! submitted; markup in titles and descriptions is neutralized only when a
//! bookmark is written into a response.
//!
//! ## Architecture
//!
//! - [`bookmark`] - Domain types, request validation and output sanitization
//! - [`store`] - The `BookmarkStore` trait and its SQLite implementation
//! - [`server`] - Axum handlers and router
//! - [`config`] - CLI and environment configuration
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use bookmarks_service::{create_router, RouterConfig, SqliteBookmarkStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = SqliteBookmarkStore::open("bookmarks.db").expect("open database");
//!     let router = create_router(store, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod bookmark;
pub mod config;
pub mod error;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use bookmark::{
    is_web_uri, sanitize, validate, Bookmark, CreateBookmarkRequest, NewBookmark,
    SerializedBookmark, MAX_RATING, MIN_RATING,
};
pub use config::Config;
pub use error::{BookmarkError, StoreError};
pub use server::{
    create_router, AppState, CorsPolicy, ErrorResponse, HealthResponse, RouterConfig,
};
pub use store::{BookmarkStore, SqliteBookmarkStore, CURRENT_SCHEMA_VERSION};
