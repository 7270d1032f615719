//! Data access for bookmarks.
//!
//! The router talks to storage only through the [`BookmarkStore`] trait, so
//! the backing engine is chosen by whoever builds the router.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           HTTP handlers                 │
//! └────────────────────┬────────────────────┘
//!                      │ Arc<S: BookmarkStore>
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │          BookmarkStore trait            │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │        SqliteBookmarkStore              │
//! │   (one statement per call, blocking     │
//! │    work moved off the async runtime)    │
//! └─────────────────────────────────────────┘
//! ```

mod migrations;
mod sqlite;

pub use migrations::CURRENT_SCHEMA_VERSION;
pub use sqlite::SqliteBookmarkStore;

use async_trait::async_trait;

use crate::bookmark::{Bookmark, NewBookmark};
use crate::error::StoreError;

/// Storage backend for bookmark rows.
///
/// Each method maps to a single statement against the bookmarks table.
/// Errors are returned untouched; the caller decides how to report them.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Return every bookmark in insertion order.
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError>;

    /// Look up a bookmark by id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError>;

    /// Persist a new bookmark and return it with its assigned id.
    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark, StoreError>;

    /// Remove the bookmark with the given id, if any.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}
