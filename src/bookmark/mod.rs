//! Bookmark domain model.
//!
//! A bookmark moves through three shapes:
//!
//! ```text
//! CreateBookmarkRequest ──validate()──▶ NewBookmark ──store.insert()──▶ Bookmark
//!                                                                        │
//!                                           SerializedBookmark ◀──sanitize()
//! ```
//!
//! Rows are kept exactly as they were submitted. Markup in `title` and
//! `description` is only neutralized when a [`Bookmark`] is turned into a
//! [`SerializedBookmark`] for a response.

mod sanitize;
mod validate;

pub use sanitize::sanitize;
pub use validate::{is_web_uri, validate, CreateBookmarkRequest, MAX_RATING, MIN_RATING};

use serde::{Deserialize, Serialize};

/// A bookmark row as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Identifier assigned by the store on insert
    pub id: i64,

    /// Title, stored verbatim
    pub title: String,

    /// Absolute http(s) URL
    pub url: String,

    /// Optional free-text description, stored verbatim
    pub description: Option<String>,

    /// Rating between 0 and 5
    pub rating: i64,
}

/// A validated bookmark that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i64,
}

/// The representation of a bookmark returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedBookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i64,
}

impl From<&Bookmark> for SerializedBookmark {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id,
            title: sanitize(&bookmark.title),
            url: bookmark.url.clone(),
            description: sanitize(bookmark.description.as_deref().unwrap_or_default()),
            rating: bookmark.rating,
        }
    }
}
