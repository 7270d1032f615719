use thiserror::Error;

/// Errors raised by the bookmark store.
///
/// These are never shown to clients verbatim; the router maps every variant
/// to a generic 500 response and logs the detail.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Error reported by the underlying SQL engine
    #[error("Database error: {0}")]
    Database(String),

    /// The connection lock was poisoned by a panicking query
    #[error("Database connection is unavailable")]
    Poisoned,

    /// The blocking task running the query failed to complete
    #[error("Storage task failed: {0}")]
    Task(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Errors produced while handling a bookmark request.
///
/// The `Display` text of the validation variants is the exact message
/// returned to the client.
#[derive(Debug, Clone, Error)]
pub enum BookmarkError {
    /// A required field is absent or falsy (null, `false`, empty or zero)
    #[error("'{field}' is required")]
    MissingField { field: &'static str },

    /// Rating is not an integer in the range 0..=5
    #[error("'rating' must be a number between 0 and 5")]
    InvalidRating { supplied: String },

    /// URL is not a string holding an absolute http(s) URI
    #[error("'url' must be a valid URL")]
    InvalidUrl { supplied: String },

    /// Request body could not be read as a JSON object
    #[error("{message}")]
    MalformedBody { message: String },

    /// No bookmark exists with the requested id
    #[error("Bookmark Not Found")]
    NotFound { id: String },

    /// The store failed while serving the request
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
