//! HTTP request handlers for the bookmarks API.
//!
//! # Endpoints
//!
//! - `GET /bookmarks` - List all bookmarks
//! - `POST /bookmarks` - Create a bookmark
//! - `GET /bookmarks/{id}` - Fetch one bookmark
//! - `DELETE /bookmarks/{id}` - Delete one bookmark
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::bookmark::{validate, CreateBookmarkRequest, SerializedBookmark};
use crate::error::BookmarkError;
use crate::store::BookmarkStore;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state holding the injected store.
///
/// This is passed to all handlers via Axum's State extractor, so every route
/// reaches the store the same way.
pub struct AppState<S: BookmarkStore> {
    /// Backing store for bookmark rows
    pub store: Arc<S>,
}

impl<S: BookmarkStore> AppState<S> {
    /// Create a new application state around the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S: BookmarkStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error body: `{"error": {"message": "..."}}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Inner part of [`ErrorResponse`].
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Message returned for store failures; the detail only goes to the log.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Convert BookmarkError to HTTP response.
///
/// Missing fields, malformed bodies and unknown ids get a JSON
/// body. Rating and URL failures answer with a plain-text body. Errors are
/// logged by severity:
/// - 5xx at ERROR
/// - 404 at DEBUG
/// - other 4xx at WARN
impl IntoResponse for BookmarkError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match &self {
            BookmarkError::MissingField { field } => {
                warn!(field = *field, status = 400, "Missing required field");
            }
            BookmarkError::InvalidRating { supplied } => {
                warn!(supplied = %supplied, status = 400, "Invalid rating supplied");
            }
            BookmarkError::InvalidUrl { supplied } => {
                warn!(supplied = %supplied, status = 400, "Invalid url supplied");
            }
            BookmarkError::MalformedBody { message } => {
                warn!(status = 400, "Malformed request body: {}", message);
            }
            BookmarkError::NotFound { id } => {
                debug!(id = %id, status = 404, "Bookmark not found");
            }
            BookmarkError::Store(err) => {
                error!(status = 500, "Server error: {}", err);
            }
        }

        match self {
            BookmarkError::InvalidRating { .. } | BookmarkError::InvalidUrl { .. } => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            BookmarkError::MissingField { .. } | BookmarkError::MalformedBody { .. } => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            }
            BookmarkError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response()
            }
            BookmarkError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE)),
            )
                .into_response(),
        }
    }
}

impl From<JsonRejection> for BookmarkError {
    fn from(rejection: JsonRejection) -> Self {
        BookmarkError::MalformedBody {
            message: rejection.body_text(),
        }
    }
}

/// Parse a path id. Anything that is not an integer cannot name a row.
fn parse_id(raw: &str) -> Result<i64, BookmarkError> {
    raw.parse().map_err(|_| BookmarkError::NotFound {
        id: raw.to_string(),
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle bookmark list requests.
///
/// # Endpoint
///
/// `GET /bookmarks`
///
/// # Response
///
/// `200 OK` with a JSON array of sanitized bookmarks in insertion order.
///
/// # Errors
///
/// - `500 Internal Server Error`: Store failure
pub async fn list_bookmarks_handler<S: BookmarkStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<SerializedBookmark>>, BookmarkError> {
    let bookmarks = state.store.list_all().await?;
    Ok(Json(bookmarks.iter().map(SerializedBookmark::from).collect()))
}

/// Handle bookmark creation.
///
/// # Endpoint
///
/// `POST /bookmarks`
///
/// # Body
///
/// ```json
/// { "title": "Rust", "url": "https://www.rust-lang.org", "description": "optional", "rating": 5 }
/// ```
///
/// # Response
///
/// `201 Created` with a `Location: /bookmarks/{id}` header and the sanitized
/// bookmark as body.
///
/// # Errors
///
/// - `400 Bad Request`: Missing or invalid field, or unreadable body
/// - `500 Internal Server Error`: Store failure
pub async fn create_bookmark_handler<S: BookmarkStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateBookmarkRequest>, JsonRejection>,
) -> Result<Response, BookmarkError> {
    let Json(request) = payload?;
    let new_bookmark = validate(&request)?;

    let bookmark = state.store.insert(new_bookmark).await?;
    info!(id = bookmark.id, "Bookmark with id {} created", bookmark.id);

    let location = format!("/bookmarks/{}", bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(SerializedBookmark::from(&bookmark)),
    )
        .into_response())
}

/// Handle single bookmark lookups.
///
/// # Endpoint
///
/// `GET /bookmarks/{id}`
///
/// # Errors
///
/// - `404 Not Found`: No bookmark with this id
/// - `500 Internal Server Error`: Store failure
pub async fn get_bookmark_handler<S: BookmarkStore>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<SerializedBookmark>, BookmarkError> {
    let id = parse_id(&raw_id)?;

    let bookmark = state
        .store
        .get_by_id(id)
        .await?
        .ok_or(BookmarkError::NotFound { id: raw_id })?;

    Ok(Json(SerializedBookmark::from(&bookmark)))
}

/// Handle bookmark deletion.
///
/// # Endpoint
///
/// `DELETE /bookmarks/{id}`
///
/// # Response
///
/// `204 No Content` with an empty body.
///
/// # Errors
///
/// - `404 Not Found`: No bookmark with this id
/// - `500 Internal Server Error`: Store failure
pub async fn delete_bookmark_handler<S: BookmarkStore>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, BookmarkError> {
    let id = parse_id(&raw_id)?;

    if state.store.get_by_id(id).await?.is_none() {
        return Err(BookmarkError::NotFound { id: raw_id });
    }

    state.store.delete_by_id(id).await?;
    info!(id, "Bookmark with id {} deleted", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
