//! Router configuration for the bookmarks service.
//!
//! This module defines the HTTP routes and applies middleware for CORS and
//! request tracing.
//!
//! # Route Structure
//!
//! ```text
//! /health              - Health check
//! /bookmarks           - GET list, POST create
//! /bookmarks/{id}      - GET one, DELETE one
//! ```
//!
//! # Example
//!
//! ```ignore
//! use bookmarks_service::server::routes::{create_router, CorsPolicy, RouterConfig};
//! use bookmarks_service::store::SqliteBookmarkStore;
//!
//! let store = SqliteBookmarkStore::open("bookmarks.db")?;
//! let config = RouterConfig::new()
//!     .with_cors(CorsPolicy::Origins(vec!["https://example.com".to_string()]));
//!
//! let router = create_router(store, config);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{routing::get, Router};
use http::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION};
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_bookmark_handler, delete_bookmark_handler, get_bookmark_handler, health_handler,
    list_bookmarks_handler, AppState,
};
use crate::store::BookmarkStore;

/// Methods served under `/bookmarks`.
const BOOKMARK_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

/// How long browsers may cache a preflight answer.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

// =============================================================================
// Router Configuration
// =============================================================================

/// Which browser origins may call the bookmarks API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin, answered with `Access-Control-Allow-Origin: *`
    #[default]
    AnyOrigin,

    /// Only these origins. Entries that are not valid header values are
    /// skipped; an empty list admits no cross-origin caller.
    Origins(Vec<String>),
}

impl CorsPolicy {
    /// Policy for an optional `--cors-origins` list. A `*` entry admits any
    /// origin.
    pub fn from_origins(origins: Option<Vec<String>>) -> Self {
        match origins {
            Some(origins) if !origins.iter().any(|o| o.trim() == "*") => {
                CorsPolicy::Origins(origins)
            }
            _ => CorsPolicy::AnyOrigin,
        }
    }

    fn layer(&self) -> CorsLayer {
        // Location is exposed so browser clients can follow a 201
        let layer = CorsLayer::new()
            .allow_methods(BOOKMARK_METHODS)
            .allow_headers([CONTENT_TYPE, AUTHORIZATION])
            .expose_headers([LOCATION])
            .max_age(PREFLIGHT_MAX_AGE);

        match self {
            CorsPolicy::AnyOrigin => layer.allow_origin(Any),
            CorsPolicy::Origins(origins) => {
                let allowed: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
                    .collect();
                layer.allow_origin(allowed)
            }
        }
    }
}

/// Middleware settings for [`create_router`].
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub cors: CorsPolicy,

    /// Wrap the router in a `TraceLayer` that logs every request
    pub request_tracing: bool,
}

impl RouterConfig {
    /// Any origin, request tracing on.
    pub fn new() -> Self {
        Self {
            cors: CorsPolicy::AnyOrigin,
            request_tracing: true,
        }
    }

    pub fn with_cors(mut self, cors: CorsPolicy) -> Self {
        self.cors = cors;
        self
    }

    pub fn without_tracing(mut self) -> Self {
        self.request_tracing = false;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// The store is moved into shared state; every handler reads it from there.
pub fn create_router<S>(store: S, config: RouterConfig) -> Router
where
    S: BookmarkStore + 'static,
{
    let router = Router::new()
        .route("/health", get(health_handler))
        .route(
            "/bookmarks",
            get(list_bookmarks_handler::<S>).post(create_bookmark_handler::<S>),
        )
        .route(
            "/bookmarks/{id}",
            get(get_bookmark_handler::<S>).delete(delete_bookmark_handler::<S>),
        )
        .with_state(AppState::new(store))
        .layer(config.cors.layer());

    if config.request_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

// =============================================================================
// Tests
// =============================================================================
