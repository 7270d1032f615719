//! HTTP server layer for the bookmarks service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │              /bookmarks    /bookmarks/{id}    /health           │
//! │                                                                 │
//! │  ┌─────────────────────────────┐  ┌─────────────────────────┐   │
//! │  │          handlers           │  │         routes          │   │
//! │  │ (validate, store, sanitize) │  │  (router, CORS, trace)  │   │
//! │  └─────────────────────────────┘  └─────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    create_bookmark_handler, delete_bookmark_handler, get_bookmark_handler, health_handler,
    list_bookmarks_handler, AppState, ErrorDetail, ErrorResponse, HealthResponse,
};
pub use routes::{create_router, CorsPolicy, RouterConfig};
