//! Bookmarks service - a small REST API for bookmarks.
//!
//! This binary opens the store, builds the router and serves HTTP.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookmarks_service::{
    config::Config,
    server::{create_router, CorsPolicy, RouterConfig},
    store::SqliteBookmarkStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    run_serve(config).await
}

async fn run_serve(config: Config) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let version = env!("CARGO_PKG_VERSION");
    info!("Bookmarks service v{}", version);
    info!("Configuration:");
    info!("  Database: {}", config.database);
    match config.cors_origins {
        Some(ref origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS origins: any"),
    }

    let store = if config.is_in_memory() {
        SqliteBookmarkStore::open_in_memory()
    } else {
        SqliteBookmarkStore::open(&config.database)
    };

    let store = match store {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open database '{}': {}", config.database, e);
            return ExitCode::FAILURE;
        }
    };

    match store.schema_version().await {
        Ok(version) => info!("  Schema version: {}", version),
        Err(e) => {
            error!("Failed to read schema version: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let router = create_router(store, build_router_config(&config));
    let addr = config.bind_address();

    info!("────────────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    curl http://{}/bookmarks", addr);
    info!("────────────────────────────────────────────────────────────────");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "bookmarks_service=debug,tower_http=debug"
    } else {
        "bookmarks_service=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application Config.
fn build_router_config(config: &Config) -> RouterConfig {
    let router_config =
        RouterConfig::new().with_cors(CorsPolicy::from_origins(config.cors_origins.clone()));

    if config.no_tracing {
        router_config.without_tracing()
    } else {
        router_config
    }
}
