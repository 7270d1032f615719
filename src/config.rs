//! Configuration management for the bookmarks service.
//!
//! Settings come from command-line arguments via clap, fall back to
//! environment variables with the `BOOKMARKS_` prefix, and otherwise use the
//! defaults below.
//!
//! # Environment Variables
//!
//! - `BOOKMARKS_HOST` - Server bind address (default: 0.0.0.0)
//! - `BOOKMARKS_PORT` - Server port (default: 8000)
//! - `BOOKMARKS_DATABASE` - SQLite database path, or `:memory:` (default: bookmarks.db)
//! - `BOOKMARKS_CORS_ORIGINS` - Comma-separated allowed origins (default: any)

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default database file.
pub const DEFAULT_DATABASE: &str = "bookmarks.db";

/// Database path selecting an in-memory store.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Bookmarks service - a small REST API for bookmarks.
#[derive(Parser, Debug, Clone)]
#[command(name = "bookmarks-service")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "BOOKMARKS_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "BOOKMARKS_PORT")]
    pub port: u16,

    /// Path to the SQLite database file. Use `:memory:` for a throwaway store.
    #[arg(long, default_value = DEFAULT_DATABASE, env = "BOOKMARKS_DATABASE")]
    pub database: String,

    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "BOOKMARKS_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.database.trim().is_empty() {
            return Err(
                "Database path is required. Set --database or BOOKMARKS_DATABASE".to_string(),
            );
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the configured database lives only in memory.
    pub fn is_in_memory(&self) -> bool {
        self.database == IN_MEMORY_DATABASE
    }
}

// =============================================================================
// Tests
// =============================================================================
