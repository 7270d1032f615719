//! SQLite-backed bookmark store.
//!
//! `rusqlite` is synchronous, so every query runs inside
//! [`tokio::task::spawn_blocking`]. The request awaiting the query is
//! suspended while other requests keep being served.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::bookmark::{Bookmark, NewBookmark};
use crate::error::StoreError;

use super::migrations;
use super::BookmarkStore;

const SELECT_COLUMNS: &str = "id, title, url, description, rating";

/// Bookmark store over a single SQLite connection.
///
/// Cloning is cheap; clones share the same connection.
#[derive(Clone)]
pub struct SqliteBookmarkStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBookmarkStore {
    /// Open (or create) the database file at `path` and run migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database and run migrations.
    ///
    /// The data is discarded when the last clone of the store is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        migrations::run_all(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Return the schema version recorded in the database.
    pub async fn schema_version(&self) -> Result<i32, StoreError> {
        self.with_connection(migrations::schema_version).await
    }

    /// Run `f` against the connection on the blocking thread pool.
    async fn with_connection<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, rusqlite::Error> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&guard).map_err(StoreError::from)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

fn row_to_bookmark(row: &Row<'_>) -> rusqlite::Result<Bookmark> {
    Ok(Bookmark {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        description: row.get(3)?,
        rating: row.get(4)?,
    })
}

#[async_trait]
impl BookmarkStore for SqliteBookmarkStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let bookmarks = self
            .with_connection(|conn| {
                let mut stmt =
                    conn.prepare(&format!("SELECT {SELECT_COLUMNS} FROM bookmarks ORDER BY id"))?;
                let rows = stmt.query_map([], row_to_bookmark)?;
                let bookmarks = rows.collect::<Result<Vec<_>, _>>()?;
                Ok(bookmarks)
            })
            .await?;

        debug!(count = bookmarks.len(), "Listed bookmarks");
        Ok(bookmarks)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError> {
        self.with_connection(move |conn| {
            conn.query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM bookmarks WHERE id = ?1"),
                params![id],
                row_to_bookmark,
            )
            .optional()
        })
        .await
    }

    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark, StoreError> {
        self.with_connection(move |conn| {
            conn.query_row(
                &format!(
                    "INSERT INTO bookmarks (title, url, description, rating) \
                     VALUES (?1, ?2, ?3, ?4) RETURNING {SELECT_COLUMNS}"
                ),
                params![
                    bookmark.title,
                    bookmark.url,
                    bookmark.description,
                    bookmark.rating
                ],
                row_to_bookmark,
            )
        })
        .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let affected = self
            .with_connection(move |conn| {
                conn.execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            })
            .await?;

        debug!(id, affected, "Deleted bookmark rows");
        Ok(())
    }
}
