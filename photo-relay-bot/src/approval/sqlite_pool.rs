//! SQLite connection pool wrapper.
//!
//! The database file (and its parent directory) is created if it does not exist.

use std::path::Path;

use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::info;

/// Manages a single SQLite pool for one database file.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Opens (or creates) the database at `path`.
    pub async fn new(path: &str) -> Result<Self, sqlx::Error> {
        info!(db_path = %path, "Initializing SQLite pool");

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(path);

        let pool = SqlitePool::connect_with(options).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
