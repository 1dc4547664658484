//! Error types for the bot core.
//!
//! [`RelayError`] covers transport, storage, config and IO failures.

use thiserror::Error;

/// Top-level error (bot transport, storage, config, IO).
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for RelayError {
    fn from(e: sqlx::Error) -> Self {
        RelayError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::Storage(e.to_string())
    }
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
