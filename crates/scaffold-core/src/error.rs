//! Error types for scaffold-core

use thiserror::Error;

/// Result type alias using scaffold-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scaffold-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Backing file exists but could not be read or is not a database
    #[error("Failed to load note store: {0}")]
    StorageInit(String),

    /// Backing file could not be rewritten
    #[error("Failed to write note store: {0}")]
    StorageWrite(String),

    /// Insert succeeded but reading the row back produced nothing
    #[error("Inserted note could not be read back")]
    InsertVerification,

    /// TCP demo listener could not bind its address
    #[error("Failed to bind TCP demo listener on {addr}: {source}")]
    ListenerBind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// `SQLite` error
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The backend side of the boundary is gone
    #[error("Backend is not running")]
    BoundaryClosed,

    /// A blocking store task failed to complete
    #[error("Background task failed: {0}")]
    Background(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
