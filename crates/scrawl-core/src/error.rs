//! Error types for scrawl-core

use thiserror::Error;

/// Result type alias using scrawl-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scrawl-core operations
///
/// None of these are fatal: every failing operation leaves the in-memory
/// state of the store exactly as it was before the call.
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before any mutation (e.g. a note with no title and no content)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// The durable store refused a read or write
    #[error("Storage error: {0}")]
    Persistence(String),

    /// Secret note PIN mismatch
    #[error("Incorrect PIN")]
    AuthFailure,

    /// `SQLite` error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error originates from the persistence bridge.
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Persistence(_) | Self::Sqlite(_) | Self::Io(_) | Self::Serialization(_)
        )
    }
}
