//! Error types for jot-core

use thiserror::Error;

/// Result type alias using jot-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jot-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Positional reference outside the current collection
    #[error("Index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Note not found by id
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Backend could not be reached (transport failure)
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Backend answered with an explicit failure
    #[error("Backend rejected request: {0}")]
    BackendRejected(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Bounds-check helper shared by the positional store operations.
    pub(crate) const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
