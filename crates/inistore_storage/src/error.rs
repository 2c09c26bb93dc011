//! Error types for storage operations.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stored bytes are not valid text in the detected encoding.
    #[error("cannot decode {encoding} text: {message}")]
    Decode {
        /// Name of the encoding used for decoding.
        encoding: &'static str,
        /// Description of the failure.
        message: String,
    },

    /// The backing store does not exist.
    #[error("backing store not found: {0}")]
    NotFound(String),
}

impl StorageError {
    /// Creates a decode error.
    pub fn decode(encoding: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            encoding,
            message: message.into(),
        }
    }
}
