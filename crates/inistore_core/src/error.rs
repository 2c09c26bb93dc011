//! Error types for inistore core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in inistore core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Backing store error.
    #[error("storage error: {0}")]
    Storage(#[from] inistore_storage::StorageError),

    /// A key cannot be written as an entry.
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// Why the key was rejected.
        reason: &'static str,
    },

    /// A section name or value cannot be written on a single line.
    #[error("invalid {what}: {message}")]
    InvalidValue {
        /// Which argument was rejected (section or value).
        what: &'static str,
        /// Description of the problem.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid key error.
    pub fn invalid_key(key: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason,
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(what: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            what,
            message: message.into(),
        }
    }
}
