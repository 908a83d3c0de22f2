//! Error types for bookstore core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and hints.

use thiserror::Error;

/// Result type alias for bookstore operations.
pub type Result<T> = std::result::Result<T, BookstoreError>;

/// Core error type for bookstore operations.
#[derive(Debug, Error)]
pub enum BookstoreError {
    /// Storage backend error (unreadable or unwritable data file)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date string that is not in `YYYY-MM-DD` form
    #[error("Invalid date \"{value}\" (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    /// A referenced employee or book does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BookstoreError {
    pub fn invalid_date(value: impl Into<String>) -> Self {
        BookstoreError::InvalidDate {
            value: value.into(),
        }
    }
}

impl From<std::io::Error> for BookstoreError {
    fn from(err: std::io::Error) -> Self {
        BookstoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BookstoreError {
    fn from(err: serde_json::Error) -> Self {
        BookstoreError::Validation(err.to_string())
    }
}
