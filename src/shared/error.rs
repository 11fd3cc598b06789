//! Shared Error Types
//!
//! Errors that can occur on both sides of the wire, currently the
//! validation of identifiers taken from requests.
//!
//! # Usage
//!
//! ```rust
//! use commentbox::shared::error::SharedError;
//!
//! let error = SharedError::validation("id", "Comment id cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both frontend and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
