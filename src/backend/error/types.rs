/**
 * Backend Error Types
 *
 * This module defines error types specific to the comment server.
 * These errors are returned from HTTP handlers and converted to HTTP responses.
 *
 * # Error Types
 *
 * - `HandlerError` - Request-level failures with an explicit status
 * - `Store` - Failures raised by the comment store
 * - `SharedError` - Validation errors from the shared module
 *
 * # Status Mapping
 *
 * | Source                       | Status |
 * |------------------------------|--------|
 * | `StoreError::NotFound`       | 404    |
 * | `StoreError::Database`       | 500    |
 * | `SharedError::Validation`    | 400    |
 * | Body / path rejections       | as reported by the extractor |
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::comments::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// Each variant can be converted to an HTTP response through `IntoResponse`.
///
/// # Usage
///
/// ```rust
/// use commentbox::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., unknown route, malformed request)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Comment store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message
    ///
    /// Database failures are reported generically; the detail goes to the log.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Store(StoreError::NotFound(id)) => format!("Comment {} not found", id),
            Self::Store(StoreError::Database(_)) => "Comment store unavailable".to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::DurableId;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let error: BackendError = StoreError::NotFound(DurableId::new("abc")).into();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert!(error.message().contains("abc"));
    }

    #[test]
    fn test_store_database_maps_to_500() {
        let error: BackendError = StoreError::Database(sqlx::Error::PoolClosed).into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Comment store unavailable");
    }

    #[test]
    fn test_from_shared_error() {
        let shared_error = SharedError::validation("id", "must not be empty");
        let backend_error: BackendError = shared_error.into();

        match &backend_error {
            BackendError::SharedError(_) => {}
            _ => panic!("Expected SharedError variant"),
        }
        assert_eq!(backend_error.status_code(), StatusCode::BAD_REQUEST);
    }
}
