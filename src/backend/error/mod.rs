//! Backend Error Module
//!
//! Error types for the comment server, convertible to HTTP responses.
//!
//! - **`types`** - `BackendError` and its status mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! Every error leaves the server as a JSON object `{ "error", "status" }`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
