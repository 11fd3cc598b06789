//! Backend Module
//!
//! Server-side code for the comment service: an Axum HTTP server over a
//! SQLite-backed comment store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`comments`** - Comment Store and the HTTP handlers over it
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── comments/       - Store and handlers
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! └── error/          - Error types
//! ```
//!
//! # Concurrency
//!
//! Each request is handled independently. The store is not transactional
//! across requests; two deletes of the same id both complete, and only one
//! reports `deleted: true`.

/// Comment store and handlers
pub mod comments;

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

pub use comments::{CommentStore, StoreError};
pub use error::BackendError;
pub use server::{create_app, create_app_with_store, ServerConfig};
