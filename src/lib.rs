//! commentbox - Main Library
//!
//! A shared comment board: a small HTTP service that stores comments in
//! SQLite, and a desktop client that shows them, posts new ones
//! optimistically, and keeps itself current by polling.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and server
//!   - Comment wire format, durable ids, sparse patches
//!   - Shared error types and client configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Comment Store over `sqlx`/SQLite
//!   - Axum handlers, router and server configuration
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Client Cache and Reconciler
//!   - Comment list, form and status views
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server build (enables `backend`; on by default)
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use commentbox::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&ServerConfig::from_env()).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Server**: handlers share a `CommentStore`, a cloneable pool handle
//! - **Native**: egui is single-threaded immediate mode; network work runs
//!   on tokio and reports back over a channel
//!
//! # Error Handling
//!
//! Every layer has its own `thiserror` enum: `StoreError`, `BackendError`,
//! `ClientError`, `SharedError` and `ConfigError`.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
