//! egui Native Desktop App Module
//!
//! Desktop client for the comment service, built on egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Layered client configuration (defaults, TOML file, env)
//! - **`api`** - Async HTTP client for the comment endpoints
//! - **`sync`** - Client Cache, Reconciler and refresh timer
//! - **`state`** - UI state and user action handlers
//! - **`views`** - Comment list, submit form and status line
//! - **`markdown`** - Inline formatting of comment bodies
//! - **`theme`** - Colors and frame styles
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── api.rs          - HTTP client
//! ├── markdown.rs     - Inline Markdown
//! ├── state/          - UI state
//! ├── sync/           - Cache, reconciler, scheduler
//! ├── theme/          - Colors and styles
//! └── views/          - egui views
//! ```
//!
//! The UI thread owns all state. Network work runs on a tokio runtime that
//! lives alongside the window and reports back through a channel drained
//! once per frame.

pub mod api;
pub mod config;
pub mod markdown;
pub mod state;
pub mod sync;
pub mod theme;
pub mod views;

pub use api::{ClientError, CommentApiClient};
pub use config::Config;
pub use state::AppState;
pub use sync::{Reconciler, SyncPhase, SyncStatus};
