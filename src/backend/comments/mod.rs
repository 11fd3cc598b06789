//! Comments Backend Module
//!
//! Server-side comment functionality:
//!
//! - **`store`** - SQLite-backed Comment Store (create, list, patch, delete)
//! - **`handlers`** - HTTP handlers for the `/api/comments` routes
//!
//! # Example
//!
//! ```rust,no_run
//! use commentbox::backend::comments::CommentStore;
//! use commentbox::shared::CommentDraft;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = CommentStore::in_memory().await?;
//! let comment = store.create(CommentDraft::new("Ann", "hi")).await?;
//! println!("stored as {}", comment.id);
//! # Ok(())
//! # }
//! ```

/// Comment persistence
pub mod store;

/// HTTP handlers
pub mod handlers;

pub use handlers::{api_root, create_comment, delete_comment, list_comments, update_comment};
pub use store::{CommentStore, StoreError};
