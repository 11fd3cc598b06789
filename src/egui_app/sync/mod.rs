//! # Comment Synchronization
//!
//! Client-side half of the comment system:
//!
//! - **`cache`** - the Client Cache and its `Pending`/`Confirmed` record keys
//! - **`reconciler`** - refresh, optimistic create, update and delete
//! - **`scheduler`** - the cancellable refresh timer
//!
//! ## Usage
//!
//! ```rust,no_run
//! use commentbox::egui_app::api::CommentApiClient;
//! use commentbox::egui_app::sync::Reconciler;
//! use commentbox::shared::CommentDraft;
//! use std::time::Duration;
//!
//! # fn example(runtime: &tokio::runtime::Runtime) -> Result<(), Box<dyn std::error::Error>> {
//! let api = CommentApiClient::with_base_url("http://127.0.0.1:3001")?;
//! let mut reconciler = Reconciler::new(api, runtime.handle().clone());
//! reconciler.start_polling(Duration::from_millis(2000));
//!
//! reconciler.create(CommentDraft::new("Ann", "hi"));
//!
//! // once per frame
//! reconciler.pump();
//! for entry in reconciler.cache().entries() {
//!     println!("{:?}: {:?}", entry.author, entry.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod reconciler;
pub mod scheduler;

pub use cache::{CachedComment, ClientCache, CommentKey, TransientId};
pub use reconciler::{Reconciler, SyncEvent, SyncPhase, SyncStatus};
pub use scheduler::PollHandle;
