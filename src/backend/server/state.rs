/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers take `State<CommentStore>`
 * directly instead of the whole `AppState`.
 *
 * # Example
 *
 * ```rust
 * use commentbox::backend::comments::CommentStore;
 * use axum::extract::State;
 *
 * async fn handler(State(store): State<CommentStore>) {
 *     let _ = store.list_all().await;
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::comments::CommentStore;

/// Shared state for every request handler
///
/// # Thread Safety
///
/// `CommentStore` wraps a connection pool that is `Send + Sync` and cheap to
/// clone, so no additional locking is needed here.
#[derive(Clone)]
pub struct AppState {
    /// Comment persistence
    pub store: CommentStore,
}

impl AppState {
    pub fn new(store: CommentStore) -> Self {
        Self { store }
    }
}

impl FromRef<AppState> for CommentStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
