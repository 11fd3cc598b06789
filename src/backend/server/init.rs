/**
 * Server Initialization
 *
 * Opens the comment store and assembles the router.
 *
 * # Initialization Process
 *
 * 1. Open (or create) the SQLite database named by the configuration
 * 2. Wrap the store in `AppState`
 * 3. Create and configure the router
 *
 * Unlike optional services, the store is required: a database that cannot be
 * opened is a startup error.
 */

use axum::Router;

use crate::backend::comments::{CommentStore, StoreError};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing comment server");
    tracing::info!("Opening comment store at {}", config.database_url);

    let store = CommentStore::connect(&config.database_url).await?;
    Ok(create_app_with_store(store))
}

/// Build the router around an already opened store
pub fn create_app_with_store(store: CommentStore) -> Router<()> {
    let app_state = AppState::new(store);
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
