/**
 * API Route Handlers
 *
 * Registers the comment API under `/api`.
 *
 * # Routes
 *
 * - `GET /api` - Liveness probe
 * - `GET /api/comments` - List every comment
 * - `POST /api/comments` - Create a comment
 * - `PUT /api/comments/{id}` - Sparse update
 * - `DELETE /api/comments/{id}` - Idempotent delete
 */

use axum::{
    routing::{get, put},
    Router,
};

use crate::backend::comments::{
    api_root, create_comment, delete_comment, list_comments, update_comment,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the comment API configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api", get(api_root))
        .route("/api/comments", get(list_comments).post(create_comment))
        .route(
            "/api/comments/{id}",
            put(update_comment).delete(delete_comment),
        )
}
