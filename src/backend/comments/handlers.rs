//! Comment HTTP Handlers
//!
//! Stateless translation of the `/api/comments` verbs into store calls. The
//! handlers validate nothing beyond the shape of the JSON body; author and
//! text are passed through as given. Body and path rejections are taken as
//! `Result`s so they leave as `BackendError` JSON like everything else.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use super::store::CommentStore;
use crate::backend::error::BackendError;
use crate::shared::{
    Acknowledgment, Comment, CommentDraft, CommentPatch, CreateAcknowledgment,
    DeleteAcknowledgment, DurableId,
};

/// `GET /api`
pub async fn api_root() -> Json<Acknowledgment> {
    Json(Acknowledgment::new("API Initialized!"))
}

/// `GET /api/comments`
///
/// A store failure is reported as an error response, never as an empty list.
pub async fn list_comments(
    State(store): State<CommentStore>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let comments = store.list_all().await?;
    tracing::debug!("Listing {} comments", comments.len());
    Ok(Json(comments))
}

/// `POST /api/comments`
pub async fn create_comment(
    State(store): State<CommentStore>,
    payload: Result<Json<CommentDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAcknowledgment>), BackendError> {
    let Json(draft) = payload?;
    let comment = store.create(draft).await?;
    tracing::info!("Comment {} added", comment.id);

    Ok((
        StatusCode::CREATED,
        Json(CreateAcknowledgment {
            message: "Comment successfully added!".to_string(),
            id: comment.id,
        }),
    ))
}

/// `PUT /api/comments/{id}`
pub async fn update_comment(
    State(store): State<CommentStore>,
    raw_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<CommentPatch>, JsonRejection>,
) -> Result<Json<Acknowledgment>, BackendError> {
    let Path(raw_id) = raw_id?;
    let Json(patch) = payload?;
    let id = DurableId::parse(&raw_id)?;
    store.update_by_id(&id, patch).await?;
    tracing::info!("Comment {} updated", id);

    Ok(Json(Acknowledgment::new("Comment has been updated")))
}

/// `DELETE /api/comments/{id}`
///
/// Deleting an absent id succeeds with `deleted: false`.
pub async fn delete_comment(
    State(store): State<CommentStore>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteAcknowledgment>, BackendError> {
    let Path(raw_id) = raw_id?;
    let id = DurableId::parse(&raw_id)?;
    let deleted = store.delete_by_id(&id).await?;

    let message = if deleted {
        tracing::info!("Comment {} deleted", id);
        "Comment has been deleted"
    } else {
        tracing::debug!("Delete of absent comment {}", id);
        "Comment was already absent"
    };

    Ok(Json(DeleteAcknowledgment {
        message: message.to_string(),
        deleted,
    }))
}
