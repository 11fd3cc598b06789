/**
 * Comment Data Structures
 *
 * Wire types for the comment service, shared between the backend handlers
 * and the desktop client. Everything here serializes to the JSON shapes of
 * the `/api/comments` endpoints.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::error::SharedError;

/// Server-assigned identifier of a stored comment
///
/// Only the Comment Store mints these. The client receives them from a list
/// response or a create acknowledgment and uses them for update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurableId(String);

impl DurableId {
    /// Wrap an identifier string produced by the store
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse an identifier taken from a request path
    ///
    /// Rejects blank identifiers and anything containing a path separator.
    pub fn parse(raw: &str) -> Result<Self, SharedError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SharedError::validation("id", "Comment id cannot be empty"));
        }
        if trimmed.contains('/') {
            return Err(SharedError::validation("id", "Comment id cannot contain '/'"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DurableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored comment as returned by `GET /api/comments`
///
/// `author` and `text` are free text and both optional. `text` is
/// Markdown-flavoured and must never be treated as trusted markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Durable id; `_id` is accepted for payloads from document stores
    #[serde(alias = "_id")]
    pub id: DurableId,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of `POST /api/comments`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl CommentDraft {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            text: Some(text.into()),
        }
    }
}

/// Sparse patch sent with `PUT /api/comments/{id}`
///
/// `None` means "leave unchanged" and is never serialized, so it cannot be
/// confused with `Some("")`, which is an intentional empty value. A JSON
/// `null` on the wire also deserializes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CommentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.text.is_none()
    }
}

/// Generic acknowledgment (`GET /api`, `PUT /api/comments/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub message: String,
}

impl Acknowledgment {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgment of `POST /api/comments`, carrying the durable id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAcknowledgment {
    pub message: String,
    pub id: DurableId,
}

/// Acknowledgment of `DELETE /api/comments/{id}`
///
/// `deleted` is false when the id was already absent. The request still
/// succeeds so repeated deletes stay idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAcknowledgment {
    pub message: String,
    pub deleted: bool,
}
