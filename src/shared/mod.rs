//! Shared Module
//!
//! Types used by both the comment server and the desktop client: the comment
//! wire format, shared error types, and client configuration.

/// Comment wire types
pub mod comment;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use comment::{
    Acknowledgment, Comment, CommentDraft, CommentPatch, CreateAcknowledgment,
    DeleteAcknowledgment, DurableId,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
