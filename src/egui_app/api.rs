/**
 * Comment API Client
 *
 * Async HTTP client for the `/api/comments` endpoints. Every call is a
 * single request; retries are left to the polling loop.
 */

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::egui_app::config::{Config, DEFAULT_REQUEST_TIMEOUT_MS};
use crate::shared::{
    Acknowledgment, Comment, CommentDraft, CommentPatch, CreateAcknowledgment,
    DeleteAcknowledgment, DurableId,
};

/// Failures seen by the client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached the server or never returned
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The mutation targeted an id the server does not know
    #[error("comment {0} not found")]
    NotFound(DurableId),

    /// The server answered with an error status
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body was not what the endpoint promises
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The configured base URL cannot address the endpoint
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Store failures and transport failures are handled alike
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the comment service
#[derive(Debug, Clone)]
pub struct CommentApiClient {
    http: Client,
    base_url: Url,
}

impl CommentApiClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        Self::with_timeout(config.server_url(), config.request_timeout())
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS))
    }

    /// Client whose requests fail with `Transport` after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Endpoint URL with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET /api/comments`
    pub async fn list_comments(&self) -> Result<Vec<Comment>, ClientError> {
        let url = self.endpoint(&["api", "comments"])?;
        let response = self.http.get(url).send().await?;
        decode(check_status(response, None).await?).await
    }

    /// `POST /api/comments`
    pub async fn create_comment(
        &self,
        draft: &CommentDraft,
    ) -> Result<CreateAcknowledgment, ClientError> {
        let url = self.endpoint(&["api", "comments"])?;
        let response = self.http.post(url).json(draft).send().await?;
        decode(check_status(response, None).await?).await
    }

    /// `PUT /api/comments/{id}`
    pub async fn update_comment(
        &self,
        id: &DurableId,
        patch: &CommentPatch,
    ) -> Result<Acknowledgment, ClientError> {
        let url = self.endpoint(&["api", "comments", id.as_str()])?;
        let response = self.http.put(url).json(patch).send().await?;
        decode(check_status(response, Some(id)).await?).await
    }

    /// `DELETE /api/comments/{id}`
    pub async fn delete_comment(&self, id: &DurableId) -> Result<DeleteAcknowledgment, ClientError> {
        let url = self.endpoint(&["api", "comments", id.as_str()])?;
        let response = self.http.delete(url).send().await?;
        decode(check_status(response, Some(id)).await?).await
    }
}

async fn check_status(response: Response, target: Option<&DurableId>) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = target {
            return Err(ClientError::NotFound(id.clone()));
        }
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                status.to_string()
            } else {
                text
            }
        });

    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
