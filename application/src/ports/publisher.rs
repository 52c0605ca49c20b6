//! Publisher port
//!
//! Defines the interface for posting a message to the social account.

use super::image::ImageArtifact;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while publishing
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Media upload failed: {0}")]
    MediaUpload(String),

    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Identifier of a published post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReceipt {
    pub id: String,
    pub with_image: bool,
}

/// Port for publishing.
///
/// Adapters must not delete the artifact; its lifetime is owned by the
/// caller.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(
        &self,
        text: &str,
        image: Option<&ImageArtifact>,
    ) -> Result<PostReceipt, PublishError>;
}
