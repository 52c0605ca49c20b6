//! Twitter publisher: optional media upload (v1.1), then a tweet (v2).

use super::oauth::{Nonce, OAuthCredentials};
use super::types::{ApiErrorBody, MediaUploadResponse, TweetMedia, TweetRequest, TweetResponse};
use async_trait::async_trait;
use fakebuzz_application::{ImageArtifact, PostReceipt, PublishError, Publisher};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

pub const MEDIA_UPLOAD_URL: &str = "https://upload.twitter.com/1.1/media/upload.json";
pub const TWEET_URL: &str = "https://api.twitter.com/2/tweets";

/// Posts headlines to an account with user-context OAuth 1.0a.
pub struct TwitterPublisher {
    client: reqwest::Client,
    credentials: OAuthCredentials,
    upload_url: String,
    tweet_url: String,
}

impl TwitterPublisher {
    pub fn new(client: reqwest::Client, credentials: OAuthCredentials) -> Self {
        Self {
            client,
            credentials,
            upload_url: MEDIA_UPLOAD_URL.to_string(),
            tweet_url: TWEET_URL.to_string(),
        }
    }

    /// Override both endpoints (for testing against a local server).
    pub fn with_endpoints(mut self, upload_url: impl Into<String>, tweet_url: impl Into<String>) -> Self {
        self.upload_url = upload_url.into();
        self.tweet_url = tweet_url.into();
        self
    }

    fn authorization(&self, url: &str) -> String {
        // multipart and JSON bodies are not part of the signature
        self.credentials
            .authorization_header("POST", url, &[], &Nonce::generate())
    }

    async fn upload_media(&self, image: &ImageArtifact) -> Result<String, PublishError> {
        let bytes = tokio::fs::read(image.path()).await?;
        let part = Part::bytes(bytes).file_name(format!("image{}", image.dotted_extension()));
        let form = Form::new().part("media", part);

        let response = self
            .client
            .post(&self.upload_url)
            .header(AUTHORIZATION, self.authorization(&self.upload_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(PublishError::MediaUpload(format!(
                "status {}: {}",
                status.as_u16(),
                ApiErrorBody::message(&body)
            )));
        }

        let uploaded: MediaUploadResponse = serde_json::from_str(&body)
            .map_err(|e| PublishError::UnexpectedResponse(format!("media upload: {}", e)))?;
        debug!("Uploaded {} ({} bytes) as media {}", image.path().display(), image.size(), uploaded.media_id_string);
        Ok(uploaded.media_id_string)
    }

    async fn post_tweet(&self, text: &str, media_id: Option<String>) -> Result<String, PublishError> {
        let request = TweetRequest {
            text,
            media: media_id.map(|id| TweetMedia { media_ids: vec![id] }),
        };

        let response = self
            .client
            .post(&self.tweet_url)
            .header(AUTHORIZATION, self.authorization(&self.tweet_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(PublishError::Api {
                status: status.as_u16(),
                message: ApiErrorBody::message(&body),
            });
        }

        let created: TweetResponse = serde_json::from_str(&body)
            .map_err(|e| PublishError::UnexpectedResponse(format!("tweet: {}", e)))?;
        Ok(created.data.id)
    }
}

#[async_trait]
impl Publisher for TwitterPublisher {
    async fn publish(
        &self,
        text: &str,
        image: Option<&ImageArtifact>,
    ) -> Result<PostReceipt, PublishError> {
        let media_id = match image {
            Some(image) => Some(self.upload_media(image).await?),
            None => None,
        };
        let with_image = media_id.is_some();

        let id = self.post_tweet(text, media_id).await?;
        info!("Posted tweet {}", id);
        Ok(PostReceipt { id, with_image })
    }
}
