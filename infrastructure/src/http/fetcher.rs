//! Image download over HTTP with a body size cap.

use async_trait::async_trait;
use fakebuzz_application::{FetchError, FetchedBody, ImageFetcher};
use tracing::debug;

/// Default maximum image size (5 MB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Downloads candidate images. Only `200` bodies are read.
pub struct HttpImageFetcher {
    client: reqwest::Client,
    max_bytes: usize,
}

impl HttpImageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

fn map_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedBody, FetchError> {
        let mut response = self.client.get(url).send().await.map_err(map_error)?;

        let status = response.status().as_u16();
        if status != 200 {
            debug!("GET {} returned {}", url, status);
            return Ok(FetchedBody::status(status));
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_bytes as u64)
        {
            return Err(FetchError::TooLarge {
                limit: self.max_bytes,
            });
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(map_error)? {
            if bytes.len() + chunk.len() > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(FetchedBody::ok(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{response, serve};
    use std::time::Duration;

    fn fetcher() -> HttpImageFetcher {
        let client = crate::http::build_client(Duration::from_secs(5), "fakebuzz-test").unwrap();
        HttpImageFetcher::new(client)
    }

    #[tokio::test]
    async fn test_ok_body_is_read() {
        let (base, requests) = serve(vec![response("200 OK", "image/png", b"\x89PNG")]).await;

        let body = fetcher().fetch(&format!("{}/dog.png", base)).await.unwrap();

        assert!(body.is_ok());
        assert_eq!(body.bytes, b"\x89PNG");
        let requests = requests.lock().unwrap();
        assert!(requests[0].starts_with("GET /dog.png"));
        assert!(requests[0].to_lowercase().contains("user-agent: fakebuzz-test"));
    }

    #[tokio::test]
    async fn test_non_200_status_skips_body() {
        let (base, _) = serve(vec![response("404 Not Found", "text/html", b"missing")]).await;

        let body = fetcher().fetch(&format!("{}/gone.jpg", base)).await.unwrap();

        assert_eq!(body, FetchedBody::status(404));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let (base, _) = serve(vec![response("200 OK", "image/gif", &[0u8; 64])]).await;

        let err = fetcher()
            .with_max_bytes(16)
            .fetch(&format!("{}/big.gif", base))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::TooLarge { limit: 16 }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // port 9 on localhost: connection refused
        let err = fetcher().fetch("http://127.0.0.1:9/x.png").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_) | FetchError::Timeout));
    }
}
