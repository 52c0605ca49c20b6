//! Image fetcher port
//!
//! Defines the interface for downloading an image candidate.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while downloading
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Response too large: more than {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Timeout")]
    Timeout,
}

/// Status code plus body of a download.
///
/// Adapters only read the body for status 200; for any other status
/// `bytes` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    pub status: u16,
    pub bytes: Vec<u8>,
}

impl FetchedBody {
    pub fn ok(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            bytes: bytes.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            bytes: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Port for HTTP downloads.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedBody, FetchError>;
}
