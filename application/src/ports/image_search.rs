//! Image search port
//!
//! Defines the interface for querying an image search engine.

use async_trait::async_trait;
use fakebuzz_domain::{ImageSearchQuery, RawImageItem};
use thiserror::Error;

/// Errors that can occur while searching for images
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Port for image search.
///
/// Items are returned in the engine's relevance order. An empty vector means
/// the search succeeded with no results.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search(&self, query: &ImageSearchQuery) -> Result<Vec<RawImageItem>, SearchError>;
}
