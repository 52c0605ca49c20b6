//! Shared HTTP client and image download adapter.

mod fetcher;

pub use fetcher::HttpImageFetcher;

use std::time::Duration;

/// Build the client shared by every remote call.
pub fn build_client(timeout: Duration, user_agent: &str) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}
