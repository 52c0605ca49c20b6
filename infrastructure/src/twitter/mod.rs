//! Twitter publishing adapter.

mod client;
mod oauth;
mod types;

pub use client::{MEDIA_UPLOAD_URL, TWEET_URL, TwitterPublisher};
pub use oauth::{Nonce, OAuthCredentials, signature_base_string};
