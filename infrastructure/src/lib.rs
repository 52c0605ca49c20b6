//! Infrastructure layer for fakebuzz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dry_run;
pub mod google;
pub mod http;
pub mod language;
pub mod markov;
pub mod twitter;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{ConfigError, ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use dry_run::{DryRunPublisher, NoImageSearch};
pub use google::GoogleImageSearch;
pub use http::{HttpImageFetcher, build_client};
pub use language::{LexiconError, LexiconTagger, TreebankTokenizer};
pub use markov::{CorpusError, MarkovTextModel};
pub use twitter::{OAuthCredentials, TwitterPublisher};
