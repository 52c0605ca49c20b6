//! Application layer for fakebuzz
//!
//! This crate contains use cases, port definitions, and application parameters.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BotParams, ImageParams};
pub use ports::{
    image::{ImageArtifact, ImageResult},
    image_fetcher::{FetchError, FetchedBody, ImageFetcher},
    image_search::{ImageSearch, SearchError},
    language::{PosTagger, Tokenizer},
    progress::{BotProgressNotifier, NoProgress},
    publisher::{PostReceipt, PublishError, Publisher},
    text_model::TextModel,
};
pub use use_cases::acquire_image::AcquireImageUseCase;
pub use use_cases::compose_headline::ComposeHeadlineUseCase;
pub use use_cases::publish_headline::PublishHeadlineUseCase;
pub use use_cases::run_bot::{IterationOutcome, RunBotUseCase};
