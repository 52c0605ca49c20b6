//! Domain layer for fakebuzz
//!
//! This crate contains the pure logic of the bot: turning a generated
//! sentence into a publishable message and describing image candidates.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Headline
//!
//! A sentence sampled from the text model is post-processed into a
//! [`PublishableMessage`]:
//!
//! - **Interrogative punctuation**: questions get a trailing `?`
//! - **Keywords**: noun-tagged tokens minus a helping-verb stoplist
//! - **Query words**: noun and adjective tokens, used for image search
//! - **Hashtags**: one per keyword, capped, trimmed to the length bound
//!
//! ## Image
//!
//! Image search results are parsed into ranked [`ImageCandidate`]s. Items
//! without a usable link are dropped at parse time instead of failing.

pub mod core;
pub mod headline;
pub mod image;

// Re-export commonly used types
pub use core::error::DomainError;
pub use headline::{
    hashtag::Hashtag,
    keywords::{STOPLIST, extract_keywords, extract_query_words},
    policy::{HeadlinePolicy, LengthRange},
    processor::{HeadlineProcessor, INTERROGATIVE_OPENERS, PublishableMessage},
    token::{TagFamily, TaggedToken},
};
pub use image::{
    candidate::{ImageCandidate, RawImageItem},
    query::{ImageFileType, ImageSearchQuery, ImageSize, UsageRights},
};
