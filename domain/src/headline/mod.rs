//! Headline post-processing.
//!
//! Turns a raw generated sentence plus its part-of-speech tags into a
//! [`processor::PublishableMessage`]. Tokenizing and tagging happen outside
//! the domain; this module only sees the resulting [`token::TaggedToken`]s.

pub mod hashtag;
pub mod keywords;
pub mod policy;
pub mod processor;
pub mod token;
