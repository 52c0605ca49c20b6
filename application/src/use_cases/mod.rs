//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod acquire_image;
pub mod compose_headline;
pub mod publish_headline;
pub mod run_bot;
