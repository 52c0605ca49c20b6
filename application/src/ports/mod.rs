//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod image;
pub mod image_fetcher;
pub mod image_search;
pub mod language;
pub mod progress;
pub mod publisher;
pub mod text_model;
