//! Image search value objects.
//!
//! - [`query::ImageSearchQuery`]: what to ask the search collaborator for
//! - [`candidate::RawImageItem`]: one item as returned by the search API
//! - [`candidate::ImageCandidate`]: a parsed, downloadable item

pub mod candidate;
pub mod query;
