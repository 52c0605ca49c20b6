//! Custom Search JSON API response shapes (only the fields read).

use fakebuzz_domain::RawImageItem;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    /// Absent when the query has no results
    #[serde(default)]
    pub items: Vec<RawImageItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
