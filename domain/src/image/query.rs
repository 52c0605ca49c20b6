//! Image search query and filters.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most result items a single search request may ask for.
pub const MAX_RESULT_COUNT: u8 = 10;

/// File types accepted for attached images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFileType {
    Gif,
    Png,
    Jpg,
}

impl ImageFileType {
    pub const ALL: [ImageFileType; 3] = [ImageFileType::Gif, ImageFileType::Png, ImageFileType::Jpg];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFileType::Gif => "gif",
            ImageFileType::Png => "png",
            ImageFileType::Jpg => "jpg",
        }
    }
}

impl fmt::Display for ImageFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size filter for image results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Icon,
    Small,
    Medium,
    Large,
    Xlarge,
    Xxlarge,
    Huge,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Icon => "icon",
            ImageSize::Small => "small",
            ImageSize::Medium => "medium",
            ImageSize::Large => "large",
            ImageSize::Xlarge => "xlarge",
            ImageSize::Xxlarge => "xxlarge",
            ImageSize::Huge => "huge",
        }
    }
}

/// Licensing filter for image results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageRights {
    PublicDomain,
    Attribute,
    ShareAlike,
    NonCommercial,
    NonDerived,
}

impl UsageRights {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageRights::PublicDomain => "cc_publicdomain",
            UsageRights::Attribute => "cc_attribute",
            UsageRights::ShareAlike => "cc_sharealike",
            UsageRights::NonCommercial => "cc_noncommercial",
            UsageRights::NonDerived => "cc_nonderived",
        }
    }
}

/// One image search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSearchQuery {
    text: String,
    pub file_types: Vec<ImageFileType>,
    count: u8,
    pub safe_search: bool,
    pub rights: Option<UsageRights>,
    pub size: Option<ImageSize>,
}

impl ImageSearchQuery {
    /// Create a query for `text` with the default filters: gif/png/jpg,
    /// ten results, safe search on, no rights or size filter.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidQuery("query text is empty".to_string()));
        }
        Ok(Self {
            text: trimmed.to_string(),
            file_types: ImageFileType::ALL.to_vec(),
            count: MAX_RESULT_COUNT,
            safe_search: true,
            rights: None,
            size: None,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    // ==================== Builder Methods ====================

    /// Requested result count, clamped to `1..=10`.
    pub fn with_count(mut self, count: u8) -> Self {
        self.count = count.clamp(1, MAX_RESULT_COUNT);
        self
    }

    pub fn with_safe_search(mut self, safe: bool) -> Self {
        self.safe_search = safe;
        self
    }

    pub fn with_rights(mut self, rights: Option<UsageRights>) -> Self {
        self.rights = rights;
        self
    }

    pub fn with_size(mut self, size: Option<ImageSize>) -> Self {
        self.size = size;
        self
    }

    /// File types joined with commas, e.g. `gif,png,jpg`.
    pub fn file_types_param(&self) -> String {
        self.file_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
