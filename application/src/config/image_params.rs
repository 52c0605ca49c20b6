//! Image search parameters.

use fakebuzz_domain::{
    DomainError, ImageSearchQuery, ImageSize, UsageRights, image::query::MAX_RESULT_COUNT,
};
use std::path::PathBuf;

/// Filters applied to every image search plus the directory that holds
/// downloaded artifacts.
#[derive(Debug, Clone)]
pub struct ImageParams {
    pub result_count: u8,
    pub safe_search: bool,
    pub rights: Option<UsageRights>,
    pub size: Option<ImageSize>,
    /// Where temporary artifacts are created (`None` = system temp dir).
    pub temp_dir: Option<PathBuf>,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            result_count: MAX_RESULT_COUNT,
            safe_search: true,
            rights: None,
            size: None,
            temp_dir: None,
        }
    }
}

impl ImageParams {
    /// Build the search query for `text` with these filters applied.
    pub fn query(&self, text: &str) -> Result<ImageSearchQuery, DomainError> {
        Ok(ImageSearchQuery::new(text)?
            .with_count(self.result_count)
            .with_safe_search(self.safe_search)
            .with_rights(self.rights)
            .with_size(self.size))
    }

    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_applies_filters() {
        let params = ImageParams {
            result_count: 5,
            safe_search: false,
            rights: Some(UsageRights::PublicDomain),
            size: Some(ImageSize::Medium),
            temp_dir: None,
        };
        let query = params.query("famous actor").unwrap();
        assert_eq!(query.count(), 5);
        assert!(!query.safe_search);
        assert_eq!(query.rights, Some(UsageRights::PublicDomain));
        assert_eq!(query.size, Some(ImageSize::Medium));
    }

    #[test]
    fn test_query_rejects_blank_text() {
        assert!(ImageParams::default().query(" ").is_err());
    }
}
