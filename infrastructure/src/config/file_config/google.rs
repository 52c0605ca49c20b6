//! Google Custom Search configuration from TOML (`[google]` section)

use crate::config::issue::ConfigIssue;
use fakebuzz_application::ImageParams;
use fakebuzz_domain::{ImageSize, UsageRights, image::query::MAX_RESULT_COUNT};
use serde::{Deserialize, Serialize};

/// Raw image search configuration from TOML
///
/// # Example
///
/// ```toml
/// [google]
/// api_key = "..."
/// cse_id = "..."
/// result_count = 10        # 1..=10
/// safe_search = true
/// rights = "public_domain" # optional
/// image_size = "medium"    # optional
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGoogleConfig {
    pub api_key: Option<String>,
    pub cse_id: Option<String>,
    pub result_count: u8,
    pub safe_search: bool,
    pub rights: Option<UsageRights>,
    pub image_size: Option<ImageSize>,
    /// Custom Search endpoint (overridable for testing)
    pub endpoint: String,
}

impl Default for FileGoogleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            cse_id: None,
            result_count: MAX_RESULT_COUNT,
            safe_search: true,
            rights: None,
            image_size: None,
            endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
        }
    }
}

impl FileGoogleConfig {
    /// Image filters for the acquisition use case (temp dir left unset).
    pub fn to_image_params(&self) -> ImageParams {
        ImageParams {
            result_count: self.result_count.clamp(1, MAX_RESULT_COUNT),
            safe_search: self.safe_search,
            rights: self.rights,
            size: self.image_size,
            temp_dir: None,
        }
    }

    /// API key and engine id, if both are set.
    pub fn credentials(&self) -> Option<(String, String)> {
        let key = self.api_key.as_deref().filter(|s| !s.trim().is_empty())?;
        let cx = self.cse_id.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((key.to_string(), cx.to_string()))
    }

    pub fn validate(&self, require_credentials: bool) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if require_credentials {
            if self.api_key.as_deref().is_none_or(|s| s.trim().is_empty()) {
                issues.push(ConfigIssue::error("google.api_key", "missing Google API key"));
            }
            if self.cse_id.as_deref().is_none_or(|s| s.trim().is_empty()) {
                issues.push(ConfigIssue::error(
                    "google.cse_id",
                    "missing custom search engine id",
                ));
            }
        }

        if self.result_count == 0 || self.result_count > MAX_RESULT_COUNT {
            issues.push(ConfigIssue::warning(
                "google.result_count",
                format!(
                    "{} is outside 1..={}, clamping",
                    self.result_count, MAX_RESULT_COUNT
                ),
            ));
        }

        issues
    }
}
