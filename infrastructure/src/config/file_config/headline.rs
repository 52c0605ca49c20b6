//! Headline configuration from TOML (`[headline]` section)

use crate::config::issue::ConfigIssue;
use fakebuzz_domain::{DomainError, HeadlinePolicy, LengthRange};
use serde::{Deserialize, Serialize};

/// Raw headline policy from TOML
///
/// # Example
///
/// ```toml
/// [headline]
/// min_chars = 40
/// max_chars = 180
/// max_hashtags = 5
/// max_message_chars = 280   # 0 disables the bound
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHeadlineConfig {
    pub min_chars: usize,
    pub max_chars: usize,
    pub max_hashtags: usize,
    pub max_message_chars: usize,
}

impl Default for FileHeadlineConfig {
    fn default() -> Self {
        Self {
            min_chars: 40,
            max_chars: 180,
            max_hashtags: 5,
            max_message_chars: 280,
        }
    }
}

impl FileHeadlineConfig {
    pub fn to_policy(&self) -> Result<HeadlinePolicy, DomainError> {
        let length = LengthRange::new(self.min_chars, self.max_chars)?;
        let limit = (self.max_message_chars > 0).then_some(self.max_message_chars);
        Ok(HeadlinePolicy::default()
            .with_length(length)
            .with_max_hashtags(self.max_hashtags)
            .with_max_message_chars(limit))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Err(e) = self.to_policy() {
            issues.push(ConfigIssue::error("headline", e.to_string()));
        }
        if self.max_message_chars > 0 && self.max_chars > self.max_message_chars {
            issues.push(ConfigIssue::warning(
                "headline.max_chars",
                format!(
                    "sentences up to {} chars can exceed the {} char message limit",
                    self.max_chars, self.max_message_chars
                ),
            ));
        }

        issues
    }
}
