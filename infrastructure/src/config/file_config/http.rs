//! HTTP client configuration from TOML (`[http]` section)

use crate::config::issue::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw HTTP settings shared by every remote call
///
/// ```toml
/// [http]
/// timeout_secs = 30
/// max_image_bytes = 5242880
/// user_agent = "fakebuzz/0.2"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    pub timeout_secs: u64,
    pub max_image_bytes: usize,
    pub user_agent: String,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_image_bytes: 5 * 1024 * 1024,
            user_agent: format!("fakebuzz/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FileHttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "http.timeout_secs",
                "timeout must be at least one second",
            ));
        }
        if self.max_image_bytes == 0 {
            issues.push(ConfigIssue::error(
                "http.max_image_bytes",
                "image size limit must be positive",
            ));
        }
        issues
    }
}
