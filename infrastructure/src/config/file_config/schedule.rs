//! Schedule configuration from TOML (`[schedule]` section)

use crate::config::issue::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw schedule configuration from TOML
///
/// ```toml
/// [schedule]
/// interval_secs = 300
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScheduleConfig {
    pub interval_secs: u64,
}

impl Default for FileScheduleConfig {
    fn default() -> Self {
        Self { interval_secs: 300 }
    }
}

impl FileScheduleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.interval_secs == 0 {
            vec![ConfigIssue::error(
                "schedule.interval_secs",
                "interval must be at least one second",
            )]
        } else {
            Vec::new()
        }
    }
}
