//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! at the composition root.

mod corpus;
mod google;
mod headline;
mod http;
mod paths;
mod schedule;
mod twitter;

pub use corpus::{FileCorpusConfig, FileCorpusSource};
pub use google::FileGoogleConfig;
pub use headline::FileHeadlineConfig;
pub use http::FileHttpConfig;
pub use paths::{FileImageConfig, FileLanguageConfig, FileLoggingConfig};
pub use schedule::FileScheduleConfig;
pub use twitter::FileTwitterConfig;

use super::issue::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Publishing credentials
    pub twitter: FileTwitterConfig,
    /// Image search credentials and filters
    pub google: FileGoogleConfig,
    /// Text model sources
    pub corpus: FileCorpusConfig,
    /// Headline length and hashtag policy
    pub headline: FileHeadlineConfig,
    pub schedule: FileScheduleConfig,
    pub http: FileHttpConfig,
    pub image: FileImageConfig,
    pub language: FileLanguageConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Credentials are only checked when `require_credentials` is set, so a
    /// dry run can start with an empty `[twitter]` and `[google]`.
    pub fn validate(&self, require_credentials: bool) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if require_credentials {
            issues.extend(self.twitter.validate());
        }
        issues.extend(self.google.validate(require_credentials));
        issues.extend(self.corpus.validate());
        issues.extend(self.headline.validate());
        issues.extend(self.schedule.validate());
        issues.extend(self.http.validate());

        issues
    }

    /// Make every relative path absolute against `base`.
    pub(crate) fn resolve_paths(&mut self, base: &Path) {
        self.corpus.resolve_paths(base);
        paths::resolve(&mut self.image.temp_dir, base);
        paths::resolve(&mut self.language.lexicon_path, base);
        paths::resolve(&mut self.logging.directory, base);
    }
}
