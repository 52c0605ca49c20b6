//! Configuration file loading for fakebuzz
//!
//! The configuration is layered (highest priority first):
//!
//! 1. `FAKEBUZZ_` environment variables (`FAKEBUZZ_TWITTER__API_KEY`, ...)
//! 2. The TOML file given on the command line
//! 3. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{
    FileConfig, FileCorpusConfig, FileCorpusSource, FileGoogleConfig, FileHeadlineConfig,
    FileHttpConfig, FileImageConfig, FileLanguageConfig, FileLoggingConfig, FileScheduleConfig,
    FileTwitterConfig,
};
pub use issue::{ConfigIssue, Severity};
pub use loader::{ConfigError, ConfigLoader, ENV_PREFIX};
