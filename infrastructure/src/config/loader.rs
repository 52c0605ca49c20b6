//! Configuration file loader with environment overrides

use super::file_config::FileConfig;
use super::issue::ConfigIssue;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix for environment overrides. Nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "FAKEBUZZ_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid config: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("config has {} error(s): {}", .0.len(), join_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration loader that merges defaults, the config file and the
/// environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `path` with `FAKEBUZZ_` environment overrides.
    pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    /// Load `path` with overrides from variables starting with `prefix`.
    ///
    /// Relative paths in the result are resolved against the directory
    /// containing the config file.
    pub fn load_with_env_prefix(path: &Path, prefix: &str) -> Result<FileConfig, ConfigError> {
        // figment treats a missing TOML file as empty
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let mut config: FileConfig = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(prefix).split("__"))
            .extract()
            .map_err(Box::new)?;

        let base = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        config.resolve_paths(base);

        Ok(config)
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }
}
