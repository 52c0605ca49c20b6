//! Corpus configuration from TOML (`[corpus]` section)

use crate::config::issue::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One weighted corpus file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileCorpusSource {
    pub path: PathBuf,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl FileCorpusSource {
    pub fn new(path: impl Into<PathBuf>, weight: f64) -> Self {
        Self {
            path: path.into(),
            weight,
        }
    }
}

/// Raw text model configuration from TOML
///
/// # Example
///
/// ```toml
/// [corpus]
/// state_size = 4
/// rng_seed = 7       # optional, deterministic sampling
///
/// [[corpus.sources]]
/// path = "clickbait_data_filtered.txt"
/// weight = 1.6
///
/// [[corpus.sources]]
/// path = "non_clickbait_data_filtered.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorpusConfig {
    pub state_size: usize,
    pub rng_seed: Option<u64>,
    pub sources: Vec<FileCorpusSource>,
}

impl Default for FileCorpusConfig {
    fn default() -> Self {
        Self {
            state_size: 4,
            rng_seed: None,
            sources: vec![
                FileCorpusSource::new("clickbait_data_filtered.txt", 1.6),
                FileCorpusSource::new("non_clickbait_data_filtered.txt", 1.0),
            ],
        }
    }
}

impl FileCorpusConfig {
    /// Replace all sources with a single corpus file of weight 1.
    pub fn override_with(&mut self, path: impl Into<PathBuf>) {
        self.sources = vec![FileCorpusSource::new(path, 1.0)];
    }

    pub(crate) fn resolve_paths(&mut self, base: &Path) {
        for source in &mut self.sources {
            if source.path.is_relative() {
                source.path = base.join(&source.path);
            }
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.state_size == 0 {
            issues.push(ConfigIssue::error(
                "corpus.state_size",
                "state size must be at least 1",
            ));
        }
        if self.sources.is_empty() {
            issues.push(ConfigIssue::error(
                "corpus.sources",
                "at least one corpus file is required",
            ));
        }
        for (i, source) in self.sources.iter().enumerate() {
            if !source.weight.is_finite() || source.weight <= 0.0 {
                issues.push(ConfigIssue::error(
                    format!("corpus.sources[{}].weight", i),
                    format!("weight must be positive, got {}", source.weight),
                ));
            }
        }

        issues
    }
}
