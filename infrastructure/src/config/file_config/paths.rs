//! Local path configuration from TOML (`[image]`, `[language]`, `[logging]`)
//!
//! Relative paths in these sections resolve against the directory of the
//! config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ```toml
/// [image]
/// temp_dir = "tmp"   # default: system temp dir
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageConfig {
    pub temp_dir: Option<PathBuf>,
}

/// ```toml
/// [language]
/// lexicon_path = "lexicon.tsv"   # word<TAB>tag overrides
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLanguageConfig {
    pub lexicon_path: Option<PathBuf>,
}

/// ```toml
/// [logging]
/// directory = "logs"   # daily rolling file, console only when unset
/// level = "info"       # used when neither -v nor RUST_LOG is given
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub directory: Option<PathBuf>,
    pub level: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            level: "info".to_string(),
        }
    }
}

pub(crate) fn resolve(path: &mut Option<PathBuf>, base: &Path) {
    if let Some(p) = path
        && p.is_relative()
    {
        *p = base.join(&*p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_only() {
        let mut relative = Some(PathBuf::from("logs"));
        resolve(&mut relative, Path::new("/srv/bot"));
        assert_eq!(relative, Some(PathBuf::from("/srv/bot/logs")));

        let mut absolute = Some(PathBuf::from("/var/log"));
        resolve(&mut absolute, Path::new("/srv/bot"));
        assert_eq!(absolute, Some(PathBuf::from("/var/log")));

        let mut none = None;
        resolve(&mut none, Path::new("/srv/bot"));
        assert!(none.is_none());
    }
}
