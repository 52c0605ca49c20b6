//! Twitter configuration from TOML (`[twitter]` section)

use crate::config::issue::ConfigIssue;
use crate::twitter::OAuthCredentials;
use serde::{Deserialize, Serialize};

/// Raw Twitter credentials from TOML
///
/// # Example
///
/// ```toml
/// [twitter]
/// api_key = "..."
/// api_secret_key = "..."
/// access_token = "..."
/// access_token_secret = "..."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTwitterConfig {
    pub api_key: Option<String>,
    pub api_secret_key: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
}

impl FileTwitterConfig {
    fn fields(&self) -> [(&'static str, &Option<String>); 4] {
        [
            ("twitter.api_key", &self.api_key),
            ("twitter.api_secret_key", &self.api_secret_key),
            ("twitter.access_token", &self.access_token),
            ("twitter.access_token_secret", &self.access_token_secret),
        ]
    }

    /// All four credentials, or `None` if any is missing or blank.
    pub fn credentials(&self) -> Option<OAuthCredentials> {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);
        Some(OAuthCredentials {
            consumer_key: present(&self.api_key)?,
            consumer_secret: present(&self.api_secret_key)?,
            token: present(&self.access_token)?,
            token_secret: present(&self.access_token_secret)?,
        })
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.fields()
            .into_iter()
            .filter(|(_, v)| v.as_deref().is_none_or(|s| s.trim().is_empty()))
            .map(|(field, _)| ConfigIssue::error(field, "missing Twitter credential"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> FileTwitterConfig {
        FileTwitterConfig {
            api_key: Some("ck".to_string()),
            api_secret_key: Some("cs".to_string()),
            access_token: Some("t".to_string()),
            access_token_secret: Some("ts".to_string()),
        }
    }

    #[test]
    fn test_complete_credentials() {
        let creds = full().credentials().unwrap();
        assert_eq!(creds.consumer_key, "ck");
        assert_eq!(creds.token_secret, "ts");
        assert!(full().validate().is_empty());
    }

    #[test]
    fn test_missing_and_blank_credentials() {
        let mut config = full();
        config.access_token = None;
        config.api_key = Some("  ".to_string());
        assert!(config.credentials().is_none());

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
        assert_eq!(issues[0].field, "twitter.api_key");
        assert_eq!(issues[1].field, "twitter.access_token");
    }
}
