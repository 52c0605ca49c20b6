//! Hashtags built from keywords.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `#`-prefixed tag whose body holds only letters, digits and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hashtag(String);

impl Hashtag {
    /// Build a hashtag from a keyword, keeping only the characters a
    /// hashtag can hold: alphanumerics and `_`. Curly quotes, dashes and
    /// other non-ASCII punctuation are stripped along with ASCII ones.
    ///
    /// Returns `None` when nothing is left after stripping, e.g. for `"--"`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let body: String = keyword
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if body.is_empty() {
            None
        } else {
            Some(Self(body))
        }
    }

    /// Tag text without the leading `#`.
    pub fn body(&self) -> &str {
        &self.0
    }

    /// Rendered length in characters, including the `#`.
    pub fn char_len(&self) -> usize {
        self.0.chars().count() + 1
    }
}

impl fmt::Display for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
