//! Tagged tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse part-of-speech family derived from a Penn Treebank tag.
///
/// Only the first letter of the tag matters here: `NN`, `NNS`, `NNP` and
/// `NNPS` are all [`TagFamily::Noun`]; `JJ`, `JJR` and `JJS` are all
/// [`TagFamily::Adjective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFamily {
    Noun,
    Adjective,
    Other,
}

/// A word paired with its part-of-speech tag, in sentence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    pub fn family(&self) -> TagFamily {
        if self.tag.starts_with('N') {
            TagFamily::Noun
        } else if self.tag.starts_with('J') {
            TagFamily::Adjective
        } else {
            TagFamily::Other
        }
    }

    pub fn is_noun(&self) -> bool {
        self.family() == TagFamily::Noun
    }

    pub fn is_adjective(&self) -> bool {
        self.family() == TagFamily::Adjective
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_family_covers_all_noun_tags() {
        for tag in ["NN", "NNS", "NNP", "NNPS"] {
            assert!(TaggedToken::new("x", tag).is_noun(), "{tag}");
        }
    }

    #[test]
    fn test_adjective_family() {
        for tag in ["JJ", "JJR", "JJS"] {
            assert!(TaggedToken::new("x", tag).is_adjective(), "{tag}");
        }
        assert_eq!(TaggedToken::new("run", "VB").family(), TagFamily::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(TaggedToken::new("cats", "NNS").to_string(), "cats/NNS");
    }
}
