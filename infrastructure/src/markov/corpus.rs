//! Corpus loading: newline-delimited sentences, filtered for training.

use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building the text model.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read corpus {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus {} has no usable sentences", .0.display())]
    Empty(PathBuf),

    #[error("no corpus sources given")]
    NoSources,

    #[error("state size must be at least 1")]
    InvalidStateSize,

    #[error("corpus weight must be positive, got {0}")]
    InvalidWeight(f64),
}

/// Training sentences from one corpus, each split into words.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    sentences: Vec<Vec<String>>,
}

impl Corpus {
    /// Parse newline-delimited text.
    ///
    /// Blank lines are ignored, and lines containing brackets, double quotes
    /// or a single quote at a word boundary are dropped.
    pub fn from_text(text: &str) -> Self {
        // Single quotes at the start or end of a line, or next to whitespace
        let rejected = Regex::new(r#"(^')|('$)|\s'|'\s|["()\[\]]"#)
            .expect("corpus filter pattern is valid");

        let text = text.replace("\n\n", "\n");
        let sentences = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !rejected.is_match(line))
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .collect();

        Self { sentences }
    }

    /// Read and parse a corpus file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_text(&text);
        if corpus.is_empty() {
            return Err(CorpusError::Empty(path.to_path_buf()));
        }
        Ok(corpus)
    }

    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// All sentences joined by single spaces, used for the overlap check.
    pub fn rejoined(&self) -> String {
        self.sentences
            .iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_one_sentence_per_line() {
        let corpus = Corpus::from_text("You Won't Believe This\n\nTen Cats  Who Hate Mondays\n   \n");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.sentences()[1], vec!["Ten", "Cats", "Who", "Hate", "Mondays"]);
    }

    #[test]
    fn test_rejects_brackets_and_quotes() {
        let corpus = Corpus::from_text(
            "Obama (Finally) Speaks\n\
             The \"Best\" Pizza\n\
             Lists [Ranked]\n\
             'Quoted' Headline\n\
             He Said 'Never'\n\
             Why Cats Don't Care\n",
        );
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.sentences()[0][2], "Don't");
    }

    #[test]
    fn test_rejoined_text() {
        let corpus = Corpus::from_text("a b\nc d\n");
        assert_eq!(corpus.rejoined(), "a b c d");
    }

    #[test]
    fn test_load_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Corpus::load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(missing, CorpusError::Read { .. }));

        let path = dir.path().join("empty.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"(only rejected)\n\n").unwrap();
        assert!(matches!(Corpus::load(&path).unwrap_err(), CorpusError::Empty(_)));
    }
}
