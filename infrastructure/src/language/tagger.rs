//! Lexicon and suffix-rule part-of-speech tagger (Penn Treebank tags).

use fakebuzz_application::PosTagger;
use fakebuzz_domain::TaggedToken;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: expected `word<TAB>tag`", path.display())]
    Malformed { path: PathBuf, line: usize },
}

/// Closed-class words and frequent open-class words, keyed in lowercase.
const BUILTIN: &[(&str, &str)] = &[
    // determiners
    ("a", "DT"), ("an", "DT"), ("the", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"),
    ("some", "DT"), ("any", "DT"), ("no", "DT"), ("all", "DT"), ("both", "DT"),
    ("another", "DT"),
    // pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("us", "PRP"),
    ("them", "PRP"), ("yourself", "PRP"), ("my", "PRP$"), ("your", "PRP$"),
    ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"), ("our", "PRP$"),
    ("their", "PRP$"),
    // wh-words
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"),
    ("which", "WDT"), ("how", "WRB"), ("why", "WRB"), ("when", "WRB"),
    ("where", "WRB"),
    // prepositions and subordinators
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"),
    ("for", "IN"), ("with", "IN"), ("about", "IN"), ("against", "IN"),
    ("between", "IN"), ("into", "IN"), ("through", "IN"), ("during", "IN"),
    ("before", "IN"), ("after", "IN"), ("above", "IN"), ("below", "IN"),
    ("from", "IN"), ("over", "IN"), ("under", "IN"), ("than", "IN"),
    ("like", "IN"), ("as", "IN"), ("if", "IN"), ("because", "IN"),
    ("while", "IN"), ("since", "IN"), ("until", "IN"), ("without", "IN"),
    ("within", "IN"), ("near", "IN"), ("upon", "IN"), ("to", "TO"),
    // conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    // modals
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"),
    ("shall", "MD"), ("should", "MD"), ("may", "MD"), ("might", "MD"),
    ("must", "MD"), ("'ll", "MD"), ("'d", "MD"),
    // auxiliaries
    ("is", "VBZ"), ("are", "VBP"), ("am", "VBP"), ("was", "VBD"), ("were", "VBD"),
    ("be", "VB"), ("been", "VBN"), ("being", "VBG"), ("have", "VBP"),
    ("has", "VBZ"), ("had", "VBD"), ("do", "VBP"), ("does", "VBZ"),
    ("did", "VBD"), ("'re", "VBP"), ("'ve", "VBP"), ("'m", "VBP"),
    ("'s", "POS"), ("n't", "RB"),
    // adverbs
    ("not", "RB"), ("never", "RB"), ("always", "RB"), ("just", "RB"),
    ("very", "RB"), ("too", "RB"), ("also", "RB"), ("now", "RB"),
    ("here", "RB"), ("there", "EX"), ("even", "RB"), ("still", "RB"),
    ("already", "RB"), ("ever", "RB"), ("again", "RB"), ("so", "RB"),
    ("up", "RP"), ("out", "RP"), ("off", "RP"), ("down", "RP"),
    // common verbs
    ("make", "VB"), ("get", "VB"), ("know", "VB"), ("see", "VB"),
    ("think", "VB"), ("need", "VB"), ("want", "VB"), ("believe", "VB"),
    ("look", "VB"), ("try", "VB"), ("tell", "VB"), ("find", "VB"),
    ("happens", "VBZ"), ("says", "VBZ"), ("said", "VBD"), ("made", "VBD"),
    ("got", "VBD"), ("went", "VBD"), ("found", "VBD"),
    ("guess", "VB"), ("owns", "VBZ"), ("wants", "VBZ"), ("makes", "VBZ"),
    ("gets", "VBZ"), ("knows", "VBZ"), ("needs", "VBZ"), ("looks", "VBZ"),
    ("shows", "VBZ"), ("reveals", "VBZ"), ("thinks", "VBZ"),
    // common adjectives
    ("new", "JJ"), ("good", "JJ"), ("big", "JJ"), ("little", "JJ"), ("old", "JJ"),
    ("real", "JJ"), ("great", "JJ"), ("first", "JJ"), ("last", "JJ"),
    ("only", "JJ"), ("other", "JJ"), ("same", "JJ"), ("weird", "JJ"),
    ("best", "JJS"), ("worst", "JJS"), ("most", "JJS"), ("better", "JJR"),
    ("worse", "JJR"), ("more", "JJR"), ("amazing", "JJ"), ("shocking", "JJ"),
    ("stunning", "JJ"), ("surprising", "JJ"), ("interesting", "JJ"),
    // number words
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"), ("five", "CD"),
    ("six", "CD"), ("seven", "CD"), ("eight", "CD"), ("nine", "CD"), ("ten", "CD"),
    ("hundred", "CD"), ("thousand", "CD"), ("million", "CD"),
];

/// Suffixes that mark an adjective even on a capitalised word.
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less"];

/// Adjective suffixes common in names (`Portugal`, `Atlantic`, `Budapest`),
/// only applied to lowercase words.
const WEAK_ADJECTIVE_SUFFIXES: &[&str] = &["al", "ic", "est"];

/// Tags tokens by lexicon lookup, then shape and suffix rules.
#[derive(Debug)]
pub struct LexiconTagger {
    lexicon: HashMap<String, String>,
}

impl LexiconTagger {
    /// Tagger with the built-in lexicon only.
    pub fn new() -> Self {
        let lexicon = BUILTIN
            .iter()
            .map(|(word, tag)| (word.to_string(), tag.to_string()))
            .collect();
        Self { lexicon }
    }

    /// Add entries that take precedence over the built-in lexicon.
    pub fn with_entries<I, W, T>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: AsRef<str>,
        T: Into<String>,
    {
        for (word, tag) in entries {
            self.lexicon.insert(word.as_ref().to_lowercase(), tag.into());
        }
        self
    }

    /// Load `word<TAB>tag` lines from `path` over the built-in lexicon.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn with_lexicon_file(self, path: &Path) -> Result<Self, LexiconError> {
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('\t') {
                Some((word, tag)) if !word.trim().is_empty() && !tag.trim().is_empty() => {
                    entries.push((word.trim().to_string(), tag.trim().to_string()));
                }
                _ => {
                    return Err(LexiconError::Malformed {
                        path: path.to_path_buf(),
                        line: i + 1,
                    });
                }
            }
        }

        tracing::debug!("Loaded {} lexicon entries from {}", entries.len(), path.display());
        Ok(self.with_entries(entries))
    }

    fn tag_word(&self, word: &str, position: usize) -> String {
        if let Some(tag) = punctuation_tag(word) {
            return tag.to_string();
        }
        if is_number(word) {
            return "CD".to_string();
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return tag.clone();
        }
        if let Some(tag) = inflection_tag(&lower) {
            return tag.to_string();
        }
        if position > 0 && word.chars().next().is_some_and(char::is_uppercase) {
            return "NNP".to_string();
        }

        suffix_tag(&lower).to_string()
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, word)| TaggedToken::new(word.clone(), self.tag_word(word, i)))
            .collect()
    }
}

fn punctuation_tag(word: &str) -> Option<&'static str> {
    let tag = match word {
        "." | "?" | "!" => ".",
        "," => ",",
        ":" | ";" | "..." | "--" | "-" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "``" => "``",
        "''" | "'" => "''",
        "$" => "$",
        "#" => "#",
        "%" | "&" => "SYM",
        _ => return None,
    };
    Some(tag)
}

fn is_number(word: &str) -> bool {
    let digits = word.trim_start_matches(['+', '-']);
    digits.starts_with(|c: char| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

fn has_suffix(lower: &str, suffixes: &[&str]) -> bool {
    let len = lower.chars().count();
    suffixes.iter().any(|s| len > s.len() + 2 && lower.ends_with(s))
}

/// Verb and adjective endings that hold regardless of capitalisation, so
/// Title Case headlines keep their verbs and adjectives.
fn inflection_tag(lower: &str) -> Option<&'static str> {
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ing") {
        Some("VBG")
    } else if len > 3 && lower.ends_with("ed") {
        Some("VBD")
    } else if has_suffix(lower, ADJECTIVE_SUFFIXES) {
        Some("JJ")
    } else {
        None
    }
}

fn suffix_tag(lower: &str) -> &'static str {
    let len = lower.chars().count();
    if len > 3 && lower.ends_with("ly") {
        "RB"
    } else if has_suffix(lower, WEAK_ADJECTIVE_SUFFIXES) {
        "JJ"
    } else if len > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    }
}
