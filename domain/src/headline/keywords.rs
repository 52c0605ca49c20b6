//! Keyword and query-word extraction.
//!
//! Keywords become hashtags; query words feed the image search. Taggers
//! regularly mislabel auxiliaries, modals and pronouns as nouns when they
//! open a headline ("Can", "Your"), so keywords are filtered through
//! [`STOPLIST`]. Query words are not filtered.

use super::token::TaggedToken;

/// Lower-cased surface forms that are never keywords.
pub const STOPLIST: [&str; 30] = [
    "am", "are", "is", "was", "were", "be", "being", "been", "have", "has", "had", "shall",
    "will", "do", "does", "did", "may", "must", "might", "can", "could", "would", "should",
    "who", "what", "why", "your", "you", "their", "or",
];

/// Whether the lower-cased form of `word` is in [`STOPLIST`].
pub fn is_stopword(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOPLIST.contains(&lower.as_str())
}

/// Noun-tagged words that are not stopwords, in sentence order.
pub fn extract_keywords(tokens: &[TaggedToken]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.is_noun() && !is_stopword(&t.word))
        .map(|t| t.word.clone())
        .collect()
}

/// Noun- or adjective-tagged words, in sentence order.
pub fn extract_query_words(tokens: &[TaggedToken]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.is_noun() || t.is_adjective())
        .map(|t| t.word.clone())
        .collect()
}
