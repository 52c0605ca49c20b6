//! Language analysis ports: word tokenizer and part-of-speech tagger.

use fakebuzz_domain::TaggedToken;

/// Splits raw text into word tokens, preserving order.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Assigns a Penn Treebank tag to each token, preserving order.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}
