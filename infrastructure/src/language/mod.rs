//! Tokenizer and part-of-speech tagger adapters.

mod tagger;
mod tokenizer;

pub use tagger::{LexiconError, LexiconTagger};
pub use tokenizer::TreebankTokenizer;
