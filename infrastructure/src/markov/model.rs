//! Markov text model adapter.

use super::chain::{Chain, CompiledChain};
use super::corpus::{Corpus, CorpusError};
use fakebuzz_application::TextModel;
use fakebuzz_domain::core::string::char_len;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// Walks attempted per sentence, and sentences attempted per short sentence.
const DEFAULT_TRIES: usize = 10;
const MAX_OVERLAP_RATIO: f64 = 0.7;
const MAX_OVERLAP_TOTAL: usize = 15;

/// Headline generator backed by a weighted word-level Markov chain.
pub struct MarkovTextModel {
    chain: CompiledChain,
    rejoined_text: String,
    rng: Mutex<StdRng>,
}

impl MarkovTextModel {
    /// Build from weighted corpus files.
    pub fn from_sources(
        sources: &[(PathBuf, f64)],
        state_size: usize,
        seed: Option<u64>,
    ) -> Result<Self, CorpusError> {
        let corpora = sources
            .iter()
            .map(|(path, weight)| {
                let corpus = Corpus::load(path)?;
                info!(
                    "Loaded {} sentences from {} (weight {})",
                    corpus.len(),
                    path.display(),
                    weight
                );
                Ok((corpus, *weight))
            })
            .collect::<Result<Vec<_>, CorpusError>>()?;

        Self::from_corpora(corpora, state_size, seed)
    }

    /// Combine in-memory corpora into one chain.
    pub fn from_corpora(
        corpora: Vec<(Corpus, f64)>,
        state_size: usize,
        seed: Option<u64>,
    ) -> Result<Self, CorpusError> {
        let mut combined: Option<Chain> = None;
        let mut rejoined = Vec::with_capacity(corpora.len());

        for (corpus, weight) in &corpora {
            let chain = Chain::build(corpus, state_size, *weight)?;
            match combined.as_mut() {
                Some(acc) => acc.merge(chain),
                None => combined = Some(chain),
            }
            rejoined.push(corpus.rejoined());
        }

        let chain = combined.ok_or(CorpusError::NoSources)?;
        debug!(
            "Markov chain built: state size {}, {} states",
            chain.state_size(),
            chain.state_count()
        );

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            chain: chain.compile(),
            rejoined_text: rejoined.join(" "),
            rng: Mutex::new(rng),
        })
    }

    /// Generate a sentence that does not copy the training text.
    pub fn make_sentence(&self) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        for _ in 0..DEFAULT_TRIES {
            let words = self.chain.walk(&mut *rng);
            if !words.is_empty() && self.is_original(&words) {
                return Some(words.join(" "));
            }
        }
        None
    }

    /// Generate a sentence of at most `max_chars` characters.
    pub fn make_short_sentence(&self, max_chars: usize) -> Option<String> {
        (0..DEFAULT_TRIES)
            .filter_map(|_| self.make_sentence())
            .find(|sentence| char_len(sentence) <= max_chars)
    }

    /// Reject sentences sharing a long run of words with the training text.
    fn is_original(&self, words: &[String]) -> bool {
        let ratio = (MAX_OVERLAP_RATIO * words.len() as f64).round() as usize;
        let overlap_max = ratio.min(MAX_OVERLAP_TOTAL);
        let overlap_over = overlap_max + 1;
        let gram_count = words.len().saturating_sub(overlap_max).max(1);

        (0..gram_count).all(|i| {
            let end = (i + overlap_over).min(words.len());
            let gram = words[i..end].join(" ");
            !self.rejoined_text.contains(&gram)
        })
    }
}

impl TextModel for MarkovTextModel {
    fn sample(&self, max_chars: usize) -> Option<String> {
        self.make_short_sentence(max_chars)
    }
}
