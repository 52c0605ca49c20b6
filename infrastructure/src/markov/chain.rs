//! Word-level Markov chain with weighted corpus combination.

use super::corpus::{Corpus, CorpusError};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use std::collections::{BTreeMap, HashMap};

const BEGIN: &str = "___BEGIN__";
const END: &str = "___END__";

type State = Vec<String>;

/// Transition weights: `state -> (next word -> weight)`.
///
/// Followers are kept in a `BTreeMap` so a seeded walk is reproducible.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    state_size: usize,
    transitions: HashMap<State, BTreeMap<String, f64>>,
}

impl Chain {
    /// Count transitions over every sentence of `corpus`, scaled by `weight`.
    pub fn build(corpus: &Corpus, state_size: usize, weight: f64) -> Result<Self, CorpusError> {
        if state_size == 0 {
            return Err(CorpusError::InvalidStateSize);
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(CorpusError::InvalidWeight(weight));
        }

        let mut chain = Self {
            state_size,
            transitions: HashMap::new(),
        };

        for words in corpus.sentences() {
            let items: Vec<&str> = std::iter::repeat_n(BEGIN, state_size)
                .chain(words.iter().map(String::as_str))
                .chain(std::iter::once(END))
                .collect();

            for window in items.windows(state_size + 1) {
                let (state, follow) = window.split_at(state_size);
                let state: State = state.iter().map(|s| s.to_string()).collect();
                *chain
                    .transitions
                    .entry(state)
                    .or_default()
                    .entry(follow[0].to_string())
                    .or_insert(0.0) += weight;
            }
        }

        Ok(chain)
    }

    /// Add every transition of `other` into `self`.
    pub fn merge(&mut self, other: Chain) {
        for (state, follows) in other.transitions {
            let entry = self.transitions.entry(state).or_default();
            for (word, weight) in follows {
                *entry.entry(word).or_insert(0.0) += weight;
            }
        }
    }

    pub fn state_size(&self) -> usize {
        self.state_size
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// Precompute a sampling distribution per state.
    pub fn compile(self) -> CompiledChain {
        let transitions = self
            .transitions
            .into_iter()
            .filter_map(|(state, follows)| {
                let (words, weights): (Vec<String>, Vec<f64>) = follows.into_iter().unzip();
                let dist = WeightedIndex::new(weights).ok()?;
                Some((state, (words, dist)))
            })
            .collect();

        CompiledChain {
            state_size: self.state_size,
            transitions,
        }
    }
}

/// A chain ready for sampling.
#[derive(Debug, Clone)]
pub struct CompiledChain {
    state_size: usize,
    transitions: HashMap<State, (Vec<String>, WeightedIndex<f64>)>,
}

impl CompiledChain {
    /// Walk from the start state until the end marker, returning the words.
    pub fn walk<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut state: State = vec![BEGIN.to_string(); self.state_size];
        let mut words = Vec::new();

        while let Some((choices, dist)) = self.transitions.get(&state) {
            let next = &choices[dist.sample(rng)];
            if next == END {
                break;
            }
            words.push(next.clone());
            state.remove(0);
            state.push(next.clone());
        }

        words
    }
}
