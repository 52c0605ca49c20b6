//! Markov chain text model built from weighted headline corpora.

mod chain;
mod corpus;
mod model;

pub use chain::{Chain, CompiledChain};
pub use corpus::{Corpus, CorpusError};
pub use model::MarkovTextModel;
