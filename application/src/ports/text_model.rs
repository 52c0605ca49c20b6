//! Text model port
//!
//! Defines the interface for the statistical sentence generator.

/// Source of generated headline sentences.
///
/// Implementations live in the infrastructure layer (e.g. a Markov chain
/// built from a headline corpus).
pub trait TextModel: Send + Sync {
    /// Sample one sentence of at most `max_chars` characters.
    ///
    /// Returns `None` when no sentence satisfying the bound could be produced.
    fn sample(&self, max_chars: usize) -> Option<String>;
}
