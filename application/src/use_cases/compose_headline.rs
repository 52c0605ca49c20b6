//! Compose Headline use case.
//!
//! Tokenizes and tags a generated sentence, then hands the tagged tokens to
//! the domain [`HeadlineProcessor`].

use crate::ports::language::{PosTagger, Tokenizer};
use fakebuzz_domain::{HeadlinePolicy, HeadlineProcessor, PublishableMessage};
use std::sync::Arc;
use tracing::debug;

/// Use case for turning a sentence into a publishable message.
#[derive(Clone)]
pub struct ComposeHeadlineUseCase {
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Arc<dyn PosTagger>,
    processor: HeadlineProcessor,
}

impl ComposeHeadlineUseCase {
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        tagger: Arc<dyn PosTagger>,
        policy: HeadlinePolicy,
    ) -> Self {
        Self {
            tokenizer,
            tagger,
            processor: HeadlineProcessor::new(policy),
        }
    }

    pub fn execute(&self, sentence: &str) -> PublishableMessage {
        let tokens = self.tokenizer.tokenize(sentence);
        let tagged = self.tagger.tag(&tokens);
        debug!(
            "Tagged headline: {}",
            tagged
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let message = self.processor.process(sentence, &tagged);
        debug!(
            "Identified key words: {:?}, query words: {:?}",
            message.keywords, message.query_words
        );
        message
    }
}
