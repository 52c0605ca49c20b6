//! Headline post-processor.
//!
//! [`HeadlineProcessor::process`] is a pure function of the sentence, its
//! tagged tokens and the [`HeadlinePolicy`]:
//!
//! 1. Interrogative punctuation: a `?` is appended when the first token is
//!    one of [`INTERROGATIVE_OPENERS`] and the sentence does not already end
//!    with `?`.
//! 2. Keywords and query words are extracted from the tags.
//! 3. One hashtag per keyword, deduplicated, capped at `max_hashtags`.
//! 4. Hashtags are dropped from the tail until the message fits
//!    `max_message_chars`.

use super::hashtag::Hashtag;
use super::keywords::{extract_keywords, extract_query_words};
use super::policy::HeadlinePolicy;
use super::token::TaggedToken;
use crate::core::string::char_len;
use serde::Serialize;

/// First tokens (case-sensitive) that mark a headline as a question.
pub const INTERROGATIVE_OPENERS: [&str; 11] = [
    "Does", "Do", "Can", "Should", "Would", "Could", "How", "Which", "Is", "Are", "Was",
];

/// A headline ready to publish.
///
/// The rendered text is the headline followed by each hashtag, separated by
/// single spaces. The original sentence is only ever appended to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishableMessage {
    /// Sentence plus the interrogative `?` if one was added
    pub headline: String,
    /// Whether a `?` was appended
    pub interrogative: bool,
    /// Noun keywords in sentence order (before any cap)
    pub keywords: Vec<String>,
    /// Noun and adjective words used for image search
    pub query_words: Vec<String>,
    /// Hashtags actually rendered
    pub hashtags: Vec<Hashtag>,
}

impl PublishableMessage {
    /// The full message text.
    pub fn text(&self) -> String {
        render(&self.headline, &self.hashtags)
    }

    /// The image search query (query words joined by a space).
    pub fn query(&self) -> String {
        self.query_words.join(" ")
    }

    pub fn char_len(&self) -> usize {
        char_len(&self.text())
    }
}

fn render(headline: &str, hashtags: &[Hashtag]) -> String {
    let mut text = headline.to_string();
    for tag in hashtags {
        text.push(' ');
        text.push_str(&tag.to_string());
    }
    text
}

/// Applies a [`HeadlinePolicy`] to generated sentences.
#[derive(Debug, Clone, Default)]
pub struct HeadlineProcessor {
    policy: HeadlinePolicy,
}

impl HeadlineProcessor {
    pub fn new(policy: HeadlinePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &HeadlinePolicy {
        &self.policy
    }

    /// Whether the first token opens a question.
    pub fn is_interrogative(tokens: &[TaggedToken]) -> bool {
        tokens
            .first()
            .is_some_and(|t| INTERROGATIVE_OPENERS.contains(&t.word.as_str()))
    }

    pub fn process(&self, sentence: &str, tokens: &[TaggedToken]) -> PublishableMessage {
        let mut headline = sentence.to_string();
        let interrogative = Self::is_interrogative(tokens) && !headline.ends_with('?');
        if interrogative {
            headline.push('?');
        }

        let keywords = extract_keywords(tokens);
        let query_words = extract_query_words(tokens);
        let hashtags = self.build_hashtags(&headline, &keywords);

        PublishableMessage {
            headline,
            interrogative,
            keywords,
            query_words,
            hashtags,
        }
    }

    fn build_hashtags(&self, headline: &str, keywords: &[String]) -> Vec<Hashtag> {
        let mut hashtags: Vec<Hashtag> = Vec::new();
        for keyword in keywords {
            if hashtags.len() >= self.policy.max_hashtags {
                break;
            }
            if let Some(tag) = Hashtag::from_keyword(keyword)
                && !hashtags.contains(&tag)
            {
                hashtags.push(tag);
            }
        }

        if let Some(limit) = self.policy.max_message_chars {
            // Each hashtag costs its own length plus one separating space
            let mut total = char_len(headline)
                + hashtags.iter().map(|t| t.char_len() + 1).sum::<usize>();
            while total > limit {
                match hashtags.pop() {
                    Some(tag) => total -= tag.char_len() + 1,
                    None => break,
                }
            }
        }

        hashtags
    }
}
