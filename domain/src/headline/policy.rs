//! Headline policy: sentence length range and hashtag limits.

use crate::core::error::DomainError;

/// Inclusive range of character bounds handed to the text model.
///
/// Each iteration draws one value from this range and asks the model for a
/// sentence no longer than that many characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidLengthRange { min, max });
        }
        if max == 0 {
            return Err(DomainError::InvalidPolicy(
                "maximum sentence length must be positive".to_string(),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self { min: 40, max: 180 }
    }
}

/// Post-processing policy for headlines.
///
/// Hashtags are emitted one per keyword, in sentence order, up to
/// `max_hashtags`. When `max_message_chars` is set, hashtags are dropped
/// from the tail until the rendered message fits; the headline itself is
/// never shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlinePolicy {
    pub length: LengthRange,
    pub max_hashtags: usize,
    pub max_message_chars: Option<usize>,
}

impl Default for HeadlinePolicy {
    fn default() -> Self {
        Self {
            length: LengthRange::default(),
            max_hashtags: 5,
            max_message_chars: Some(280),
        }
    }
}

impl HeadlinePolicy {
    // ==================== Builder Methods ====================

    pub fn with_length(mut self, length: LengthRange) -> Self {
        self.length = length;
        self
    }

    pub fn with_max_hashtags(mut self, max: usize) -> Self {
        self.max_hashtags = max;
        self
    }

    pub fn with_max_message_chars(mut self, max: Option<usize>) -> Self {
        self.max_message_chars = max;
        self
    }
}
