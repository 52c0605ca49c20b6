//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid length range: min {min} is greater than max {max}")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("Invalid headline policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid image query: {0}")]
    InvalidQuery(String),
}
