//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: character-aware string helpers

pub mod error;
pub mod string;
