//! Presentation layer for fakebuzz
//!
//! This crate contains the CLI definition and the console progress
//! reporter.

pub mod cli;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use progress::reporter::ConsoleReporter;
