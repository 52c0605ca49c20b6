//! Google Custom Search image search adapter.

mod search;
mod types;

pub use search::{DEFAULT_ENDPOINT, GoogleImageSearch};
