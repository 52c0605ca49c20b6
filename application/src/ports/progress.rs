//! Progress notification port
//!
//! Defines the interface for reporting what each bot iteration is doing.

use crate::ports::publisher::PostReceipt;
use fakebuzz_domain::{ImageCandidate, PublishableMessage};

/// Callback for progress updates during a bot iteration
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, log file, etc.). Every method has a
/// no-op default.
pub trait BotProgressNotifier: Send + Sync {
    /// Called when the text model produced a sentence
    fn on_sentence(&self, _sentence: &str) {}

    /// Called when the text model produced nothing for the bound
    fn on_no_sentence(&self, _max_chars: usize) {}

    /// Called once the headline has been post-processed
    fn on_message(&self, _message: &PublishableMessage) {}

    /// Called before the image search request
    fn on_image_search(&self, _query: &str) {}

    /// Called for each candidate about to be downloaded
    fn on_image_candidate(&self, _candidate: &ImageCandidate) {}

    /// Called when a candidate was skipped
    fn on_image_skipped(&self, _rank: usize, _reason: &str) {}

    /// Called when no image could be acquired
    fn on_no_image(&self) {}

    /// Called after a successful publish
    fn on_published(&self, _receipt: &PostReceipt) {}

    /// Called when publishing failed
    fn on_publish_failed(&self, _error: &str) {}

    /// Called at the end of an iteration
    fn on_iteration_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl BotProgressNotifier for NoProgress {}
