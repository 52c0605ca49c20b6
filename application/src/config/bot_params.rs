//! Bot parameters: loop control and headline policy.
//!
//! [`BotParams`] groups the static parameters read by
//! [`RunBotUseCase`](crate::use_cases::run_bot::RunBotUseCase).

use fakebuzz_domain::HeadlinePolicy;
use std::time::Duration;

/// Loop control and post-processing parameters.
#[derive(Debug, Clone)]
pub struct BotParams {
    /// Pause between two iterations.
    pub interval: Duration,
    /// Sentence length range and hashtag limits.
    pub policy: HeadlinePolicy,
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(300),
            policy: HeadlinePolicy::default(),
        }
    }
}

impl BotParams {
    // ==================== Builder Methods ====================

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_policy(mut self, policy: HeadlinePolicy) -> Self {
        self.policy = policy;
        self
    }
}
