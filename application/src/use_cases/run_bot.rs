//! Run Bot use case.
//!
//! Drives the generate → compose → acquire image → publish pipeline on a
//! fixed interval until cancelled.
//!
//! Every failure below startup is contained in the iteration that produced
//! it: the loop logs the [`IterationOutcome`] and carries on. Cancellation is
//! checked before each iteration and races the sleep between iterations; an
//! iteration in flight always runs to completion so its image artifact is
//! released.

use crate::config::BotParams;
use crate::ports::progress::BotProgressNotifier;
use crate::ports::publisher::PostReceipt;
use crate::ports::text_model::TextModel;
use crate::use_cases::acquire_image::AcquireImageUseCase;
use crate::use_cases::compose_headline::ComposeHeadlineUseCase;
use crate::use_cases::publish_headline::PublishHeadlineUseCase;
use fakebuzz_domain::core::string::truncate;
use rand::Rng;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// What a single iteration ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// The message was posted.
    Published(PostReceipt),
    /// The text model produced no sentence within `max_chars`.
    NoSentence { max_chars: usize },
    /// The publisher rejected the post.
    PublishFailed(String),
}

impl IterationOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, IterationOutcome::Published(_))
    }
}

/// Use case for running the bot loop.
pub struct RunBotUseCase {
    text_model: Arc<dyn TextModel>,
    compose: ComposeHeadlineUseCase,
    acquire_image: AcquireImageUseCase,
    publish: PublishHeadlineUseCase,
    params: BotParams,
}

impl RunBotUseCase {
    pub fn new(
        text_model: Arc<dyn TextModel>,
        compose: ComposeHeadlineUseCase,
        acquire_image: AcquireImageUseCase,
        publish: PublishHeadlineUseCase,
        params: BotParams,
    ) -> Self {
        Self {
            text_model,
            compose,
            acquire_image,
            publish,
            params,
        }
    }

    pub fn params(&self) -> &BotParams {
        &self.params
    }

    /// Run one full iteration of the pipeline.
    pub async fn run_iteration(&self, progress: &dyn BotProgressNotifier) -> IterationOutcome {
        let length = self.params.policy.length;
        let max_chars = rand::thread_rng().gen_range(length.min()..=length.max());

        let Some(sentence) = self.text_model.sample(max_chars) else {
            warn!(
                "Text model failed to generate a headline within {} chars",
                max_chars
            );
            progress.on_no_sentence(max_chars);
            progress.on_iteration_complete();
            return IterationOutcome::NoSentence { max_chars };
        };

        info!("Headline: {}", sentence);
        progress.on_sentence(&sentence);

        let message = self.compose.execute(&sentence);
        let text = message.text();
        info!("Tweet: {}", text);
        progress.on_message(&message);

        let image = self.acquire_image.execute(&message.query(), progress).await;

        let outcome = match self.publish.execute(&text, image, progress).await {
            Ok(receipt) => IterationOutcome::Published(receipt),
            Err(e) => IterationOutcome::PublishFailed(e.to_string()),
        };

        progress.on_iteration_complete();
        outcome
    }

    /// Run exactly one iteration and log how it ended.
    pub async fn run_once(&self, progress: &dyn BotProgressNotifier) -> IterationOutcome {
        let outcome = self.run_iteration(progress).await;
        log_outcome(1, &outcome);
        outcome
    }

    /// Run iterations until `token` is cancelled.
    ///
    /// Returns the number of iterations that ran.
    pub async fn run(&self, token: CancellationToken, progress: &dyn BotProgressNotifier) -> usize {
        let mut iterations = 0;
        info!(
            "Bot loop started, posting every {}s",
            self.params.interval.as_secs()
        );

        loop {
            if token.is_cancelled() {
                break;
            }

            let outcome = self.run_iteration(progress).await;
            iterations += 1;
            log_outcome(iterations, &outcome);

            tokio::select! {
                _ = token.cancelled() => break,
                _ = tokio::time::sleep(self.params.interval) => {}
            }
        }

        info!("Bot loop stopped after {} iterations", iterations);
        iterations
    }
}

fn log_outcome(iteration: usize, outcome: &IterationOutcome) {
    match outcome {
        IterationOutcome::Published(receipt) => {
            debug!("Iteration {} published {}", iteration, receipt.id)
        }
        IterationOutcome::NoSentence { .. } => {
            debug!("Iteration {} produced no headline", iteration)
        }
        IterationOutcome::PublishFailed(reason) => {
            warn!("Iteration {} failed: {}", iteration, truncate(reason, 200))
        }
    }
}
