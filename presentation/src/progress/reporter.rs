//! Console progress reporting for bot iterations

use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};
use fakebuzz_application::{BotProgressNotifier, PostReceipt};
use fakebuzz_domain::{ImageCandidate, PublishableMessage};

/// Prints one timestamped line per pipeline step
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    fn print(&self, label: ColoredString, text: &str) {
        println!("{}", format_line(Local::now(), label, text));
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_line(at: DateTime<Local>, label: ColoredString, text: &str) -> String {
    format!(
        "{} {} {}",
        format!("[{}]", at.format("%Y-%m-%d %H:%M:%S")).dimmed(),
        label,
        text
    )
}

impl BotProgressNotifier for ConsoleReporter {
    fn on_sentence(&self, sentence: &str) {
        self.print("headline".cyan().bold(), sentence);
    }

    fn on_no_sentence(&self, max_chars: usize) {
        self.print(
            "headline".yellow().bold(),
            &format!("none within {} chars, skipping", max_chars),
        );
    }

    fn on_message(&self, message: &PublishableMessage) {
        self.print("message".cyan().bold(), &message.text());
    }

    fn on_image_search(&self, query: &str) {
        self.print("image".blue().bold(), &format!("searching for {:?}", query));
    }

    fn on_image_candidate(&self, candidate: &ImageCandidate) {
        self.print(
            "image".blue().bold(),
            &format!("#{} {}", candidate.rank + 1, candidate.url),
        );
    }

    fn on_image_skipped(&self, rank: usize, reason: &str) {
        self.print(
            "image".yellow().bold(),
            &format!("#{} skipped: {}", rank + 1, reason),
        );
    }

    fn on_no_image(&self) {
        self.print("image".yellow().bold(), "none found, posting text only");
    }

    fn on_published(&self, receipt: &PostReceipt) {
        let kind = if receipt.with_image { "with image" } else { "text only" };
        self.print(
            "posted".green().bold(),
            &format!("{} ({})", receipt.id, kind),
        );
    }

    fn on_publish_failed(&self, error: &str) {
        self.print("failed".red().bold(), error);
    }
}
