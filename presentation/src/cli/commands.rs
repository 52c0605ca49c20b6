//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for fakebuzz
#[derive(Parser, Debug)]
#[command(name = "fakebuzz")]
#[command(author, version, about = "Clickbait headline bot - Markov headlines with matching images")]
#[command(long_about = r#"
fakebuzz samples a clickbait headline from a Markov model, tags it with
hashtags, finds a matching image and posts both to Twitter. It repeats on
a fixed interval until interrupted with Ctrl-C.

Each iteration:
1. Generate: sample a headline within a random length bound
2. Compose: add `?` to questions and hashtags for its nouns
3. Image: search for the headline's nouns and adjectives, download the first hit
4. Publish: post the text (with the image, if found), then delete the image

Settings come from the TOML file given as CONFIG, overridden by FAKEBUZZ_*
environment variables (e.g. FAKEBUZZ_TWITTER__API_KEY).

Example:
  fakebuzz fakebuzz.toml
  fakebuzz fakebuzz.toml my_headlines.txt --once --dry-run -v
"#)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Corpus file replacing the configured sources
    #[arg(value_name = "CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Run a single iteration and exit
    #[arg(long)]
    pub once: bool,

    /// Log messages instead of posting them (no Twitter credentials needed)
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress console progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Log filter directive for the `-v` count, or `None` to use the default.
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_only() {
        let cli = Cli::try_parse_from(["fakebuzz", "bot.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("bot.toml"));
        assert!(cli.corpus.is_none());
        assert!(!cli.once);
        assert!(!cli.dry_run);
        assert_eq!(cli.log_level(), None);
    }

    #[test]
    fn test_corpus_and_flags() {
        let cli = Cli::try_parse_from([
            "fakebuzz",
            "bot.toml",
            "headlines.txt",
            "--once",
            "--dry-run",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.corpus, Some(PathBuf::from("headlines.txt")));
        assert!(cli.once);
        assert!(cli.dry_run);
        assert_eq!(cli.log_level(), Some("debug"));
    }

    #[test]
    fn test_config_is_required() {
        assert!(Cli::try_parse_from(["fakebuzz"]).is_err());
        assert!(Cli::try_parse_from(["fakebuzz", "a.toml", "b.txt", "extra"]).is_err());
    }
}
