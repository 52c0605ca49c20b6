//! CLI entrypoint for fakebuzz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use fakebuzz_application::{
    AcquireImageUseCase, BotParams, BotProgressNotifier, ComposeHeadlineUseCase, ImageFetcher,
    ImageSearch, IterationOutcome, NoProgress, PosTagger, PublishHeadlineUseCase, Publisher,
    RunBotUseCase, TextModel, Tokenizer,
};
use fakebuzz_infrastructure::config::FileLoggingConfig;
use fakebuzz_infrastructure::{
    ConfigError, ConfigLoader, DryRunPublisher, FileConfig, GoogleImageSearch, HttpImageFetcher,
    LexiconTagger, MarkovTextModel, NoImageSearch, TreebankTokenizer, TwitterPublisher,
    build_client,
};
use fakebuzz_presentation::{Cli, ConsoleReporter};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // usage errors exit 1; --help and --version exit 0
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let mut config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(corpus) = &cli.corpus {
        config.corpus.override_with(corpus);
    }

    let _log_guard = init_logging(&cli, &config.logging)?;
    info!("Starting fakebuzz {}", env!("CARGO_PKG_VERSION"));

    check_config(&config, !cli.dry_run)?;

    let bot = build_bot(&config, cli.dry_run)?;
    let progress: Box<dyn BotProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ConsoleReporter::new())
    };

    if cli.once {
        if let IterationOutcome::PublishFailed(reason) = bot.run_once(progress.as_ref()).await {
            bail!("Publishing failed: {}", reason);
        }
        return Ok(());
    }

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        if watch_interrupts(tokio::signal::ctrl_c, canceller).await {
            warn!("Interrupted twice, exiting without finishing the iteration");
            std::process::exit(130);
        }
    });

    bot.run(token, progress.as_ref()).await;
    Ok(())
}

/// The first interrupt cancels `token` so the loop stops after the current
/// iteration. Returns `true` once a second interrupt arrives, `false` if the
/// signal handler could not be installed.
async fn watch_interrupts<F, Fut>(mut interrupted: F, token: CancellationToken) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = interrupted().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        return false;
    }
    info!("Interrupted, stopping after the current iteration (Ctrl-C again to exit now)");
    token.cancel();

    interrupted().await.is_ok()
}

/// Console logs go to stderr; the optional daily log file gets the
/// configured level.
fn init_logging(cli: &Cli, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let console_filter = match cli.log_level() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (file, guard) = match &logging.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "fakebuzz.log"));
            let file_filter = EnvFilter::new(cli.log_level().unwrap_or(logging.level.as_str()));
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();
    Ok(guard)
}

fn check_config(config: &FileConfig, require_credentials: bool) -> Result<()> {
    let (errors, warnings): (Vec<_>, Vec<_>) = config
        .validate(require_credentials)
        .into_iter()
        .partition(|issue| issue.is_error());

    for issue in &warnings {
        warn!("Config: {}", issue);
    }
    if !errors.is_empty() {
        return Err(ConfigError::Invalid(errors).into());
    }
    Ok(())
}

fn build_bot(config: &FileConfig, dry_run: bool) -> Result<RunBotUseCase> {
    let policy = config.headline.to_policy()?;

    // === Dependency Injection ===
    let sources: Vec<_> = config
        .corpus
        .sources
        .iter()
        .map(|s| (s.path.clone(), s.weight))
        .collect();
    let text_model: Arc<dyn TextModel> = Arc::new(
        MarkovTextModel::from_sources(&sources, config.corpus.state_size, config.corpus.rng_seed)
            .context("Failed to build the text model")?,
    );

    let tokenizer: Arc<dyn Tokenizer> = Arc::new(TreebankTokenizer::new());
    let tagger: Arc<dyn PosTagger> = match &config.language.lexicon_path {
        Some(path) => Arc::new(LexiconTagger::new().with_lexicon_file(path)?),
        None => Arc::new(LexiconTagger::new()),
    };

    let client = build_client(config.http.timeout(), &config.http.user_agent)
        .context("Failed to create HTTP client")?;

    let search: Arc<dyn ImageSearch> = match config.google.credentials() {
        Some((api_key, cse_id)) => Arc::new(
            GoogleImageSearch::new(client.clone(), api_key, cse_id)
                .with_endpoint(&config.google.endpoint),
        ),
        None => {
            warn!("No Google credentials, posting without images");
            Arc::new(NoImageSearch)
        }
    };
    let fetcher: Arc<dyn ImageFetcher> =
        Arc::new(HttpImageFetcher::new(client.clone()).with_max_bytes(config.http.max_image_bytes));

    let publisher: Arc<dyn Publisher> = if dry_run {
        Arc::new(DryRunPublisher::new())
    } else {
        let credentials = config
            .twitter
            .credentials()
            .context("Twitter credentials are incomplete")?;
        Arc::new(TwitterPublisher::new(client, credentials))
    };

    let mut image_params = config.google.to_image_params();
    if let Some(dir) = &config.image.temp_dir {
        image_params = image_params.with_temp_dir(dir.clone());
    }

    Ok(RunBotUseCase::new(
        text_model,
        ComposeHeadlineUseCase::new(tokenizer, tagger, policy),
        AcquireImageUseCase::new(search, fetcher, image_params),
        PublishHeadlineUseCase::new(publisher),
        BotParams::default()
            .with_interval(config.schedule.interval())
            .with_policy(policy),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn test_first_interrupt_cancels_second_forces_exit() {
        let notify = Arc::new(Notify::new());
        let token = CancellationToken::new();
        let signals = {
            let notify = notify.clone();
            move || {
                let notify = notify.clone();
                async move {
                    notify.notified().await;
                    Ok(())
                }
            }
        };
        let watcher = tokio::spawn(watch_interrupts(signals, token.clone()));

        notify.notify_one();
        tokio::time::timeout(Duration::from_secs(1), token.cancelled())
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!watcher.is_finished());

        notify.notify_one();
        let forced = tokio::time::timeout(Duration::from_secs(1), watcher)
            .await
            .unwrap()
            .unwrap();
        assert!(forced);
    }

    #[tokio::test]
    async fn test_handler_failure_leaves_token_alone() {
        let token = CancellationToken::new();
        let forced = watch_interrupts(
            || async { Err(std::io::Error::other("no signal support")) },
            token.clone(),
        )
        .await;
        assert!(!forced);
        assert!(!token.is_cancelled());
    }
}
