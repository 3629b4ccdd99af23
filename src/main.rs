//! Contact Book - Main entry point
//!
//! Interactive assistant that keeps an address book of phones and birthdays
//! in a JSON file. The dialogue runs on stdin/stdout; logs go to stderr.

use anyhow::{Context, Result};
use contact_book::repl::{self, SessionEnd};
use contact_book::repositories::JsonFileRepository;
use contact_book::Config;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);

    // Initialize logging (stderr only, stdout carries the dialogue)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = runtime.block_on(run_session(config));

    // Tokio reads stdin on a blocking thread that cannot be cancelled. After an
    // interrupt that read may never return, so the runtime must not wait for it.
    runtime.shutdown_background();

    let end = result?;
    match end {
        SessionEnd::ExitCommand => info!("Session closed by user"),
        SessionEnd::EndOfInput => info!("Session ended at end of input"),
        SessionEnd::Interrupted => info!("Session interrupted"),
    }

    Ok(())
}

async fn run_session(config: Config) -> Result<SessionEnd> {
    info!(
        "Starting contact book with data file: {}",
        config.data_file.display()
    );

    let repository = JsonFileRepository::new(&config.data_file);

    repl::run(
        &repository,
        config.birthday_window_days,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        tokio::signal::ctrl_c(),
    )
    .await
}
