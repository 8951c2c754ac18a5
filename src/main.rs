//! Contact assistant - Main entry point
//!
//! Runs the interactive assistant bot on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_assistant::clock::{Clock, FixedClock, SystemClock};
use contact_assistant::commands::Assistant;
use contact_assistant::models::AddressBook;
use contact_assistant::session::run_session;
use contact_assistant::Config;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration first: it decides the default log level
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only so the conversation on stdout stays clean)
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

    let clock: Box<dyn Clock> = match config.today {
        Some(today) => {
            info!(%today, "Using fixed date as today");
            Box::new(FixedClock(today))
        }
        None => Box::new(SystemClock),
    };

    info!(
        window_days = config.birthday_window.days,
        leap_day_policy = ?config.birthday_window.leap_day_policy,
        "Starting contact assistant"
    );

    let mut assistant = Assistant::new(AddressBook::new(), clock, config.birthday_window);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    run_session(&mut assistant, &config.prompt, stdin, stdout).await?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
