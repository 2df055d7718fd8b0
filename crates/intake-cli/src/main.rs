//! Intake CLI - a terminal-driven customer-records intake wizard.
//!
//! Runs a single interactive read-eval loop on stdin: one record per
//! session, one field per prompt, until the process is terminated
//! externally.

mod app;
mod constants;
mod ui;

use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use intake_core::storage::JsonlStore;
use intake_core::{Config, InputProcessor};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::load(Path::new(constants::CONFIG_FILE));
    tracing::debug!("effective configuration:\n{}", config.summary());

    let store = JsonlStore::new(constants::RECORDS_FILE);
    let processor =
        InputProcessor::new(config, store).context("Failed to load committed records")?;

    app::run(processor)
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    // Logs go to stderr so they never interleave with the form on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
