//! drpprdb - command-line browser for the Dr Pepper flavor database
//!
//! Loads the flavor dataset once (embedded by default), runs a single
//! read-only view command and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use drpprdb_cli::{execute, Cli, Outcome, RunOptions};
use drpprdb_common::config::{resolve_dataset, TomlConfig, DATASET_ENV_VAR};
use drpprdb_common::FlavorStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is read before tracing starts because it carries the log level
    let (config, config_error) = match &cli.config {
        Some(path) => (TomlConfig::load(path)?, None),
        None => TomlConfig::discover(),
    };

    // RUST_LOG overrides the configured level; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!("Ignoring config file, using defaults: {}", e);
    }

    info!(
        "Starting drpprdb v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let source = resolve_dataset(cli.dataset.as_deref(), DATASET_ENV_VAR, &config);
    info!("Dataset source: {:?}", source);

    let store = match FlavorStore::from_source(&source) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(e).context("loading flavor dataset");
        }
    };

    let options = RunOptions::from_config(&config, cli.json);
    let outcome = execute(&cli.command, &store, &options)?;

    println!("{}", outcome.body());
    if let Outcome::NotFound(_) = outcome {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}
