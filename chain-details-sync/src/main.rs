//! Chain details aggregator CLI.
//!
//! Fetches the contracts registry, downloads metadata for every chain with a
//! supported deployment, keeps only live RPC endpoints, resolves an icon,
//! and merges the result into `chainDetails.json`.
//!
//! # Usage
//!
//! ```bash
//! # Full sync with built-in defaults (same as `chain-details-sync sync`)
//! chain-details-sync
//!
//! # Use a custom config file
//! chain-details-sync --config ./chain-details.toml sync
//!
//! # Only list the chain IDs the registry qualifies
//! chain-details-sync qualifying
//! ```

use std::path::PathBuf;

use anyhow::Result;
use chain_details_sync::config::Config;
use chain_details_sync::pipeline;
use clap::{Parser, Subcommand};

/// Chain metadata aggregator.
#[derive(Debug, Parser)]
#[command(name = "chain-details-sync", version, about)]
struct Cli {
    /// Path to the TOML config file. Built-in defaults apply if it is missing.
    #[arg(long, default_value = "chain-details.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch chain details and merge them into the output file (default).
    Sync,

    /// Print the chain IDs selected from the contracts registry.
    Qualifying,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Sync) {
        Command::Sync => cmd_sync(&config).await,
        Command::Qualifying => cmd_qualifying(&config).await,
    }
}

/// Execute the `sync` subcommand.
async fn cmd_sync(config: &Config) -> Result<()> {
    tracing::info!(
        output = %config.output.chain_details_path.display(),
        contracts = %config.output.contracts_path.display(),
        "starting sync"
    );

    let client = pipeline::http_client()?;
    pipeline::run(&client, config).await?;
    Ok(())
}

/// Execute the `qualifying` subcommand.
#[allow(clippy::print_stdout, reason = "prints the list for the operator")]
async fn cmd_qualifying(config: &Config) -> Result<()> {
    let client = pipeline::http_client()?;
    let (_, chain_ids) = pipeline::qualifying(&client, config).await?;
    for chain_id in chain_ids {
        println!("{chain_id}");
    }
    Ok(())
}
