//! Raffle network table CLI.
//!
//! # Usage
//!
//! ```bash
//! # List every configured network
//! raffle-networks list
//!
//! # Show one network, as JSON for scripts
//! raffle-networks show --chain 11155111 --json
//!
//! # Print the VRF coordinator and subscription (fails on local networks)
//! raffle-networks oracle --chain 11155111
//!
//! # Is this a development network?
//! raffle-networks is-dev hardhat
//!
//! # Validate a custom table
//! raffle-networks --table ./networks.json check
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use raffle_networks::NetworkRegistry;
use raffle_networks_cli::config::TableSource;
use raffle_networks_cli::report::{NetworkDetails, NetworkList};

/// Inspect and validate raffle deployment network tables.
#[derive(Debug, Parser)]
#[command(name = "raffle-networks", version, about)]
struct Cli {
    /// Network table file (TOML, or JSON with a `.json` extension).
    /// Defaults to `networks.toml` in the working directory, then to the
    /// built-in table.
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// List all configured networks.
    List,

    /// Show the deployment parameters of one network.
    Show {
        /// EIP-155 chain ID.
        #[arg(long)]
        chain: u64,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the VRF coordinator and subscription ID of a live network.
    Oracle {
        /// EIP-155 chain ID.
        #[arg(long)]
        chain: u64,
    },

    /// Print whether a network name is a development network.
    IsDev {
        /// Network name (e.g. `hardhat`).
        name: String,
    },

    /// Validate the network table and report what it contains.
    Check,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = TableSource::resolve(cli.table)?;
    let registry = source.registry()?;
    tracing::debug!(
        source = %source,
        networks = registry.len(),
        "network table loaded"
    );

    match cli.command {
        Command::List => cmd_list(&registry),
        Command::Show { chain, json } => cmd_show(&registry, chain, json)?,
        Command::Oracle { chain } => cmd_oracle(&registry, chain)?,
        Command::IsDev { name } => cmd_is_dev(&registry, &name),
        Command::Check => cmd_check(&registry, &source),
    }

    Ok(())
}

/// Execute the `list` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_list(registry: &NetworkRegistry) {
    print!("{}", NetworkList(registry));
}

/// Execute the `show` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_show(registry: &NetworkRegistry, chain_id: u64, json: bool) -> Result<()> {
    let params = registry.parameters(chain_id)?;
    if json {
        let text = serde_json::to_string_pretty(params)
            .with_context(|| format!("serializing chain {chain_id}"))?;
        println!("{text}");
    } else {
        print!("{}", NetworkDetails { chain_id, params });
    }
    Ok(())
}

/// Execute the `oracle` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_oracle(registry: &NetworkRegistry, chain_id: u64) -> Result<()> {
    let oracle = registry.require_oracle_config(chain_id)?;
    println!("{} {}", oracle.coordinator, oracle.subscription_id);
    Ok(())
}

/// Execute the `is-dev` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_is_dev(registry: &NetworkRegistry, name: &str) {
    println!("{}", registry.is_development_network(name));
}

/// Execute the `check` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_check(registry: &NetworkRegistry, source: &TableSource) {
    let development = registry.development_networks().count();
    let live = registry.networks().filter(|(_, p)| !p.is_local()).count();
    tracing::info!(
        source = %source,
        networks = registry.len(),
        live,
        development,
        "network table is valid"
    );
    println!(
        "{source}: {} network(s), {live} with a live VRF coordinator, {development} development chain name(s)",
        registry.len()
    );
}
