//! Command-line access to raffle network tables.
//!
//! Loads a network table (built-in, `networks.toml`, or an explicit file),
//! validates it once into a [`raffle_networks::NetworkRegistry`], and
//! renders lookups for operators and deploy scripts.

pub mod config;
pub mod report;

// Used by the `raffle-networks` binary only.
use clap as _;
use serde_json as _;
use tracing_subscriber as _;
