#![allow(clippy::print_stdout)]
//! Print what a raffle deployment would use on a given chain.
//!
//! Usage:
//!   cargo run --example `deploy_plan` -- 11155111
//!
//! Set `RUST_LOG=debug` to see registry construction events.

use raffle_networks::{NetworkRegistry, RegistryError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let chain_id: u64 = std::env::args()
        .nth(1)
        .map_or(Ok(31_337), |arg| arg.parse())?;

    let registry = NetworkRegistry::builtin()?;
    let params = registry.parameters(chain_id)?;

    println!("network:            {} ({chain_id})", params.name());
    println!("entrance fee:       {} ETH", params.entrance_fee_ether());
    println!("gas lane:           {}", params.gas_lane());
    println!("callback gas limit: {}", params.callback_gas_limit());
    println!("interval:           {}s", params.interval().as_secs());

    match registry.require_oracle_config(chain_id) {
        Ok(oracle) => println!(
            "VRF coordinator:    {} (subscription {})",
            oracle.coordinator, oracle.subscription_id
        ),
        Err(RegistryError::MissingOracleConfig { name, .. }) => {
            println!("VRF coordinator:    mock ({name} is a development chain)");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
