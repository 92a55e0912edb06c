//! Plain-text rendering of registry contents.

use std::fmt;

use raffle_networks::{NetworkParameters, NetworkRegistry};

/// Table of every network, one row each, in chain-ID order.
#[derive(Debug, Clone, Copy)]
pub struct NetworkList<'a>(pub &'a NetworkRegistry);

impl fmt::Display for NetworkList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.0;
        writeln!(
            f,
            "{:<12} {:<12} {:<6} {:<22} {:<10} VRF coordinator",
            "Chain ID", "Name", "Type", "Entrance fee (ETH)", "Interval"
        )?;
        writeln!(f, "{}", "-".repeat(110))?;

        for (chain_id, params) in registry.networks() {
            let net_type = if registry.is_development_network(params.name()) {
                "dev"
            } else {
                "live"
            };
            let coordinator = params
                .oracle()
                .map_or_else(|| "mock".to_owned(), |o| o.coordinator.to_string());
            writeln!(
                f,
                "{:<12} {:<12} {:<6} {:<22} {:<10} {}",
                chain_id,
                params.name(),
                net_type,
                params.entrance_fee_ether(),
                format!("{}s", params.interval().as_secs()),
                coordinator,
            )?;
        }
        Ok(())
    }
}

/// Key/value listing of a single network.
#[derive(Debug, Clone, Copy)]
pub struct NetworkDetails<'a> {
    /// Chain ID the parameters were looked up under.
    pub chain_id: u64,
    /// The network's parameters.
    pub params: &'a NetworkParameters,
}

impl fmt::Display for NetworkDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.params;
        writeln!(f, "chain ID:           {}", self.chain_id)?;
        writeln!(f, "name:               {}", params.name())?;
        writeln!(
            f,
            "entrance fee:       {} wei ({} ETH)",
            params.entrance_fee(),
            params.entrance_fee_ether()
        )?;
        writeln!(f, "gas lane:           {}", params.gas_lane())?;
        writeln!(f, "callback gas limit: {}", params.callback_gas_limit())?;
        writeln!(f, "interval:           {}s", params.interval().as_secs())?;
        match params.oracle() {
            Some(oracle) => {
                writeln!(f, "VRF coordinator:    {}", oracle.coordinator)?;
                writeln!(f, "subscription ID:    {}", oracle.subscription_id)
            }
            None => writeln!(f, "VRF coordinator:    mock (local network)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use raffle_networks::RegistryError;

    use super::*;

    #[test]
    fn list_has_one_row_per_network() -> Result<(), RegistryError> {
        let registry = NetworkRegistry::builtin()?;
        let text = NetworkList(&registry).to_string();
        let rows: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(rows.len(), 2, "{text}");
        assert!(rows[0].starts_with("31337") && rows[0].contains("mock"), "{text}");
        assert!(rows[1].starts_with("11155111") && rows[1].contains("live"), "{text}");
        Ok(())
    }

    #[test]
    fn details_show_subscription() -> Result<(), RegistryError> {
        let registry = NetworkRegistry::builtin()?;
        let details = NetworkDetails {
            chain_id: 11_155_111,
            params: registry.parameters(11_155_111)?,
        };
        let text = details.to_string();
        assert!(text.contains("subscription ID:    1060"), "{text}");
        assert!(text.contains("10000000000000000 wei"), "{text}");
        Ok(())
    }
}
