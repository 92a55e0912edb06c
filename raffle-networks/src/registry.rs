//! The validated network registry.
//!
//! Build one [`NetworkRegistry`] at startup and pass it by reference to
//! whatever needs network parameters. Every table invariant is checked
//! during construction, so lookups only ever fail because the caller asked
//! for something the table does not have.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ConfigIssue, RegistryError, Result};
use crate::networks::{NetworkKind, NetworkParameters, OracleConfig};
use crate::table::{NetworkEntry, NetworkTable};

/// Immutable mapping from chain ID to [`NetworkParameters`], plus the set of
/// development network names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    by_chain_id: BTreeMap<u64, NetworkParameters>,
    development_chains: BTreeSet<String>,
}

impl NetworkRegistry {
    /// Validate `entries` and `development_chains` into a registry.
    ///
    /// On top of the per-entry checks done by
    /// [`NetworkParameters::from_entry`], this rejects duplicate chain IDs,
    /// duplicate names, empty development names, local networks that are not
    /// development chains, and development chains with a live coordinator.
    /// Development names without a table entry are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfiguration`] naming the first
    /// violated invariant.
    pub fn new<E, N>(
        entries: impl IntoIterator<Item = (u64, E)>,
        development_chains: impl IntoIterator<Item = N>,
    ) -> Result<Self>
    where
        E: Borrow<NetworkEntry>,
        N: AsRef<str>,
    {
        let mut development = BTreeSet::new();
        for name in development_chains {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(ConfigIssue::EmptyDevelopmentName.into());
            }
            development.insert(name.to_owned());
        }

        let mut by_chain_id = BTreeMap::new();
        let mut names = BTreeMap::new();
        for (chain_id, entry) in entries {
            if by_chain_id.contains_key(&chain_id) {
                return Err(ConfigIssue::DuplicateChainId(chain_id).into());
            }
            let params = NetworkParameters::from_entry(chain_id, entry.borrow())?;

            if let Some(&first) = names.get(params.name()) {
                return Err(ConfigIssue::DuplicateName {
                    name: params.name().to_owned(),
                    first,
                    second: chain_id,
                }
                .into());
            }

            let is_development = development.contains(params.name());
            match params.kind() {
                NetworkKind::Local if !is_development => {
                    return Err(ConfigIssue::LocalNotDevelopment {
                        chain_id,
                        name: params.name().to_owned(),
                    }
                    .into());
                }
                NetworkKind::OracleBacked(_) if is_development => {
                    return Err(ConfigIssue::DevelopmentWithOracle {
                        chain_id,
                        name: params.name().to_owned(),
                    }
                    .into());
                }
                _ => {}
            }

            names.insert(params.name().to_owned(), chain_id);
            by_chain_id.insert(chain_id, params);
        }

        for name in development.iter().filter(|n| !names.contains_key(n.as_str())) {
            tracing::debug!(name = %name, "development chain has no table entry");
        }

        tracing::debug!(
            networks = by_chain_id.len(),
            development = development.len(),
            "network registry ready"
        );

        Ok(Self {
            by_chain_id,
            development_chains: development,
        })
    }

    /// Validate a parsed [`NetworkTable`].
    ///
    /// # Errors
    ///
    /// Same as [`NetworkRegistry::new`].
    pub fn from_table(table: &NetworkTable) -> Result<Self> {
        Self::new(
            table.network_config.iter().map(|(id, entry)| (*id, entry)),
            &table.development_chains,
        )
    }

    /// The registry for the built-in raffle deployments.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in table itself is broken.
    pub fn builtin() -> Result<Self> {
        Self::from_table(&NetworkTable::builtin())
    }

    /// Parameters for `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownNetwork`] if the chain is not
    /// configured.
    pub fn parameters(&self, chain_id: u64) -> Result<&NetworkParameters> {
        self.by_chain_id
            .get(&chain_id)
            .ok_or(RegistryError::UnknownNetwork(chain_id))
    }

    /// `true` if `name` is a development network. Unknown names are not.
    #[must_use]
    pub fn is_development_network(&self, name: &str) -> bool {
        self.development_chains.contains(name)
    }

    /// The VRF coordinator and subscription for `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownNetwork`] if the chain is not
    /// configured, or [`RegistryError::MissingOracleConfig`] if it is a local
    /// network.
    pub fn require_oracle_config(&self, chain_id: u64) -> Result<OracleConfig> {
        let params = self.parameters(chain_id)?;
        params
            .oracle()
            .ok_or_else(|| RegistryError::MissingOracleConfig {
                chain_id,
                name: params.name().to_owned(),
            })
    }

    /// Parameters for the network called `name`, if any.
    #[must_use]
    pub fn parameters_by_name(&self, name: &str) -> Option<&NetworkParameters> {
        self.by_chain_id.values().find(|p| p.name() == name)
    }

    /// Chain ID of the network called `name`, if any.
    #[must_use]
    pub fn chain_id_of(&self, name: &str) -> Option<u64> {
        self.networks()
            .find(|(_, p)| p.name() == name)
            .map(|(id, _)| id)
    }

    /// All configured networks in ascending chain-ID order.
    pub fn networks(&self) -> impl Iterator<Item = (u64, &NetworkParameters)> + '_ {
        self.by_chain_id.iter().map(|(id, p)| (*id, p))
    }

    /// Development network names in sorted order.
    pub fn development_networks(&self) -> impl Iterator<Item = &str> + '_ {
        self.development_chains.iter().map(String::as_str)
    }

    /// Number of configured networks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_chain_id.len()
    }

    /// `true` if no networks are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_chain_id.is_empty()
    }
}
