//! Error types for network table parsing, validation and lookup.

/// Errors returned by [`NetworkRegistry`](crate::NetworkRegistry) construction
/// and lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The table violates one of the registry invariants. Raised only while
    /// building a registry; a registry that exists is always valid.
    #[error("invalid network configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),

    /// No network is configured under this chain ID.
    #[error("unknown network: chain ID {0}")]
    UnknownNetwork(u64),

    /// The network is local and has no VRF coordinator / subscription pair.
    #[error("network `{name}` (chain ID {chain_id}) has no VRF coordinator configured")]
    MissingOracleConfig {
        /// Chain ID of the local network.
        chain_id: u64,
        /// Name of the local network.
        name: String,
    },
}

/// The specific invariant a network table violates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    /// The same chain ID appears more than once.
    #[error("chain ID {0} is configured more than once")]
    DuplicateChainId(u64),

    /// Two chain IDs share the same network name.
    #[error("network name `{name}` is used by chain IDs {first} and {second}")]
    DuplicateName {
        /// The shared name.
        name: String,
        /// Chain ID that claimed the name first.
        first: u64,
        /// Chain ID that reused it.
        second: u64,
    },

    /// The network name is empty or whitespace.
    #[error("chain ID {chain_id}: name must not be empty")]
    EmptyName {
        /// Offending chain ID.
        chain_id: u64,
    },

    /// A numeric field that must be strictly positive is zero.
    #[error("chain ID {chain_id}: {field} must be positive")]
    NonPositive {
        /// Offending chain ID.
        chain_id: u64,
        /// Wire name of the field.
        field: &'static str,
    },

    /// A field could not be parsed into its typed form.
    #[error("chain ID {chain_id}: malformed {field} `{value}`: {reason}")]
    Malformed {
        /// Offending chain ID.
        chain_id: u64,
        /// Wire name of the field.
        field: &'static str,
        /// The raw value as written in the table.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Only one half of the `vrfCoordinatorV2` / `subscriptionId` pair is set.
    #[error("chain ID {chain_id}: {present} is set but {missing} is not")]
    PartialOracle {
        /// Offending chain ID.
        chain_id: u64,
        /// The field that is present.
        present: &'static str,
        /// The field that is missing.
        missing: &'static str,
    },

    /// A network without a VRF coordinator is not listed as a development
    /// network.
    #[error(
        "network `{name}` (chain ID {chain_id}) has no VRF coordinator but is not a development chain"
    )]
    LocalNotDevelopment {
        /// Offending chain ID.
        chain_id: u64,
        /// Network name.
        name: String,
    },

    /// A development network has a live VRF coordinator configured.
    #[error(
        "network `{name}` (chain ID {chain_id}) is a development chain but has a VRF coordinator"
    )]
    DevelopmentWithOracle {
        /// Offending chain ID.
        chain_id: u64,
        /// Network name.
        name: String,
    },

    /// `developmentChains` contains an empty name.
    #[error("development chain names must not be empty")]
    EmptyDevelopmentName,
}

/// Errors raised while decoding a [`NetworkTable`](crate::NetworkTable) from
/// text.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The JSON document does not have the table shape.
    #[error("parsing JSON network table: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document does not have the table shape.
    #[error("parsing TOML network table: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
