//! Typed, validated deployment parameters for a Chainlink VRF-backed raffle.
//!
//! A [`NetworkTable`] holds the per-network settings as written by hand
//! (entrance fee, VRF gas lane, callback gas limit, upkeep interval, and the
//! VRF coordinator / subscription for live networks) plus the list of
//! development network names. [`NetworkRegistry`] validates a table once and
//! then serves read-only lookups.
//!
//! ```
//! use raffle_networks::{NetworkRegistry, RegistryError};
//!
//! let registry = NetworkRegistry::builtin()?;
//!
//! let sepolia = registry.require_oracle_config(11_155_111)?;
//! assert_eq!(sepolia.subscription_id, 1060);
//!
//! assert!(registry.is_development_network("hardhat"));
//! assert!(matches!(
//!     registry.require_oracle_config(31_337),
//!     Err(RegistryError::MissingOracleConfig { .. })
//! ));
//! # Ok::<(), RegistryError>(())
//! ```

pub mod error;
pub mod networks;
pub mod registry;
pub mod table;

pub use error::{ConfigIssue, RegistryError, Result, TableError};
pub use networks::{NetworkKind, NetworkParameters, OracleConfig};
pub use registry::NetworkRegistry;
pub use table::{BUILTIN_NETWORKS, DEVELOPMENT_CHAINS, NetworkEntry, NetworkTable};
