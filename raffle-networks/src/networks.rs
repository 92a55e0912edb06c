//! Validated per-network deployment parameters.
//!
//! A [`NetworkParameters`] value is only ever produced by parsing a
//! [`NetworkEntry`], so every instance satisfies the table invariants:
//! positive fee, gas limit and interval, well-formed hex fields, and an
//! oracle configuration that is either complete or absent.

use std::time::Duration;

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::{Address, B256, U256};
use serde::{Serialize, Serializer};

use crate::error::{ConfigIssue, Result};
use crate::table::NetworkEntry;

/// A funded Chainlink VRF v2 subscription on a live coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleConfig {
    /// The VRF v2 coordinator contract.
    pub coordinator: Address,
    /// Subscription the raffle consumer is registered under.
    pub subscription_id: u64,
}

impl From<OracleConfig> for (Address, u64) {
    fn from(config: OracleConfig) -> Self {
        (config.coordinator, config.subscription_id)
    }
}

/// Whether a network relies on a live VRF coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NetworkKind {
    /// Local / simulated network; the coordinator is deployed as a mock.
    Local,
    /// Network with a live VRF coordinator and a funded subscription.
    OracleBacked(OracleConfig),
}

/// Deployment parameters for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParameters {
    name: String,
    entrance_fee: U256,
    gas_lane: B256,
    callback_gas_limit: u32,
    #[serde(serialize_with = "serialize_secs")]
    interval: Duration,
    #[serde(flatten)]
    kind: NetworkKind,
}

const ENTRANCE_FEE: &str = "entranceFee";
const GAS_LANE: &str = "gasLane";
const CALLBACK_GAS_LIMIT: &str = "callbackGasLimit";
const INTERVAL: &str = "interval";
const VRF_COORDINATOR: &str = "vrfCoordinatorV2";
const SUBSCRIPTION_ID: &str = "subscriptionId";

impl NetworkParameters {
    /// Parse and validate a raw table entry.
    ///
    /// Table-wide checks (duplicate IDs and names, development-chain
    /// consistency) are done by [`NetworkRegistry`](crate::NetworkRegistry).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfiguration`](crate::RegistryError::InvalidConfiguration)
    /// if any field is empty, malformed, non-positive, or if only one half of
    /// the oracle pair is present.
    pub fn from_entry(chain_id: u64, entry: &NetworkEntry) -> Result<Self> {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(ConfigIssue::EmptyName { chain_id }.into());
        }

        let entrance_fee = parse_entrance_fee(chain_id, &entry.entrance_fee)?;
        let gas_lane = parse_hex::<B256>(chain_id, GAS_LANE, &entry.gas_lane)?;
        let callback_gas_limit =
            parse_positive::<u32>(chain_id, CALLBACK_GAS_LIMIT, &entry.callback_gas_limit)?;
        let interval = parse_positive::<u64>(chain_id, INTERVAL, &entry.interval)?;

        let kind = match (&entry.vrf_coordinator_v2, &entry.subscription_id) {
            (None, None) => NetworkKind::Local,
            (Some(raw_coordinator), Some(raw_subscription)) => {
                let coordinator = parse_hex::<Address>(chain_id, VRF_COORDINATOR, raw_coordinator)?;
                if coordinator == Address::ZERO {
                    return Err(
                        malformed(chain_id, VRF_COORDINATOR, raw_coordinator, "zero address").into(),
                    );
                }
                let subscription_id = raw_subscription
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| malformed(chain_id, SUBSCRIPTION_ID, raw_subscription, e))?;
                NetworkKind::OracleBacked(OracleConfig {
                    coordinator,
                    subscription_id,
                })
            }
            (Some(_), None) => {
                return Err(ConfigIssue::PartialOracle {
                    chain_id,
                    present: VRF_COORDINATOR,
                    missing: SUBSCRIPTION_ID,
                }
                .into());
            }
            (None, Some(_)) => {
                return Err(ConfigIssue::PartialOracle {
                    chain_id,
                    present: SUBSCRIPTION_ID,
                    missing: VRF_COORDINATOR,
                }
                .into());
            }
        };

        Ok(Self {
            name: name.to_owned(),
            entrance_fee,
            gas_lane,
            callback_gas_limit,
            interval: Duration::from_secs(interval),
            kind,
        })
    }

    /// Human-readable network name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raffle entrance fee in wei.
    #[must_use]
    pub const fn entrance_fee(&self) -> U256 {
        self.entrance_fee
    }

    /// Entrance fee rendered as decimal ether (e.g. `"0.010000000000000000"`).
    #[must_use]
    pub fn entrance_fee_ether(&self) -> String {
        format_ether(self.entrance_fee)
    }

    /// VRF key hash selecting the gas lane.
    #[must_use]
    pub const fn gas_lane(&self) -> B256 {
        self.gas_lane
    }

    /// Gas limit for the VRF callback.
    #[must_use]
    pub const fn callback_gas_limit(&self) -> u32 {
        self.callback_gas_limit
    }

    /// Upkeep interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Local or oracle-backed.
    #[must_use]
    pub const fn kind(&self) -> NetworkKind {
        self.kind
    }

    /// The VRF configuration, if this network has a live coordinator.
    #[must_use]
    pub const fn oracle(&self) -> Option<OracleConfig> {
        match self.kind {
            NetworkKind::Local => None,
            NetworkKind::OracleBacked(config) => Some(config),
        }
    }

    /// `true` if the network has no live VRF coordinator.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self.kind, NetworkKind::Local)
    }
}

fn malformed(
    chain_id: u64,
    field: &'static str,
    value: &str,
    reason: impl std::fmt::Display,
) -> ConfigIssue {
    ConfigIssue::Malformed {
        chain_id,
        field,
        value: value.to_owned(),
        reason: reason.to_string(),
    }
}

/// Integer wei, or a decimal amount with an `ether` suffix.
fn parse_entrance_fee(chain_id: u64, raw: &str) -> Result<U256, ConfigIssue> {
    let trimmed = raw.trim();
    let fee = match trimmed.strip_suffix("ether") {
        Some(amount) => {
            let amount = amount.trim();
            // parse_ether accepts signed input and `_` separators.
            if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
                return Err(malformed(
                    chain_id,
                    ENTRANCE_FEE,
                    raw,
                    "expected an unsigned decimal ether amount",
                ));
            }
            parse_ether(amount).map_err(|e| malformed(chain_id, ENTRANCE_FEE, raw, e))?
        }
        None => {
            if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed(
                    chain_id,
                    ENTRANCE_FEE,
                    raw,
                    "expected integer wei or `<amount> ether`",
                ));
            }
            U256::from_str_radix(trimmed, 10)
                .map_err(|e| malformed(chain_id, ENTRANCE_FEE, raw, e))?
        }
    };
    if fee.is_zero() {
        return Err(ConfigIssue::NonPositive {
            chain_id,
            field: ENTRANCE_FEE,
        });
    }
    Ok(fee)
}

/// `0x`-prefixed fixed-width hex (addresses, key hashes).
fn parse_hex<T>(chain_id: u64, field: &'static str, raw: &str) -> Result<T, ConfigIssue>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let trimmed = raw.trim();
    if !trimmed.starts_with("0x") {
        return Err(malformed(chain_id, field, raw, "missing 0x prefix"));
    }
    trimmed
        .parse::<T>()
        .map_err(|e| malformed(chain_id, field, raw, e))
}

fn parse_positive<T>(chain_id: u64, field: &'static str, raw: &str) -> Result<T, ConfigIssue>
where
    T: std::str::FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|e| malformed(chain_id, field, raw, e))?;
    if value == T::default() {
        return Err(ConfigIssue::NonPositive { chain_id, field });
    }
    Ok(value)
}

fn serialize_secs<S>(interval: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(interval.as_secs())
}
