//! The raw network table, as written by humans.
//!
//! Fields stay textual here, mirroring the deployment helper config the
//! table comes from: numbers may be quoted, the entrance fee may carry an
//! `ether` suffix, and the oracle fields are simply left out for local
//! networks. [`NetworkRegistry`](crate::NetworkRegistry) turns a table into
//! strictly typed [`NetworkParameters`](crate::NetworkParameters).
//!
//! JSON shape:
//!
//! ```json
//! {
//!   "networkConfig": {
//!     "31337": { "name": "localhost", "entranceFee": "0.01 ether", ... }
//!   },
//!   "developmentChains": ["hardhat", "localhost"]
//! }
//! ```
//!
//! In TOML, `developmentChains` must come before the `[networkConfig.<id>]`
//! tables.

use std::borrow::Cow;
use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TableError;

/// A single, unvalidated network entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEntry {
    /// Human-readable network name (e.g. `"sepolia"`).
    pub name: Cow<'static, str>,

    /// Raffle entrance fee: integer wei, or a decimal followed by `ether`.
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub entrance_fee: Cow<'static, str>,

    /// VRF key hash selecting the gas lane, `0x`-prefixed 32-byte hex.
    pub gas_lane: Cow<'static, str>,

    /// Gas limit for the VRF `fulfillRandomWords` callback.
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub callback_gas_limit: Cow<'static, str>,

    /// Upkeep interval in seconds.
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub interval: Cow<'static, str>,

    /// VRF v2 coordinator contract address. Absent for local networks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_coordinator_v2: Option<Cow<'static, str>>,

    /// Funded VRF subscription ID. Absent for local networks.
    #[serde(
        default,
        deserialize_with = "deserialize_opt_text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_id: Option<Cow<'static, str>>,
}

/// A complete, unvalidated network table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkTable {
    /// Entries keyed by chain ID, in input order. Duplicate keys are kept so
    /// that validation can reject them.
    #[serde(
        deserialize_with = "deserialize_entries",
        serialize_with = "serialize_entries"
    )]
    pub network_config: Vec<(u64, NetworkEntry)>,

    /// Names of local / ephemeral networks.
    #[serde(default)]
    pub development_chains: Vec<Cow<'static, str>>,
}

/// Built-in raffle deployments.
pub const BUILTIN_NETWORKS: &[(u64, NetworkEntry)] = &[
    (
        31_337,
        NetworkEntry {
            name: Cow::Borrowed("localhost"),
            entrance_fee: Cow::Borrowed("0.01 ether"),
            gas_lane: Cow::Borrowed(
                "0x8af398995b04c28e9951adb9721ef74c74f93e6a478f39e7e0777be13527e7ef",
            ),
            callback_gas_limit: Cow::Borrowed("500000"),
            interval: Cow::Borrowed("30"),
            vrf_coordinator_v2: None,
            subscription_id: None,
        },
    ),
    // Coordinator addresses: https://docs.chain.link/vrf/v2/subscription/supported-networks
    (
        11_155_111,
        NetworkEntry {
            name: Cow::Borrowed("sepolia"),
            entrance_fee: Cow::Borrowed("0.01 ether"),
            gas_lane: Cow::Borrowed(
                "0x474e34a077df58807dbe9c96d3c009b23b3c6d0cce433e59bbf5b34f823bc56c",
            ),
            callback_gas_limit: Cow::Borrowed("500000"),
            interval: Cow::Borrowed("30"),
            vrf_coordinator_v2: Some(Cow::Borrowed("0x8103B0A8A00be2DDC778e6e7eaa21791Cd364625")),
            subscription_id: Some(Cow::Borrowed("1060")),
        },
    ),
];

/// Built-in development network names. `hardhat` is the in-process network
/// and shares chain ID 31337 with `localhost`.
pub const DEVELOPMENT_CHAINS: &[&str] = &["hardhat", "localhost"];

impl NetworkTable {
    /// The built-in table ([`BUILTIN_NETWORKS`] and [`DEVELOPMENT_CHAINS`]).
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            network_config: BUILTIN_NETWORKS.to_vec(),
            development_chains: DEVELOPMENT_CHAINS
                .iter()
                .map(|name| Cow::Borrowed(*name))
                .collect(),
        }
    }

    /// Deserialize a table from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Json`] if the document does not have the table
    /// shape. Field values are not validated here.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize a table from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Toml`] if the document does not have the table
    /// shape. Field values are not validated here.
    pub fn from_toml(text: &str) -> Result<Self, TableError> {
        Ok(toml::from_str(text)?)
    }

    /// Serialize this table to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Num(u64),
    Text(String),
}

impl From<TextOrNumber> for Cow<'static, str> {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Num(n) => Cow::Owned(n.to_string()),
            TextOrNumber::Text(s) => Cow::Owned(s),
        }
    }
}

/// Accept either a number or a string, keeping the textual form.
fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<Cow<'static, str>, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrNumber::deserialize(deserializer).map(Into::into)
}

fn deserialize_opt_text_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<Cow<'static, str>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(Into::into))
}

/// Read a `chainId -> entry` map without collapsing duplicate keys.
fn deserialize_entries<'de, D>(deserializer: D) -> Result<Vec<(u64, NetworkEntry)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(u64, NetworkEntry)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of chain ID to network entry")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            // TOML keys are always strings, JSON keys are strings that look
            // like numbers; accept both spellings.
            while let Some((key, entry)) = map.next_entry::<TextOrNumber, NetworkEntry>()? {
                let chain_id = match key {
                    TextOrNumber::Num(n) => n,
                    TextOrNumber::Text(s) => s.trim().parse().map_err(|e| {
                        A::Error::custom(format!("invalid chain ID key `{s}`: {e}"))
                    })?,
                };
                entries.push((chain_id, entry));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

fn serialize_entries<S>(entries: &[(u64, NetworkEntry)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(entries.iter().map(|(chain_id, entry)| (chain_id, entry)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEPOLIA_JSON: &str = r#"{
        "networkConfig": {
            "11155111": {
                "name": "sepolia",
                "vrfCoordinatorV2": "0x8103B0A8A00be2DDC778e6e7eaa21791Cd364625",
                "entranceFee": "10000000000000000",
                "gasLane": "0x474e34a077df58807dbe9c96d3c009b23b3c6d0cce433e59bbf5b34f823bc56c",
                "subscriptionId": 1060,
                "callbackGasLimit": "500000",
                "interval": 30
            }
        },
        "developmentChains": ["hardhat", "localhost"]
    }"#;

    #[test]
    fn json_numbers_and_strings_are_both_accepted() -> Result<(), TableError> {
        let table = NetworkTable::from_json(SEPOLIA_JSON)?;
        let [(chain_id, entry)] = table.network_config.as_slice() else {
            panic!("expected exactly one entry, got {:?}", table.network_config);
        };
        assert_eq!(*chain_id, 11_155_111, "chain ID key");
        assert_eq!(entry.subscription_id.as_deref(), Some("1060"), "numeric subscription ID");
        assert_eq!(entry.interval, "30", "numeric interval");
        assert_eq!(entry.callback_gas_limit, "500000", "quoted gas limit");
        assert_eq!(table.development_chains, ["hardhat", "localhost"], "development chains");
        Ok(())
    }

    #[test]
    fn duplicate_json_keys_are_preserved() -> Result<(), TableError> {
        let json = r#"{
            "networkConfig": {
                "5": { "name": "a", "entranceFee": "1", "gasLane": "0x", "callbackGasLimit": 1, "interval": 1 },
                "5": { "name": "b", "entranceFee": "1", "gasLane": "0x", "callbackGasLimit": 1, "interval": 1 }
            }
        }"#;
        let table = NetworkTable::from_json(json)?;
        let ids: Vec<u64> = table.network_config.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, [5, 5], "both entries kept");
        assert!(table.development_chains.is_empty(), "development chains default to empty");
        Ok(())
    }

    #[test]
    fn toml_table_parses() -> Result<(), TableError> {
        let text = r#"
            developmentChains = ["localhost"]

            [networkConfig.31337]
            name = "localhost"
            entranceFee = "0.01 ether"
            gasLane = "0x8af398995b04c28e9951adb9721ef74c74f93e6a478f39e7e0777be13527e7ef"
            callbackGasLimit = 500000
            interval = "30"
        "#;
        let table = NetworkTable::from_toml(text)?;
        assert_eq!(table.network_config.len(), 1, "one entry");
        let (chain_id, entry) = &table.network_config[0];
        assert_eq!(*chain_id, 31_337, "chain ID key");
        assert_eq!(entry.vrf_coordinator_v2, None, "no coordinator");
        assert_eq!(entry.callback_gas_limit, "500000", "numeric gas limit");
        Ok(())
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let json = r#"{
            "networkConfig": {
                "1": { "name": "a", "entranceFee": "1", "gasLane": "0x", "callbackGasLimit": -5, "interval": 1 }
            }
        }"#;
        assert!(
            matches!(NetworkTable::from_json(json), Err(TableError::Json(_))),
            "negative gas limit must not parse"
        );
    }

    #[test]
    fn builtin_table_survives_json() -> Result<(), Box<dyn std::error::Error>> {
        let table = NetworkTable::builtin();
        let json = table.to_json()?;
        assert!(json.contains("\"31337\""), "chain IDs serialize as map keys: {json}");
        assert!(!json.contains("subscriptionId\": null"), "absent fields are skipped");
        assert_eq!(NetworkTable::from_json(&json)?, table, "JSON round trip");
        Ok(())
    }
}
