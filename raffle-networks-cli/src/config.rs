//! Where the network table comes from.
//!
//! An explicit `--table` path must exist. Without one, `networks.toml` in
//! the working directory is used when present, and the built-in table
//! otherwise. `.json` files are read as JSON, everything else as TOML.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use raffle_networks::{NetworkRegistry, NetworkTable};

/// Table file picked up from the working directory when `--table` is not
/// given.
pub const DEFAULT_TABLE_PATH: &str = "networks.toml";

/// The origin of the network table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// The compiled-in raffle deployments.
    Builtin,
    /// A TOML or JSON file.
    File(PathBuf),
}

impl TableSource {
    /// Pick the table source for an optional `--table` argument.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is given but does not exist.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        Self::resolve_in(explicit, Path::new("."))
    }

    /// Like [`TableSource::resolve`], looking for the default file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is given but does not exist.
    pub fn resolve_in(explicit: Option<PathBuf>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("network table {} does not exist", path.display());
            }
            return Ok(Self::File(path));
        }
        let default = dir.join(DEFAULT_TABLE_PATH);
        if default.exists() {
            Ok(Self::File(default))
        } else {
            Ok(Self::Builtin)
        }
    }

    /// Read the raw table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not have the
    /// table shape.
    pub fn load(&self) -> Result<NetworkTable> {
        let Self::File(path) = self else {
            return Ok(NetworkTable::builtin());
        };
        tracing::debug!(path = %path.display(), "reading network table");
        let text =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let table = if path.extension().is_some_and(|ext| ext == "json") {
            NetworkTable::from_json(&text)
        } else {
            NetworkTable::from_toml(&text)
        };
        table.with_context(|| format!("parsing {}", path.display()))
    }

    /// Read and validate the table into a registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be loaded or violates a registry
    /// invariant.
    pub fn registry(&self) -> Result<NetworkRegistry> {
        let table = self.load()?;
        NetworkRegistry::from_table(&table).with_context(|| format!("validating {self}"))
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in table"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
