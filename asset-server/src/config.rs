//! TOML configuration for the asset server.
//!
//! Every section is optional; a missing file section falls back to the
//! defaults below.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration, parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener.
    pub server: ServerSection,
    /// Backing store.
    pub store: StoreSection,
    /// Logging configuration.
    pub log: LogSection,
}

/// `[server]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address the HTTP API binds to.
    pub listen_addr: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:9990".to_string(),
        }
    }
}

/// Which [`AssetStore`](crate::AssetStore) implementation to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// SQLite document collection on disk.
    #[default]
    Document,
    /// Process memory; lost on exit.
    Memory,
}

/// `[store]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub backend: StoreBackend,
    /// Database file for the document backend.
    pub path: PathBuf,
    /// Collection (table) holding asset documents.
    pub collection: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Document,
            path: PathBuf::from("assets.db"),
            collection: "assets".to_string(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Log level filter (e.g. `"info"`, `"debug"`). `RUST_LOG` takes
    /// precedence when set.
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or use defaults if no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::from_toml(&std::fs::read_to_string(p)?),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
