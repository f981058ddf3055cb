//! # App-level configuration — `registry.toml`
//!
//! Optional TOML file read by the native launchers to decide where the
//! collection slot lives. A missing or empty file is equivalent to the
//! default configuration.
//!
//! ```toml
//! [storage]
//! slot = "users"          # slot name; becomes <slot>.json on disk
//! data_dir = ""           # override for the platform data directory
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `registry.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Name of the slot holding the serialized collection.
    #[serde(default = "default_slot")]
    pub slot: String,
    /// Override for the platform data directory. Empty string means the
    /// platform default.
    #[serde(default)]
    pub data_dir: String,
}

fn default_slot() -> String {
    "users".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            data_dir: String::new(),
        }
    }
}

impl RegistryConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "registry.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
