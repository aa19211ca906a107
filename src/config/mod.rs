// ABOUTME: Configuration types and parsing for depstat.yml.
// ABOUTME: Handles YAML parsing, file discovery and key prefix resolution.

mod env_value;
mod store;

pub use env_value::EnvValue;
pub use store::StoreConfig;

use crate::deployment::StatusRepository;
use crate::error::{Error, Result};
use crate::store::FileStore;
use crate::types::{DEFAULT_KEY_PREFIX, KeyPrefix};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "depstat.yml";
pub const CONFIG_FILENAME_ALT: &str = "depstat.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".depstat/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_key_prefix")]
    pub key_prefix: EnvValue,

    pub store: StoreConfig,
}

fn default_key_prefix() -> EnvValue {
    EnvValue::from(DEFAULT_KEY_PREFIX)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    /// Load a config file. A relative store root is taken relative to the
    /// directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        if let Some(dir) = path.parent() {
            config.store.rebase(dir);
        }
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Resolve and validate the configured key prefix.
    pub fn key_prefix(&self) -> Result<KeyPrefix> {
        let raw = self.key_prefix.resolve()?;
        KeyPrefix::new(&raw).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Build a status repository over the configured file store.
    pub fn repository(&self) -> Result<StatusRepository<FileStore>> {
        Ok(StatusRepository::new(self.store.open(), self.key_prefix()?))
    }
}
