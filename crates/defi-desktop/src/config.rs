//! # Configuration Persistence
//!
//! Save and load client settings to/from disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::{ConfError, RpcConfigs};

/// Errors raised while persisting the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No platform configuration directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Writing the file failed.
    #[error("failed to write config: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the configuration failed.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Desktop window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width.
    pub width: f64,
    /// Window height.
    pub height: f64,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the node's `defi.conf`. Defaults to `~/.defi/defi.conf`.
    #[serde(default)]
    pub node_conf_path: Option<PathBuf>,

    /// Network whose section of `defi.conf` applies.
    #[serde(default = "default_network")]
    pub network: String,

    /// Initial window size.
    #[serde(default)]
    pub window: WindowSize,
}

fn default_network() -> String {
    "main".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_conf_path: None,
            network: default_network(),
            window: WindowSize::default(),
        }
    }
}

impl Config {
    /// Returns the config file path.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("defi-desktop").join("config.json"))
    }

    /// Loads configuration from disk, or returns default if not found.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the directory or file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Saves configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!(?path, "Saved configuration");
        Ok(())
    }

    /// Resolved location of `defi.conf`.
    #[must_use]
    pub fn node_conf_path(&self) -> Option<PathBuf> {
        self.node_conf_path
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".defi").join("defi.conf")))
    }

    /// Reads the node's RPC settings.
    ///
    /// A missing `defi.conf` is not an error: the node then runs with the
    /// network defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfError`] if the file exists but cannot be read or parsed.
    pub fn rpc_configs(&self) -> Result<RpcConfigs, ConfError> {
        match self.node_conf_path() {
            Some(path) if path.exists() => RpcConfigs::load(&path, &self.network),
            path => {
                tracing::debug!(?path, "No node configuration file, using defaults");
                Ok(RpcConfigs::defaults(&self.network))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.network, "main");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            node_conf_path: Some(PathBuf::from("/srv/defi/defi.conf")),
            network: "regtest".to_string(),
            window: WindowSize {
                width: 1000.0,
                height: 700.0,
            },
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"network":"test"}"#).unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.network, "test");
        assert_eq!(config.window, WindowSize::default());
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_rpc_configs_without_conf_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            node_conf_path: Some(dir.path().join("missing.conf")),
            network: "regtest".to_string(),
            ..Config::default()
        };
        let configs = config.rpc_configs().unwrap();
        assert_eq!(configs, RpcConfigs::defaults("regtest"));
    }

    #[test]
    fn test_rpc_configs_reads_conf_file() {
        let dir = tempfile::tempdir().unwrap();
        let conf = dir.path().join("defi.conf");
        fs::write(&conf, "rpcuser=dave\nrpcpassword=pw\n[regtest]\nrpcport=20000\n").unwrap();
        let config = Config {
            node_conf_path: Some(conf),
            network: "regtest".to_string(),
            ..Config::default()
        };
        let configs = config.rpc_configs().unwrap();
        assert_eq!(configs.rpc_port, 20000);
        assert_eq!(configs.rpc_user.as_deref(), Some("dave"));
    }
}
