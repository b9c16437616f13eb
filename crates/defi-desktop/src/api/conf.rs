//! # Node Configuration
//!
//! Reads the RPC settings from the node's `defi.conf`.
//!
//! The file is a list of `key=value` lines. `#` starts a comment and
//! `[section]` headers scope the keys below them to one network. Keys in the
//! selected network's section override the top-level ones.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default JSON-RPC port of a mainnet node.
pub const MAINNET_RPC_PORT: u16 = 8554;

/// Default JSON-RPC port of a testnet node.
pub const TESTNET_RPC_PORT: u16 = 18554;

/// Default JSON-RPC port of a regtest node.
pub const REGTEST_RPC_PORT: u16 = 19554;

/// Errors raised while reading `defi.conf`.
#[derive(Error, Debug)]
pub enum ConfError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line is neither a comment, a section header nor `key=value`.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// `rpcport` is not a valid port number.
    #[error("invalid rpcport '{0}'")]
    InvalidPort(String),
}

/// RPC endpoint and credentials of the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfigs {
    /// Address the RPC server binds to.
    pub rpc_bind: String,
    /// RPC port.
    pub rpc_port: u16,
    /// RPC user name.
    pub rpc_user: Option<String>,
    /// RPC password.
    pub rpc_password: Option<String>,
}

impl RpcConfigs {
    /// Defaults for `network` when the file sets nothing.
    #[must_use]
    pub fn defaults(network: &str) -> Self {
        let rpc_port = match network {
            "test" | "testnet" => TESTNET_RPC_PORT,
            "regtest" => REGTEST_RPC_PORT,
            _ => MAINNET_RPC_PORT,
        };
        Self {
            rpc_bind: "127.0.0.1".to_string(),
            rpc_port,
            rpc_user: None,
            rpc_password: None,
        }
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::Io`] if the file cannot be read, or a parse error.
    pub fn load(path: &Path, network: &str) -> Result<Self, ConfError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let configs = Self::parse(&contents, network)?;
        tracing::info!(?path, bind = %configs.rpc_bind, port = configs.rpc_port, "Loaded node RPC configuration");
        Ok(configs)
    }

    /// Parses `defi.conf` contents for `network`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::Parse`] for malformed lines and
    /// [`ConfError::InvalidPort`] for a bad `rpcport`.
    pub fn parse(contents: &str, network: &str) -> Result<Self, ConfError> {
        let mut configs = Self::defaults(network);
        let mut section: Option<String> = None;

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = rest.strip_suffix(']').ok_or_else(|| ConfError::Parse {
                    line: index + 1,
                    message: "unterminated section header".to_string(),
                })?;
                section = Some(name.trim().to_string());
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| ConfError::Parse {
                line: index + 1,
                message: format!("expected key=value, found '{line}'"),
            })?;

            if section.as_deref().is_some_and(|s| !section_matches(s, network)) {
                continue;
            }
            configs.apply(key.trim(), value.trim())?;
        }

        Ok(configs)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfError> {
        match key {
            "rpcbind" => self.rpc_bind = value.to_string(),
            "rpcport" => {
                self.rpc_port = value
                    .parse()
                    .map_err(|_| ConfError::InvalidPort(value.to_string()))?;
            }
            "rpcuser" => self.rpc_user = Some(value.to_string()),
            "rpcpassword" => self.rpc_password = Some(value.to_string()),
            _ => {}
        }
        Ok(())
    }

    /// HTTP endpoint of the RPC server.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.rpc_bind, self.rpc_port)
    }
}

fn section_matches(section: &str, network: &str) -> bool {
    section == network || (section == "test" && network == "testnet")
}
