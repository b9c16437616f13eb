//! # API Types
//!
//! JSON-RPC envelopes and node response payloads.

use serde::{Deserialize, Serialize};

/// JSON-RPC request envelope.
#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'a str,
    pub params: serde_json::Value,
}

/// JSON-RPC error object.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

/// Subset of `getblockchaininfo` shown by the client.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlockchainInfo {
    /// Network name (`main`, `test`, `regtest`).
    pub chain: String,
    /// Height of the best validated block.
    pub blocks: u64,
    /// Height of the best known header.
    #[serde(default)]
    pub headers: u64,
    /// Hash of the best block.
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: String,
    /// Sync progress between 0 and 1.
    #[serde(rename = "verificationprogress", default)]
    pub verification_progress: f64,
    /// Whether the node is still in initial block download.
    #[serde(rename = "initialblockdownload", default)]
    pub initial_block_download: bool,
}

impl BlockchainInfo {
    /// Sync progress as a whole percentage.
    #[must_use]
    pub fn sync_percent(&self) -> u8 {
        (self.verification_progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}
