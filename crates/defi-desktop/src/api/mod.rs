//! # API Client
//!
//! JSON-RPC client for communicating with the DeFi node.
//!
//! - [`RpcClient`] issues authenticated JSON-RPC calls
//! - [`RpcConfigs`] resolves the RPC endpoint and credentials from the node's
//!   `defi.conf`

mod client;
mod conf;
mod error;
mod types;

pub use client::RpcClient;
pub use conf::{ConfError, RpcConfigs};
pub use error::ApiResult;
pub use types::BlockchainInfo;
