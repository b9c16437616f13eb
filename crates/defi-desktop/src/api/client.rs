//! # RPC Client
//!
//! JSON-RPC client for the DeFi node.

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::conf::RpcConfigs;
use super::error::{ApiError, ApiResult};
use super::types::{BlockchainInfo, RpcRequest, RpcResponse};

const REQUEST_ID: &str = "defi-desktop";

/// JSON-RPC client for a running node.
///
/// Cheaply cloneable; clones share the underlying connection pool.
///
/// # Examples
///
/// ```rust,ignore
/// let client = RpcClient::from_configs(&RpcConfigs::defaults("main"))?;
/// let info = client.get_blockchain_info().await?;
/// println!("{} at height {}", info.chain, info.blocks);
/// ```
#[derive(Clone)]
pub struct RpcClient {
    endpoint: String,
    credentials: Option<(String, String)>,
    http: Client,
}

impl RpcClient {
    /// Creates a client for `endpoint` with optional basic-auth credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        credentials: Option<(String, String)>,
    ) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            credentials,
            http,
        })
    }

    /// Creates a client from the node's RPC configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn from_configs(configs: &RpcConfigs) -> ApiResult<Self> {
        let credentials = match (&configs.rpc_user, &configs.rpc_password) {
            (Some(user), Some(password)) => Some((user.clone(), password.clone())),
            _ => None,
        };
        Self::new(configs.endpoint(), credentials)
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches chain state, which also tells whether the node is up.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Node unreachable
    /// * [`ApiError::NodeError`] - Authentication rejected
    /// * [`ApiError::Rpc`] - Node still warming up or method failed
    pub async fn get_blockchain_info(&self) -> ApiResult<BlockchainInfo> {
        self.call("getblockchaininfo", serde_json::json!([])).await
    }

    /// Issues a JSON-RPC call and decodes its result.
    ///
    /// # Errors
    ///
    /// See [`RpcClient::get_blockchain_info`].
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> ApiResult<T> {
        let req = RpcRequest {
            jsonrpc: "1.0",
            id: REQUEST_ID,
            method,
            params,
        };

        let mut builder = self.http.post(&self.endpoint).json(&req);
        if let Some((user, password)) = &self.credentials {
            builder = builder.basic_auth(user, Some(password));
        }

        tracing::debug!(method, endpoint = %self.endpoint, "rpc call");
        let res = builder.send().await?;
        let status = res.status();
        let body = res.text().await?;

        // The node reports RPC failures with a 500 and a JSON error body.
        let parsed: Result<RpcResponse<T>, _> = serde_json::from_str(&body);
        match parsed {
            Ok(RpcResponse {
                error: Some(error), ..
            }) => Err(ApiError::Rpc {
                code: error.code,
                message: error.message,
            }),
            Ok(RpcResponse {
                result: Some(result),
                ..
            }) if status.is_success() => Ok(result),
            _ if !status.is_success() => Err(ApiError::NodeError {
                status: status.as_u16(),
                message: body,
            }),
            Ok(_) => Err(ApiError::InvalidResponse(
                "response has neither result nor error".to_string(),
            )),
            Err(e) => Err(ApiError::InvalidResponse(e.to_string())),
        }
    }
}
