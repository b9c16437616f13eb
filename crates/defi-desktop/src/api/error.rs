//! # API Errors
//!
//! Error types for node RPC operations.

use thiserror::Error;

use super::conf::ConfError;

/// Errors that can occur while talking to the node.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Node rejected the request at the HTTP level.
    #[error("node error: {status} - {message}")]
    NodeError {
        /// HTTP status code.
        status: u16,
        /// Body returned by the node.
        message: String,
    },

    /// Node answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message from the node.
        message: String,
    },

    /// Failed to deserialize response.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// The node configuration could not be read.
    #[error(transparent)]
    Conf(#[from] ConfError),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_display() {
        let err = ApiError::Rpc {
            code: -28,
            message: "Loading block index...".to_string(),
        };
        assert_eq!(err.to_string(), "rpc error -28: Loading block index...");
    }

    #[test]
    fn test_node_error_display() {
        let err = ApiError::NodeError {
            status: 401,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "node error: 401 - ");
    }
}
