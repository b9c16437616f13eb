//! Error types for shell operations.

use thiserror::Error;

/// Errors raised by the shell core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A navigation record did not have the required shape.
    ///
    /// This is a programmer error in the routing layer, never a user-facing
    /// condition.
    #[error("invalid location '{path}': {reason}")]
    InvalidLocation {
        /// The offending path as received.
        path: String,
        /// Why the path was rejected.
        reason: &'static str,
    },
}

/// A specialized Result type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;

impl ShellError {
    /// Creates a new invalid location error.
    #[must_use]
    pub fn invalid_location(path: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidLocation {
            path: path.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_location_display() {
        let err = ShellError::invalid_location("wallets", "path must start with '/'");
        assert_eq!(
            err.to_string(),
            "invalid location 'wallets': path must start with '/'"
        );
    }

    #[test]
    fn invalid_location_empty_path_display() {
        let err = ShellError::invalid_location("", "path is empty");
        assert_eq!(err.to_string(), "invalid location '': path is empty");
    }
}
