//! Error types for the Xyston library.
//!
//! All errors are represented by the [`XystonError`] enum. Most of the
//! rewriting pipeline degrades gracefully instead of failing (see the
//! lookup adapter), so the error surface is small: configuration problems,
//! scope resolution problems, and failures raised by collaborator
//! implementations of the analysis backend.
//!
//! # Examples
//!
//! ```
//! use xyston::error::{Result, XystonError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(XystonError::invalid_config("weight divider must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Xyston operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum XystonError {
    /// Analysis-related errors (backend analysis call failed)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration-related errors (invalid stage parameters, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scope-related errors (unknown search scope, resolution failed)
    #[error("Scope error: {0}")]
    Scope(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with XystonError.
pub type Result<T> = std::result::Result<T, XystonError>;

impl XystonError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        XystonError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        XystonError::Config(msg.into())
    }

    /// Create a new scope error.
    pub fn scope<S: Into<String>>(msg: S) -> Self {
        XystonError::Scope(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        XystonError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = XystonError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = XystonError::invalid_config("Test config error");
        assert_eq!(error.to_string(), "Configuration error: Test config error");

        let error = XystonError::scope("Test scope error");
        assert_eq!(error.to_string(), "Scope error: Test scope error");
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let source = anyhow::anyhow!("backend unreachable");
        let error = XystonError::from(source);

        match error {
            XystonError::Anyhow(_) => {}
            _ => panic!("Expected anyhow error variant"),
        }
    }
}
