//! Error types for routegraph
//!
//! Graph lookups, insertions and searches report absence through `Option`
//! and `bool` return values. `GraphError` covers the fallible ambient
//! operations around them: configuration files, logging setup and
//! representation-invariant checks.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during routegraph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("graph invariant violated: {0}")]
    InvariantViolation(String),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a broken representation invariant
    pub fn invariant(reason: impl Into<String>) -> Self {
        GraphError::InvariantViolation(reason.into())
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        GraphError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::InvalidConfig { .. } => "invalid_config",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::InvariantViolation(_) => "invariant_violation",
            GraphError::FailedOperation { .. } => "failed_operation",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routegraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
