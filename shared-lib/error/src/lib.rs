//! Common error types for services.
//!
//! This crate provides the configuration error and the JSON error body
//! shared by the launcher and every service it hosts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl ConfigError {
    /// Name of the environment variable this error refers to.
    pub fn var_name(&self) -> &str {
        match self {
            ConfigError::MissingVar(name) => name,
            ConfigError::InvalidValue { name, .. } => name,
        }
    }
}

/// Error codes carried in [`ErrorResponse::code`].
pub mod codes {
    pub const INVALID_REQUEST_BODY: &str = "INVALID_REQUEST_BODY";
    pub const INVALID_OPERATION: &str = "INVALID_OPERATION";
}

/// Error response for API clients.
///
/// Serializes as `{"error": "...", "code": "..."}`, with `details` only
/// present when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[serde(rename = "error")]
    pub message: String,
    /// Error code for programmatic handling
    #[serde(default)]
    pub code: String,
    /// Optional additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Add details to the error response.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn is_invalid_operation(&self) -> bool {
        self.code == codes::INVALID_OPERATION
    }
}
