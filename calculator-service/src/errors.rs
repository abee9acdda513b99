//! Calculator errors
//!
//! One error type for both SDK modes, so callers handle local and remote
//! calls identically.

use error::ConfigError;
use thiserror::Error;

pub const DIVISION_BY_ZERO: &str = "division by zero is not allowed";
pub const INVALID_OPERATION: &str = "invalid operation specified";
pub const NON_FINITE_RESULT: &str = "result is not a finite number";

/// Calculator errors
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("{0}")]
    InvalidOperation(String),

    #[error("failed to call calculator service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("calculator service returned non-200 status: {status}")]
    Remote { status: u16 },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CalculatorError {
    pub fn division_by_zero() -> Self {
        CalculatorError::InvalidOperation(DIVISION_BY_ZERO.to_string())
    }

    pub fn invalid_operation() -> Self {
        CalculatorError::InvalidOperation(INVALID_OPERATION.to_string())
    }

    pub fn non_finite_result() -> Self {
        CalculatorError::InvalidOperation(NON_FINITE_RESULT.to_string())
    }

    /// True for request-semantics errors (unknown operation, divide by zero)
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, CalculatorError::InvalidOperation(_))
    }
}
