//! Calculator service
//!
//! The arithmetic itself. Every SDK mode ends up here, either directly or
//! behind the HTTP endpoint.

use crate::errors::CalculatorError;
use crate::models::{CalculationRequest, Operation};

/// Perform a calculation
///
/// Results that overflow to ±infinity fail with `InvalidOperation`, the
/// same as over HTTP where JSON has no value for them.
pub fn calculate(req: &CalculationRequest) -> Result<f64, CalculatorError> {
    let operation: Operation = req
        .operation
        .parse()
        .map_err(|_| CalculatorError::invalid_operation())?;

    let result = match operation {
        Operation::Add => req.a + req.b,
        Operation::Subtract => req.a - req.b,
        Operation::Multiply => req.a * req.b,
        Operation::Divide => {
            if req.b == 0.0 {
                return Err(CalculatorError::division_by_zero());
            }
            req.a / req.b
        }
    };

    if !result.is_finite() {
        return Err(CalculatorError::non_finite_result());
    }
    Ok(result)
}
