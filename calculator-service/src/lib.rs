//! Calculator Service
//!
//! This crate provides the calculator capability.
//! It exposes the calculation both InProcess (through [`CalculatorSdk`] in
//! local mode) and over HTTP (`POST /calculator`), and ships the SDK that
//! reaches either one through the same interface.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod sdk;
pub mod service;

pub use config::CalculatorConfig;
pub use errors::CalculatorError;
pub use models::{CalculationRequest, CalculationResponse, Operation};
pub use sdk::{CalculatorApi, CalculatorSdk, HttpCalculator, LocalCalculator, SdkMode};
pub use service::calculate;

/// Name the launcher registers this service under
pub const SERVICE_NAME: &str = "calculator-svc";

/// Start procedure for the launcher.
///
/// Reads [`CalculatorConfig`] from the environment and serves HTTP until the
/// listener fails.
pub async fn entrypoint() -> anyhow::Result<()> {
    let config = CalculatorConfig::from_env();
    api::serve(&config).await
}
