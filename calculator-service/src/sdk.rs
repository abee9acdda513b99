//! Calculator SDK
//!
//! Callers use [`CalculatorSdk`] without caring where the calculation runs.
//! `Local` calls the service function directly (InProcess), `Http` posts the
//! request to a running calculator endpoint. Both return the same
//! [`CalculatorError`] variants for the same failures.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use error::{ConfigError, ErrorResponse};
use reqwest::StatusCode;

use crate::config::{SDK_MODE_VAR, SERVICE_URL_VAR};
use crate::errors::CalculatorError;
use crate::models::{CalculationRequest, CalculationResponse};
use crate::service;

/// Calculator capability shared by all SDK modes.
#[async_trait]
pub trait CalculatorApi: Send + Sync {
    /// Perform a calculation
    async fn calculate(&self, req: &CalculationRequest) -> Result<f64, CalculatorError>;
}

/// Which implementation an SDK uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SdkMode {
    #[default]
    Local,
    Http,
}

impl SdkMode {
    /// Parse a mode tag. `http` and `remote` select [`SdkMode::Http`];
    /// anything else falls back to [`SdkMode::Local`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "http" | "remote" => SdkMode::Http,
            _ => SdkMode::Local,
        }
    }

    /// Read the mode from `CALCULATOR_SDK_MODE`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the mode from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup(SDK_MODE_VAR)
            .map(|tag| Self::from_tag(&tag))
            .unwrap_or_default()
    }
}

impl fmt::Display for SdkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkMode::Local => f.write_str("local"),
            SdkMode::Http => f.write_str("http"),
        }
    }
}

/// InProcess calculator
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalCalculator;

#[async_trait]
impl CalculatorApi for LocalCalculator {
    async fn calculate(&self, req: &CalculationRequest) -> Result<f64, CalculatorError> {
        service::calculate(req)
    }
}

#[derive(Debug, Clone)]
enum BaseUrl {
    /// Read from this environment variable on every call
    Env(String),
    Fixed(String),
}

/// Calculator reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpCalculator {
    base_url: BaseUrl,
    client: reqwest::Client,
}

impl HttpCalculator {
    /// Resolve the base URL from `CALCULATOR_SERVICE_URL` at call time
    pub fn new() -> Self {
        Self::from_env_var(SERVICE_URL_VAR)
    }

    /// Resolve the base URL from the given environment variable at call time
    pub fn from_env_var(var: impl Into<String>) -> Self {
        Self {
            base_url: BaseUrl::Env(var.into()),
            client: reqwest::Client::new(),
        }
    }

    /// Use a fixed base URL
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            base_url: BaseUrl::Fixed(url.into()),
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (timeouts, proxies, TLS settings)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn resolve_base_url(&self) -> Result<String, ConfigError> {
        let url = match &self.base_url {
            BaseUrl::Env(var) => std::env::var(var)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingVar(var.clone()))?,
            BaseUrl::Fixed(url) => url.clone(),
        };
        Ok(url.trim().trim_end_matches('/').to_string())
    }
}

impl Default for HttpCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CalculatorApi for HttpCalculator {
    async fn calculate(&self, req: &CalculationRequest) -> Result<f64, CalculatorError> {
        let base_url = self.resolve_base_url()?;
        let url = format!("{}/calculator", base_url);

        tracing::debug!("Calling calculator service at {}", url);

        let response = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(CalculatorError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(CalculatorError::Transport)?;

        if status != StatusCode::OK {
            // Validation failures come back as 400 with a coded error body
            if status == StatusCode::BAD_REQUEST {
                if let Ok(err) = serde_json::from_slice::<ErrorResponse>(&body) {
                    if err.is_invalid_operation() {
                        return Err(CalculatorError::InvalidOperation(err.message));
                    }
                }
            }
            return Err(CalculatorError::Remote {
                status: status.as_u16(),
            });
        }

        let decoded: CalculationResponse = serde_json::from_slice(&body)?;
        Ok(decoded.result)
    }
}

/// Calculator SDK
///
/// Built once per mode and immutable afterwards. Cloning is cheap.
#[derive(Clone)]
pub struct CalculatorSdk {
    mode: SdkMode,
    api: Arc<dyn CalculatorApi>,
}

impl CalculatorSdk {
    /// Create an SDK for the given mode
    pub fn new(mode: SdkMode) -> Self {
        let api: Arc<dyn CalculatorApi> = match mode {
            SdkMode::Local => Arc::new(LocalCalculator),
            SdkMode::Http => Arc::new(HttpCalculator::new()),
        };
        Self { mode, api }
    }

    /// Create an SDK in the mode named by `CALCULATOR_SDK_MODE`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create an SDK in the mode named by `CALCULATOR_SDK_MODE` in `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mode = SdkMode::from_lookup(lookup);
        tracing::debug!("Calculator SDK mode: {}", mode);
        Self::new(mode)
    }

    /// Create an HTTP SDK around a specific client
    pub fn http(calculator: HttpCalculator) -> Self {
        Self {
            mode: SdkMode::Http,
            api: Arc::new(calculator),
        }
    }

    pub fn mode(&self) -> SdkMode {
        self.mode
    }

    /// Perform a calculation
    pub async fn calculate(&self, req: &CalculationRequest) -> Result<f64, CalculatorError> {
        self.api.calculate(req).await
    }
}

impl fmt::Debug for CalculatorSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorSdk")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
