use std::net::SocketAddr;

use error::ConfigError;
use serde::{Deserialize, Serialize};

/// Listen address for the calculator HTTP endpoint
pub const ADDR_VAR: &str = "CALCULATOR_ADDR";

/// Base URL used by the HTTP SDK
pub const SERVICE_URL_VAR: &str = "CALCULATOR_SERVICE_URL";

/// SDK mode selector (`local` or `http`)
pub const SDK_MODE_VAR: &str = "CALCULATOR_SDK_MODE";

/// Calculator service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup(ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            config.listen_addr = addr.trim().to_string();
        }

        config
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: ADDR_VAR.to_string(),
                value: self.listen_addr.clone(),
            })
    }
}
