use error::ConfigError;

/// Comma-separated list of services to start
pub const TARGET_SERVICES_VAR: &str = "TARGET_SERVICES";

/// Launcher configuration
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Raw `TARGET_SERVICES` value
    pub target_services: String,

    /// Launcher version
    pub version: String,
}

impl LauncherConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let target_services = lookup(TARGET_SERVICES_VAR)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingVar(TARGET_SERVICES_VAR.to_string()))?;

        Ok(Self {
            target_services,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Requested service names, trimmed, blanks dropped, order kept
    pub fn requested_services(&self) -> Vec<String> {
        parse_service_list(&self.target_services)
    }
}

/// Split a comma-separated service list.
///
/// Whitespace around names is ignored and blank entries are dropped.
/// Duplicates are kept.
pub fn parse_service_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
