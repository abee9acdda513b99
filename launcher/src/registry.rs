//! Service Registry
//!
//! Maps service names to their start procedures. The table is assembled
//! once through [`ServiceRegistryBuilder`] and is read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// Future returned by a start procedure
pub type EntrypointFuture = BoxFuture<'static, anyhow::Result<()>>;

/// Zero-argument start procedure for a service
pub type Entrypoint = Arc<dyn Fn() -> EntrypointFuture + Send + Sync>;

/// Immutable name → start procedure table
#[derive(Clone, Default)]
pub struct ServiceRegistry {
    entrypoints: BTreeMap<String, Entrypoint>,
}

impl ServiceRegistry {
    pub fn builder() -> ServiceRegistryBuilder {
        ServiceRegistryBuilder::default()
    }

    /// Look up the start procedure for a service
    pub fn get(&self, name: &str) -> Option<&Entrypoint> {
        self.entrypoints.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entrypoints.contains_key(name)
    }

    /// Registered service names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entrypoints.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entrypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrypoints.is_empty()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Builder for [`ServiceRegistry`]
#[derive(Default)]
pub struct ServiceRegistryBuilder {
    entrypoints: BTreeMap<String, Entrypoint>,
}

impl ServiceRegistryBuilder {
    /// Register a start procedure under `name`.
    ///
    /// Registering the same name twice keeps the later procedure.
    pub fn register<F, Fut>(mut self, name: impl Into<String>, start: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let name = name.into();
        let entrypoint: Entrypoint = Arc::new(move || start().boxed());
        if self.entrypoints.insert(name.clone(), entrypoint).is_some() {
            tracing::warn!(service = %name, "Service registered twice, keeping the last entrypoint");
        }
        self
    }

    pub fn build(self) -> ServiceRegistry {
        ServiceRegistry {
            entrypoints: self.entrypoints,
        }
    }
}

/// Registry of every service this binary can host
pub fn default_registry() -> ServiceRegistry {
    ServiceRegistry::builder()
        .register(calculator_service::SERVICE_NAME, calculator_service::entrypoint)
        .build()
}
