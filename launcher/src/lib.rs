//! Launcher library
//!
//! Hosts the services named in `TARGET_SERVICES` as concurrent tasks of a
//! single process. Services are looked up in a fixed [`ServiceRegistry`].

pub mod config;
pub mod registry;
pub mod runner;

pub use config::{parse_service_list, LauncherConfig};
pub use registry::{default_registry, Entrypoint, ServiceRegistry, ServiceRegistryBuilder};
pub use runner::{run, LaunchSummary};
