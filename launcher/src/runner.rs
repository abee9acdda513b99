//! Service runner
//!
//! Starts every requested service as its own tokio task and waits for all
//! of them to return.

use tokio::task::JoinSet;

use crate::registry::ServiceRegistry;

/// What happened during a launch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchSummary {
    /// Services that were scheduled, in request order
    pub started: Vec<String>,
    /// Requested names with no registered entrypoint
    pub unmatched: Vec<String>,
    /// Services whose entrypoint returned an error
    pub failed: Vec<String>,
}

/// Start the requested services and wait until every started one returns.
///
/// Names are trimmed and blanks skipped. Unknown names are logged and
/// skipped without affecting the others. A panic inside a service is
/// re-raised here.
pub async fn run<S: AsRef<str>>(requested: &[S], registry: &ServiceRegistry) -> LaunchSummary {
    let mut summary = LaunchSummary::default();
    let mut tasks = JoinSet::new();

    for name in requested {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }

        let Some(entrypoint) = registry.get(name) else {
            tracing::warn!(service = %name, "No entrypoint found for service: {}", name);
            summary.unmatched.push(name.to_string());
            continue;
        };

        tracing::info!(service = %name, "Starting service: {}", name);
        summary.started.push(name.to_string());

        let entrypoint = entrypoint.clone();
        let name = name.to_string();
        tasks.spawn(async move {
            let result = entrypoint().await;
            match &result {
                Ok(()) => tracing::info!(service = %name, "Service finished: {}", name),
                Err(e) => tracing::error!(service = %name, "Service finished with error: {:#}", e),
            }
            (name, result.is_ok())
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, true)) => {}
            Ok((name, false)) => summary.failed.push(name),
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => tracing::error!("Service task ended unexpectedly: {}", e),
        }
    }

    tracing::info!("All services have finished.");
    summary
}
