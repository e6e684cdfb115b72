//! Prometheus metrics collection for hello-metrics
//!
//! Holds the request counter incremented by the greeting endpoint and renders
//! the registry for the `/metrics` endpoint.

use prometheus::{IntCounter, Registry};
use std::sync::Arc;

use crate::exposition;

/// Name of the greeting request counter
pub const REQUEST_COUNT_NAME: &str = "flask_request_count";

/// Help text of the greeting request counter
pub const REQUEST_COUNT_HELP: &str = "Total number of requests to Flask app";

/// Metrics collector
///
/// Each instance owns its own Prometheus registry, so independent instances
/// never observe each other's counts. Cloning shares the underlying registry
/// and counter.
#[derive(Clone)]
pub struct Metrics {
    pub registry: Arc<Registry>,
    request_count: IntCounter,
}

impl Metrics {
    /// Create a new Metrics instance
    ///
    /// Registers the request counter with a new Prometheus registry.
    ///
    /// # Errors
    ///
    /// Returns an error if metric registration fails.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let request_count = IntCounter::new(REQUEST_COUNT_NAME, REQUEST_COUNT_HELP)?;
        registry.register(Box::new(request_count.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            request_count,
        })
    }

    /// Count one greeting request
    ///
    /// The increment is a single atomic add; concurrent callers never lose
    /// updates.
    pub fn increment(&self) {
        self.request_count.inc();
    }

    /// Current value of the request counter
    pub fn request_count(&self) -> u64 {
        self.request_count.get()
    }

    /// Render the registry in the text exposition format
    pub fn render(&self) -> String {
        let metric_families = self.registry.gather();

        tracing::debug!(
            metric_family_count = metric_families.len(),
            "Encoding metrics to Prometheus text format"
        );

        exposition::encode(&metric_families)
    }
}
