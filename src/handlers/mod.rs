//! HTTP request handlers for hello-metrics

use crate::error::AppResult;
use crate::metrics::Metrics;
use std::sync::Arc;

pub mod greeting;
pub mod metrics;

/// Application state shared across all handlers
///
/// Owns the metrics registry explicitly instead of reaching for a process
/// global. Cloning is a cheap Arc clone.
#[derive(Clone)]
pub struct AppState {
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Create a new AppState with a fresh metrics registry
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_metrics(Metrics::new()?))
    }

    /// Create an AppState around an existing metrics instance
    pub fn with_metrics(metrics: Metrics) -> Self {
        Self {
            metrics: Arc::new(metrics),
        }
    }

    /// Get reference to the metrics collector
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appstate_new_creates_state() {
        let state = AppState::new().unwrap();
        assert_eq!(state.metrics().request_count(), 0);
    }

    #[test]
    fn test_appstate_clone_shares_metrics() {
        let state = AppState::new().unwrap();
        let state2 = state.clone();

        state2.metrics().increment();
        assert_eq!(state.metrics().request_count(), 1);
    }

    #[test]
    fn test_with_metrics_uses_given_registry() {
        let metrics = Metrics::new().unwrap();
        metrics.increment();

        let state = AppState::with_metrics(metrics.clone());
        state.metrics().increment();

        assert_eq!(metrics.request_count(), 2);
    }
}
