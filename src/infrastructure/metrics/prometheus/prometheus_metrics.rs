//! Prometheus metrics implementation.
//!
//! Concrete implementation of the `Metrics` trait on top of the global
//! registry owned by the `metrics` crate. Counter updates go through the
//! sibling `counters` module; rendering goes through the recorder handle
//! installed in `recorder.rs`.

use crate::domain::Metrics;

/// Prometheus-based metrics implementation.
///
/// Intentionally stateless: all counters live in the global `metrics`
/// registry and the process-wide `PrometheusHandle` does the rendering.
pub struct PrometheusMetrics {
    // Empty - uses global metrics registry pattern
}

impl PrometheusMetrics {
    pub fn new() -> Self {
        tracing::info!("Creating Prometheus metrics");
        PrometheusMetrics {}
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        super::render_metrics()
    }

    fn record_play_recorded(&self) {
        tracing::debug!("Recording game play event");
        super::increment_play_recorded();
    }

    fn record_item_quantity_updated(&self) {
        tracing::debug!("Recording item quantity update");
        super::increment_item_quantity_updated();
    }

    fn record_stats_reset(&self) {
        tracing::debug!("Recording game stats reset");
        super::increment_stats_reset();
    }
}
