//! Metrics backends: a Prometheus recorder for production and a no-op
//! recorder for tests and local runs.

pub mod noop;
pub mod prometheus;

// Re-export the factory functions for easy access
pub use noop::create as create_noop_metrics;
pub use prometheus::create as create_prom_metrics;
