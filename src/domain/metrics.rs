use std::sync::Arc;

/// Abstraction for application metrics (counters).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Record a "game play recorded" event.
    fn record_play_recorded(&self);

    /// Record an "item quantity updated" event.
    fn record_item_quantity_updated(&self);

    /// Record a completed game-stats reset.
    fn record_stats_reset(&self);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
