//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` contains the
//! counter services, the counter store they run against, the metrics
//! implementation, and the error-exposure policy.
//!
//! The state is designed to be cheaply cloneable (everything heavy sits
//! behind an `Arc`) so it can be passed efficiently to each request handler
//! without expensive copying of resources.

use crate::domain::{CounterStorePtr, ItemQuantityService, MetricsPtr, PlayCountService};

/// Shared application state passed to all Axum handlers.
///
/// This struct serves as the Dependency Injection container for the
/// application: handlers depend on the service and store abstractions, never
/// on a concrete backend. Built once at startup, never mutated afterwards,
/// and cloned by Axum for each incoming request.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Counter store backing every service. Kept directly for the health
    /// endpoint's liveness probe and for wiring that bypasses the services.
    store: CounterStorePtr,

    /// Metrics implementation for recording application events.
    ///
    /// Either Prometheus-backed (production) or no-op (testing/development).
    metrics: MetricsPtr,

    /// Global play counter operations.
    play_counts: PlayCountService,

    /// Per-item quantity operations.
    item_quantities: ItemQuantityService,

    /// Whether 500 bodies include the underlying store error text.
    expose_store_errors: bool,
}

impl AppState {
    // ---

    pub fn new(store: CounterStorePtr, metrics: MetricsPtr, expose_store_errors: bool) -> Self {
        // ---
        AppState {
            play_counts: PlayCountService::new(store.clone()),
            item_quantities: ItemQuantityService::new(store.clone()),
            store,
            metrics,
            expose_store_errors,
        }
    }

    /// Get a reference to the play-count service.
    pub(crate) fn play_counts(&self) -> &PlayCountService {
        // ---
        &self.play_counts
    }

    /// Get a reference to the item-quantity service.
    pub(crate) fn item_quantities(&self) -> &ItemQuantityService {
        // ---
        &self.item_quantities
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get a reference to the underlying counter store.
    pub(crate) fn store(&self) -> &CounterStorePtr {
        // ---
        &self.store
    }

    /// Whether 500 bodies may carry store error detail.
    pub(crate) fn expose_store_errors(&self) -> bool {
        // ---
        self.expose_store_errors
    }
}
