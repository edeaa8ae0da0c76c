// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

use std::env;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod reset;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_memory_store, // ---
    create_noop_metrics,
    create_prom_metrics,
    create_redis_store,
};

// Publicly expose the reset operation and its scheduler
pub use reset::{reset_game_stats, spawn_daily_reset, until_next_midnight_utc};

use domain::{CounterStorePtr, MetricsPtr};
use handlers::{
    get_game_play_count, get_item_quantity, health_check, metrics_handler,
    record_item_quantity, record_player_play_count, root_handler, say_hello,
};

/// A fully wired application.
///
/// `create_app` hands back the router together with the store, metrics and
/// configuration behind it, so `main` can bind the listener and run the
/// daily reset against the same store instance the handlers use.
pub struct App {
    pub router: Router,
    pub store: CounterStorePtr,
    pub metrics: MetricsPtr,
    pub config: AppConfig,
}

/// Wire up the application from environment variables.
///
/// Loads configuration, selects the counter store and metrics
/// implementations, and builds the router with every endpoint attached.
pub fn create_app() -> Result<App> {
    // ---
    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    // Determine metrics implementation from environment
    let metrics_type = env::var("GAME_STATS_METRICS_TYPE").unwrap_or_else(|_| "noop".to_string());
    let metrics = if metrics_type == "prom" {
        create_prom_metrics()?
    } else {
        create_noop_metrics()?
    };

    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    // Create the counter store selected by configuration
    let store = match config.store.kind {
        StoreKind::Redis => {
            let url = config.store.redis_url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("Missing required configuration: GAME_STATS_REDIS_URL")
            })?;
            create_redis_store(url)?
        }
        StoreKind::Memory => create_memory_store(),
    };

    // Build application state with all dependencies
    let app_state = AppState::new(
        store.clone(),
        metrics.clone(),
        config.server.expose_store_errors,
    );

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/sayHello", get(say_hello))
        .route("/recordPlayerPlayCount", post(record_player_play_count))
        .route("/getGamePlayCount", get(get_game_play_count))
        .route("/recodItemQuantity", post(record_item_quantity))
        .route("/getItemQuantity", get(get_item_quantity))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(app_state);

    Ok(App {
        router,
        store,
        metrics,
        config,
    })
}

/// Build the HTTP router with store and metrics implementations determined
/// by environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    Ok(create_app()?.router)
}
