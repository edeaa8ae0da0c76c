use anyhow::Result;
use tracing::info;

use game_stats_api::{create_app, spawn_daily_reset, App};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present, then initialize tracing subscriber to log to stdout
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    tracing::info!("Starting game stats server...");

    let App {
        router,
        store,
        metrics,
        config,
    } = create_app()?;

    // The reset loop runs against the same store instance the handlers use.
    if config.reset.enabled {
        spawn_daily_reset(store, metrics);
    } else {
        info!("daily reset task disabled; counters persist until reset externally");
    }

    let endpoint = config.server.bind_addr;

    info!("Starting at endpoint:{}", endpoint);
    info!(
        "Starting Game Stats API server v{}...",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(&endpoint).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
