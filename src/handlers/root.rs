use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Welcome to the Game Stats API 👋
Version: {version}

Available endpoints:
  - GET  /sayHello                - Connectivity check, replies "Hello!"
  - POST /recordPlayerPlayCount   - Add one play to the global counter
  - GET  /getGamePlayCount        - Read the global play counter
  - POST /recodItemQuantity       - Adjust an item's quantity by a signed amount
  - GET  /getItemQuantity?itemId= - Read an item's quantity
  - GET  /health                  - Light health check
  - GET  /health?mode=full        - Full health check (includes the counter store)
  - GET  /metrics                 - Prometheus metrics

Counters are reset daily at 00:00 UTC.
"#
    )
}

/// Handler for the greeting probe (GET /sayHello).
///
/// Logs a single line and replies with a fixed body, useful for smoke
/// testing a deployment without touching the counter store.
pub async fn say_hello() -> impl IntoResponse {
    // ---
    tracing::info!("hello");
    "Hello!"
}
