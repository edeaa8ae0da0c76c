use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

mod common;

// NOTE: Metrics use a global Prometheus registry.
// Tests are serial to avoid double-registration races.
// Can be removed once metrics registry is injectable per test.

#[tokio::test]
#[serial]
async fn metrics_endpoint_with_prometheus() {
    // ---
    // Set environment to use Prometheus metrics for this test
    common::setup_test_env();
    std::env::set_var("GAME_STATS_METRICS_TYPE", "prom");

    let server = common::TestServer::new().await;

    // First, hit the counter endpoints to generate metrics
    let _ = server
        .client
        .post(server.url("/recordPlayerPlayCount"))
        .send()
        .await
        .unwrap();
    let _ = server
        .client
        .post(server.url("/recodItemQuantity"))
        .json(&json!({"itemId": "sword", "amount": 2}))
        .send()
        .await
        .unwrap();

    // Give metrics a moment to be recorded
    sleep(Duration::from_millis(50)).await;

    // Now check the metrics endpoint
    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();

    // Check status before consuming the response
    assert!(
        res.status().is_success(),
        "Metrics endpoint should return success"
    );

    let body = res.text().await.unwrap();
    println!("Metrics response body: '{body}'");

    // The counters recorded above must show up in the rendered output
    assert!(
        body.contains("game_plays_recorded_total"),
        "Play counter should be rendered"
    );
    assert!(
        body.contains("item_quantity_updates_total"),
        "Item update counter should be rendered"
    );

    // Clean up environment variable
    std::env::remove_var("GAME_STATS_METRICS_TYPE");
}

#[tokio::test]
#[serial]
async fn metrics_endpoint_with_noop() {
    // ---
    // Set environment to use noop metrics (or don't set it)
    common::setup_test_env();
    std::env::set_var("GAME_STATS_METRICS_TYPE", "noop");

    let server = common::TestServer::new().await;

    // Hit some endpoints
    let _ = server
        .client
        .post(server.url("/recordPlayerPlayCount"))
        .send()
        .await
        .unwrap();
    let _ = server.client.get(server.url("/")).send().await.unwrap();

    // Check the metrics endpoint
    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();

    // Should still return success even with noop metrics
    assert!(
        res.status().is_success(),
        "Metrics endpoint should return success even with noop"
    );

    let body = res.text().await.unwrap();
    println!("Noop metrics response: '{body}'");

    // Clean up environment variable
    std::env::remove_var("GAME_STATS_METRICS_TYPE");
}

#[tokio::test]
#[serial]
async fn metrics_endpoint_survives_load() {
    // ---
    common::setup_test_env();
    std::env::set_var("GAME_STATS_METRICS_TYPE", "prom");

    let server = Arc::new(common::TestServer::new().await);

    // Generate some load
    let futures = (0..20).map(|i| {
        let server = Arc::clone(&server);
        async move {
            match i % 3 {
                0 => {
                    server
                        .client
                        .post(server.url("/recordPlayerPlayCount"))
                        .send()
                        .await
                }
                1 => server.client.get(server.url("/health")).send().await,
                _ => server.client.get(server.url("/metrics")).send().await,
            }
        }
    });

    let responses = futures::future::join_all(futures).await;

    // All requests should succeed
    for (i, response) in responses.into_iter().enumerate() {
        // ---

        let response = response.unwrap_or_else(|_| panic!("Request {i} should succeed"));
        assert!(
            response.status().is_success(),
            "Request {i} should return success"
        );
    }

    // Now check metrics
    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let body = res.text().await.unwrap();
    assert!(!body.is_empty());

    std::env::remove_var("GAME_STATS_METRICS_TYPE");
}

#[tokio::test]
#[serial]
async fn metrics_content_type_is_correct() {
    // ---
    common::setup_test_env();
    std::env::set_var("GAME_STATS_METRICS_TYPE", "prom");

    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    // Prometheus text exposition format
    let content_type = res
        .headers()
        .get("content-type")
        .expect("Metrics response should carry a content type");
    assert_eq!(
        content_type.to_str().unwrap(),
        "text/plain; version=0.0.4; charset=utf-8"
    );

    std::env::remove_var("GAME_STATS_METRICS_TYPE");
}
