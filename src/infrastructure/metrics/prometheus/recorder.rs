use anyhow::Context;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Once, OnceLock};

static INSTALL: Once = Once::new();
static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder globally and keep its handle.
///
/// The recorder is process-wide and the application (and the test suite) may
/// build more than one router per process, so only the first call installs;
/// every later call is a no-op.
pub fn init_metrics() -> anyhow::Result<()> {
    // ---
    let mut install_result = Ok(());

    INSTALL.call_once(|| {
        // ---
        install_result = PrometheusBuilder::new()
            .install_recorder()
            .context("failed to install Prometheus recorder")
            .map(|handle| {
                let _ = HANDLE.set(handle);
            });
    });

    install_result
}

/// Render the current metrics in Prometheus text format.
///
/// Empty until the recorder has been installed.
pub fn render_metrics() -> String {
    // ---
    HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}
