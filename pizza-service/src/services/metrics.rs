//! Metrics collection for pizza-service.
//!
//! HTTP request metrics come from the shared middleware; this module adds the
//! classifier counters and owns the Prometheus recorder.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder. Safe to call more than once.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            tracing::warn!(error = %e, "Prometheus recorder already installed, metrics will be empty");
            PrometheusBuilder::new().build_recorder().handle()
        }
    });
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record a completed classification.
pub fn record_classification(is_pizza: bool) {
    let verdict = if is_pizza { "pizza" } else { "not_pizza" };
    counter!("pizza_classifications_total", "verdict" => verdict).increment(1);
}

/// Record a failed provider call.
pub fn record_upstream_failure(provider: &'static str) {
    counter!("pizza_upstream_failures_total", "provider" => provider).increment(1);
}
