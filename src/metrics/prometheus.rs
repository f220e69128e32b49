use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus HTTP exporter.
/// After this call, any metrics recorded via the `metrics` crate
/// macros (counter!, histogram!) are automatically exported at /metrics.
pub fn init_metrics_server(port: u16) {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .expect("failed to start Prometheus metrics server");
}

// ── Refresh metrics ──────────────────────────────────────────────

pub fn record_refresh_success(cycle_ms: f64) {
    counter!("refresh_cycles_total", "outcome" => "success").increment(1);
    histogram!("refresh_cycle_duration_ms").record(cycle_ms);
}

pub fn record_refresh_failure(category: &str) {
    counter!("refresh_cycles_total", "outcome" => "failure").increment(1);
    counter!("refresh_failures_total", "category" => category.to_string()).increment(1);
}
