//! Probe metrics for latency tracking and monitoring.
//!
//! Metrics are recorded through the `metrics` facade; wiring an exporter
//! is left to the embedding environment.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Store probe latency metric name.
pub const METRIC_PROBE_LATENCY: &str = "store_probe_latency_ms";
/// Store probe results counter metric name.
pub const METRIC_PROBE_RESULTS: &str = "store_probe_results_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_PROBE_LATENCY,
        "Store liveness probe latency in milliseconds"
    );

    describe_counter!(
        METRIC_PROBE_RESULTS,
        "Total number of store probes by result"
    );

    debug!("Metrics initialized");
}

/// Record store probe latency.
pub fn record_probe_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_PROBE_LATENCY).record(latency_ms);
}

/// Increment the probe results counter for the given outcome.
pub fn inc_probe_result(result: &str) {
    counter!(METRIC_PROBE_RESULTS, "result" => result.to_string()).increment(1);
}
