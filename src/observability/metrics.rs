//! Metrics collection and exposition.
//!
//! # Metrics
//! - `notes_requests_total` (counter): requests by method, route, status
//! - `notes_request_duration_seconds` (histogram): handler latency
//! - `notes_store_errors_total` (counter): swallowed filesystem failures by operation

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram, Label};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Prometheus exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let labels = vec![
        Label::new("method", method.to_string()),
        Label::new("route", route.to_string()),
        Label::new("status", status.to_string()),
    ];
    counter!("notes_requests_total", labels.clone()).increment(1);
    histogram!("notes_request_duration_seconds", labels).record(start.elapsed().as_secs_f64());
}

/// Record a filesystem failure that was logged and swallowed.
pub fn record_store_error(operation: &'static str) {
    counter!("notes_store_errors_total", "operation" => operation).increment(1);
}
