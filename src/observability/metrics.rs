//! Metrics collection and exposition.
//!
//! # Metrics
//! - `directory_requests_total` (counter): requests by method, path, status
//! - `directory_request_duration_seconds` (histogram): latency distribution
//! - `directory_contacts` (gauge): current number of stored contacts
//!
//! # Design Decisions
//! - Macros are no-ops until a recorder is installed, so recording is
//!   unconditional and the exporter is opt-in

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own scrape address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("directory_requests_total", &labels).increment(1);
    metrics::histogram!("directory_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Update the stored-contacts gauge after a successful register/delete.
pub fn set_contact_count(count: usize) {
    metrics::gauge!("directory_contacts").set(count as f64);
}
