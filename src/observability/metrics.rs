//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): navigations by outcome
//!   (`render`, `redirect`, `not_found`, `outside_base`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_resolution(outcome: &'static str) {
    metrics::counter!("router_resolutions_total", "outcome" => outcome).increment(1);
}
