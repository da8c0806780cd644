//! Prometheus metrics for monitoring server health and activity.
//!
//! This module provides metrics collection and export for scraping by
//! monitoring systems. The exporter is opt-in: it binds only when a
//! metrics address is configured.
//!
//! # Metrics Categories
//!
//! - **HTTP Metrics**: Request counts, duration, status codes
//! - **Domain Metrics**: Players registered, tournaments created, games recorded
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use rr_server::metrics;
//! use std::net::SocketAddr;
//!
//! // Initialize metrics exporter
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! // Record HTTP request
//! metrics::http_requests_total("POST", "/players", 201);
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Sets up a Prometheus scrape endpoint on the specified address.
/// Metrics will be available at `http://<addr>/metrics`.
///
/// # Arguments
///
/// - `addr`: Address to bind the metrics server to (e.g., `0.0.0.0:9090`)
///
/// # Returns
///
/// Result indicating success or error message
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
///
/// Increments the total HTTP request counter with method, path, and status labels.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Domain Metrics
// ============================================================================

/// Increment registered players counter.
pub fn players_registered_total() {
    metrics::counter!("players_registered_total").increment(1);
}

/// Increment created tournaments counter.
pub fn tournaments_created_total() {
    metrics::counter!("tournaments_created_total").increment(1);
}

/// Increment roster additions counter.
pub fn participants_added_total() {
    metrics::counter!("participants_added_total").increment(1);
}

/// Increment recorded games counter.
pub fn games_recorded_total() {
    metrics::counter!("games_recorded_total").increment(1);
}
