//! Round-robin tournament REST server.
//!
//! Exposes the `round_robin` library over HTTP using axum, with
//! environment-driven configuration, request correlation, and optional
//! Prometheus metrics export.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
