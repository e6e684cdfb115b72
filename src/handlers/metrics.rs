//! Prometheus metrics endpoint
//!
//! Exposes metrics in Prometheus text format for scraping.

use axum::{
    extract::State,
    http::{StatusCode, header},
};

use crate::exposition::CONTENT_TYPE;
use crate::handlers::AppState;

/// Metrics handler for Prometheus scraping
///
/// Reading the metrics does not count as a greeting request.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/metrics
/// # HELP flask_request_count Total number of requests to Flask app
/// # TYPE flask_request_count counter
/// flask_request_count 3.0
/// ```
pub async fn handler(
    State(state): State<AppState>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let body = state.metrics().render();
    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body)
}
