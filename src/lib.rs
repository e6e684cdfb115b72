//! hello-metrics - greeting HTTP service with a Prometheus request counter
//!
//! `GET /` answers with a fixed JSON greeting and counts the request;
//! `GET /metrics` exposes the count in the Prometheus text format.

pub mod cli;
pub mod config;
pub mod error;
pub mod exposition;
pub mod handlers;
pub mod metrics;
pub mod server;
pub mod telemetry;
