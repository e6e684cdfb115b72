//! Greeting endpoint
//!
//! Counts every request in the metrics registry and answers with a fixed
//! JSON message.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::handlers::AppState;

/// Message returned by the greeting endpoint
pub const GREETING: &str = "Hello, Flask with Prometheus!";

/// Greeting response body
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

/// Greeting handler
///
/// Increments the request counter, then returns `200 OK` with
/// `{"message": "Hello, Flask with Prometheus!"}`.
pub async fn handler(State(state): State<AppState>) -> Json<GreetingResponse> {
    state.metrics().increment();

    tracing::debug!(
        request_count = state.metrics().request_count(),
        "Greeting request counted"
    );

    Json(GreetingResponse { message: GREETING })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greeting_handler_returns_message() {
        let state = AppState::new().unwrap();
        let Json(body) = handler(State(state)).await;
        assert_eq!(body.message, "Hello, Flask with Prometheus!");
    }

    #[tokio::test]
    async fn test_greeting_handler_increments_counter() {
        let state = AppState::new().unwrap();

        handler(State(state.clone())).await;
        handler(State(state.clone())).await;

        assert_eq!(state.metrics().request_count(), 2);
    }

    #[test]
    fn test_greeting_response_serializes() {
        let json = serde_json::to_value(GreetingResponse { message: GREETING }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Hello, Flask with Prometheus!"})
        );
    }
}
