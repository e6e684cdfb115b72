//! Routing tests: unknown paths and wrong methods

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use hello_metrics::{handlers::AppState, server::build_router};
use tower::ServiceExt;

fn create_test_app() -> (Router, AppState) {
    let state = AppState::new().expect("AppState::new should succeed");
    (build_router(state.clone()), state)
}

async fn status_of(app: Router, method: Method, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_unknown_path_returns_not_found() {
    let (app, _) = create_test_app();
    assert_eq!(
        status_of(app, Method::GET, "/nonexistent").await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_nested_metrics_path_returns_not_found() {
    let (app, _) = create_test_app();
    assert_eq!(
        status_of(app, Method::GET, "/metrics/extra").await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_post_to_greeting_returns_method_not_allowed() {
    let (app, state) = create_test_app();

    assert_eq!(
        status_of(app, Method::POST, "/").await,
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        state.metrics().request_count(),
        0,
        "rejected methods must not be counted"
    );
}

#[tokio::test]
async fn test_delete_to_metrics_returns_method_not_allowed() {
    let (app, _) = create_test_app();
    assert_eq!(
        status_of(app, Method::DELETE, "/metrics").await,
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn test_unknown_path_is_not_counted() {
    let (app, state) = create_test_app();

    status_of(app, Method::GET, "/favicon.ico").await;

    assert_eq!(state.metrics().request_count(), 0);
}
