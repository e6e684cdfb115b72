//! Concurrent greeting requests must all be counted

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use hello_metrics::{handlers::AppState, server::build_router};
use tower::ServiceExt;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_greetings_lose_no_updates() {
    const REQUESTS: usize = 100;

    let state = AppState::new().unwrap();
    let app = build_router(state.clone());

    let handles: Vec<_> = (0..REQUESTS)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
                    .await
                    .unwrap()
                    .status()
            })
        })
        .collect();

    let statuses = futures::future::join_all(handles).await;

    for (idx, status) in statuses.into_iter().enumerate() {
        assert_eq!(
            status.unwrap(),
            StatusCode::OK,
            "greeting {} should succeed",
            idx
        );
    }

    assert_eq!(state.metrics().request_count(), REQUESTS as u64);
    assert!(
        state
            .metrics()
            .render()
            .contains("flask_request_count 100.0")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_scrapes_interleaved_with_greetings_never_go_backwards() {
    let state = AppState::new().unwrap();
    let app = build_router(state.clone());

    let writers: Vec<_> = (0..50)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
                    .await
                    .unwrap();
            })
        })
        .collect();

    let mut last_seen = 0;
    for _ in 0..20 {
        let current = state.metrics().request_count();
        assert!(current >= last_seen, "counter went from {} to {}", last_seen, current);
        last_seen = current;
        tokio::task::yield_now().await;
    }

    futures::future::join_all(writers).await;
    assert_eq!(state.metrics().request_count(), 50);
}
