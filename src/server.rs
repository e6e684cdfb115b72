//! HTTP server wiring
//!
//! Builds the route table and runs it on a TCP listener until shutdown.

use axum::{Router, routing::get};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::handlers::{self, AppState};

/// Build the application router
///
/// | Method | Path       | Handler                      |
/// |--------|------------|------------------------------|
/// | GET    | `/`        | [`handlers::greeting::handler`] |
/// | GET    | `/metrics` | [`handlers::metrics::handler`]  |
///
/// Unknown paths answer 404 and other methods on these paths answer 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::greeting::handler))
        .route("/metrics", get(handlers::metrics::handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the application on an already bound listener
///
/// Returns once `shutdown` resolves and in-flight requests have finished.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::Server)
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// Fails before serving anything if the address cannot be bound.
pub async fn run(config: &Config) -> AppResult<()> {
    let addr = config.socket_addr()?;
    let state = AppState::new()?;

    let listener = TcpListener::bind(addr).await.map_err(|source| {
        tracing::error!(addr = %addr, error = %source, "Failed to bind listener");
        AppError::Bind {
            addr: addr.to_string(),
            source,
        }
    })?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Metrics available at http://{}/metrics", addr);

    serve(listener, state, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
