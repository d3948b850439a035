//! HTTP layer powered by axum.
//!
//! Routes:
//! - `GET /` index page from the static directory
//! - `GET /static/*` static assets
//! - `GET /api/health` liveness
//! - `GET /api/info` API metadata
//! - `POST /predict` text in, fake probability and label out

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.static_dir());

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/info", get(handlers::info))
        .route("/predict", post(handlers::predict))
        .nest_service("/static", static_files)
        // 文章長度不設上限
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn serve<C: ConfigProvider>(config: &C, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

pub async fn serve_with_shutdown<S>(listener: TcpListener, state: AppState, signal: S) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);
    tracing::info!("📁 Serving static files from {}", state.static_dir().display());

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received, draining connections");
}
