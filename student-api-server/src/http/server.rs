//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - JSON 404 fallback
//! - Graceful shutdown on SIGTERM/Ctrl+C, bounded by a grace period

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use super::error::ApiError;
use super::routes;
use super::state::AppState;
use crate::db::StudentStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8082)
    pub bind_addr: SocketAddr,

    /// How long in-flight requests may run after a shutdown signal
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8082)),
            shutdown_grace: Duration::from_secs(10),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::students::router())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("route not found".into())
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let store = SqliteStudentStore::connect(Path::new("storage/storage.db")).await?;
/// run_server(Arc::new(store), ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Arc<dyn StudentStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    serve(listener, store, config.shutdown_grace, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// After `shutdown` fires, new connections are refused and in-flight
/// requests get `grace` to finish before the server gives up on them.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<dyn StudentStore>,
    grace: Duration,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(AppState::new(store));
    let addr = listener.local_addr()?;
    info!(%addr, "server listening");

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();
    let mut server = std::pin::pin!(server);

    tokio::select! {
        result = &mut server => result?,
        Ok(()) = signalled_rx => {
            info!(grace_secs = grace.as_secs(), "shutdown requested, draining in-flight requests");
            match tokio::time::timeout(grace, &mut server).await {
                Ok(result) => result?,
                Err(_) => warn!("grace period elapsed, abandoning remaining requests"),
            }
        }
    }

    info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
