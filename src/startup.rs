//! Application startup and lifecycle management.
//!
//! Binding and serving are split so integration tests can build the
//! application on an ephemeral port and read the port back before driving
//! requests at it.

use crate::config::Settings;
use crate::error::AppError;
use crate::handlers::{health_check, index};
use crate::middleware::tracing::{request_id_middleware, REQUEST_ID_HEADER};
use axum::{middleware::from_fn, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Build the router: two fixed routes, anything else falls through to
/// axum's default 404.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    /// Bind the listener for the configured port (port 0 = ephemeral port).
    pub async fn build(settings: &Settings) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self { port, listener })
    }

    /// The port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Listening on port {}", self.port);
        axum::serve(self.listener, build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Managed runtimes deliver SIGTERM before killing an instance; finish
/// in-flight requests instead of dropping them.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
