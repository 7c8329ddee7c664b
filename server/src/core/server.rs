//! Server Implementation
//!
//! HTTP server startup and graceful shutdown.

use crate::core::ServerState;
use crate::utils::AppError;

/// HTTP Server
pub struct Server {
    state: ServerState,
}

impl Server {
    pub fn new(state: ServerState) -> Self {
        Self { state }
    }

    /// Bind the configured port and serve the application until ctrl-c.
    pub async fn run(&self) -> Result<(), AppError> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.state.config.http_port));
        let app = crate::api::app(self.state.clone());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
        tracing::info!("Restaurant server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
