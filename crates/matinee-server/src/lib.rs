//! matinee-server: the HTTP layer.
//!
//! Ties the core crate into a running Axum application:
//!
//! - Range-aware file streaming from the media directory
//! - JSON catalog and HTML player page
//! - Optional static file serving for the UI shell
//! - Graceful shutdown via signal handling

pub mod context;
pub mod error;
pub mod library;
pub mod middleware;
pub mod router;
pub mod routes;

use std::net::SocketAddr;

use matinee_core::config::Config;

use crate::context::AppContext;

/// Start the matinee server.
///
/// Builds the [`AppContext`] from the given configuration, binds the
/// configured address, and serves until a shutdown signal is received.
pub async fn start(config: Config) -> matinee_core::Result<()> {
    // Validate configuration.
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| matinee_core::Error::Internal(format!("Invalid server address: {e}")))?;

    let static_dir = config.server.static_dir.clone();
    let media_dir = config.library.media_dir.clone();
    let ctx = AppContext::new(config);
    let app = router::build_router(ctx, static_dir);

    tracing::info!("Serving media from {}", media_dir.display());
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| matinee_core::Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| matinee_core::Error::Io { source })?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
