//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates a temporary media directory and a
//! full [`AppContext`]. The [`with_server`] constructor starts Axum on a
//! random port for HTTP-level testing.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use matinee_core::config::Config;
use matinee_server::context::AppContext;
use matinee_server::router::build_router;

/// Test harness wrapping a fully-constructed [`AppContext`] backed by a
/// temporary media directory.
pub struct TestHarness {
    pub ctx: AppContext,
    media_dir: TempDir,
}

impl TestHarness {
    /// Create a new harness with a fresh empty media directory.
    pub fn new() -> Self {
        let media_dir = tempfile::tempdir().expect("failed to create temp media dir");

        let mut config = Config::default();
        config.library.media_dir = media_dir.path().to_path_buf();
        config.server.static_dir = None;

        let ctx = AppContext::new(config);
        Self { ctx, media_dir }
    }

    /// Root of the temporary media directory.
    pub fn media_root(&self) -> &Path {
        self.media_dir.path()
    }

    /// Write a file into the media directory and return its full path.
    pub fn add_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.media_dir.path().join(name);
        std::fs::write(&path, bytes).expect("failed to write media file");
        path
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let app = build_router(harness.ctx.clone(), None);
        let addr = serve_router(app).await;
        (harness, addr)
    }
}

/// Bind a router to a random local port and serve it in the background.
pub async fn serve_router(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind random port");
    let addr = listener.local_addr().expect("failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    addr
}
