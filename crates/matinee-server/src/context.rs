//! Shared application context.
//!
//! [`AppContext`] is the struct shared across all route handlers via Axum
//! state. Everything in it is immutable for the lifetime of the process;
//! requests share no mutable state with each other.

use std::sync::Arc;

use matinee_core::config::Config;

use crate::library::MediaLibrary;

/// Application context shared by all request handlers (via Axum state).
///
/// Cheaply cloneable because it only holds `Arc`s.
#[derive(Clone)]
pub struct AppContext {
    /// Immutable application configuration snapshot.
    pub config: Arc<Config>,
    /// Media library rooted at the configured directory.
    pub library: Arc<MediaLibrary>,
}

impl AppContext {
    /// Build a context from a configuration snapshot.
    pub fn new(config: Config) -> Self {
        let library = MediaLibrary::new(config.library.media_dir.clone());
        Self {
            config: Arc::new(config),
            library: Arc::new(library),
        }
    }
}
