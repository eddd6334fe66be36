//! Route handlers for the HTTP server.

pub mod health;
pub mod movies;
pub mod stream;
pub mod watch;
