//! matinee-core: configuration, errors, media classification, and byte-range
//! interpretation.
//!
//! This crate is the foundational dependency for the server crate. Nothing
//! here touches HTTP or async I/O; everything is pure and synchronous so it
//! can be exercised directly in unit tests.

pub mod config;
pub mod error;
pub mod media;
pub mod range;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use media::MediaKind;
pub use range::{ByteRange, RangeError, RangeHeader};
