//! Unified error type for the matinee application.
//!
//! All crates funnel their failures into [`Error`], which carries enough
//! context for the HTTP layer to derive a status code via
//! [`Error::http_status`] and a client-safe body via
//! [`Error::client_message`]. Detail beyond the generic message stays in the
//! server logs.

use std::fmt;

/// Unified error type covering all failure modes in matinee.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested file could not be found. Names that would escape the
    /// media root are reported identically, so probing cannot tell the two
    /// apart.
    #[error("{entity} not found: {name}")]
    NotFound {
        /// The kind of entity (e.g. "file").
        entity: String,
        /// The name that was looked up.
        name: String,
    },

    /// A well-formed `Range` header that no byte of the file can satisfy.
    #[error("Range not satisfiable: file size is {size}")]
    RangeNotSatisfiable {
        /// Current size of the file the range was checked against.
        size: u64,
    },

    /// A `Range` header that does not follow `bytes=start-[end]` syntax.
    #[error("Malformed Range header: {reason}")]
    MalformedRange {
        /// What the parser choked on.
        reason: String,
    },

    /// The media directory could not be enumerated.
    #[error("Library unavailable: {source}")]
    LibraryUnavailable {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::NotFound { .. } => 404,
            Error::RangeNotSatisfiable { .. } => 416,
            Error::MalformedRange { .. } => 400,
            Error::LibraryUnavailable { .. } => 500,
            Error::Io { .. } => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Generic client-facing message for this error class.
    ///
    /// Response bodies never carry internal detail such as paths or I/O
    /// causes; those go to the logs only.
    pub fn client_message(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "File not found",
            Error::RangeNotSatisfiable { .. } => "Requested range not satisfiable",
            Error::MalformedRange { .. } => "Malformed Range header",
            Error::LibraryUnavailable { .. } => "Error reading movies directory",
            Error::Io { .. } | Error::Internal(_) => "Internal server error",
        }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, name: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            name: name.to_string(),
        }
    }

    /// Convenience constructor for [`Error::MalformedRange`].
    pub fn malformed_range(reason: impl Into<String>) -> Self {
        Error::MalformedRange {
            reason: reason.into(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
