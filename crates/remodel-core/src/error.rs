//! Error types for the Remodel core library
//!
//! This module defines the error handling system for Remodel, using thiserror
//! for ergonomic error definitions and anyhow for flexible error contexts.
//!
//! Fatal input errors (missing or malformed documents) abort a run before any
//! output is produced. Lookup failures during the walk are never surfaced
//! here: the components that own them absorb failures into their documented
//! fallback values.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Remodel operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input document does not exist
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// Input document is not valid JSON
    #[error("Malformed JSON{}: {message}", path.as_ref().map(|p| format!(" in '{}'", p.display())).unwrap_or_default())]
    Parse {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client construction or transport errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Image payload could not be decoded to obtain dimensions
    #[error("Image decode error for '{url}': {message}")]
    ImageDecode {
        url: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Configuration errors (invalid endpoints, malformed header values)
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}
