//! Typed error enum for the `swagen-core` library API.
//!
//! The CLI maps every variant to a non-zero exit code and prints the
//! `Display` form to stderr.

use std::path::PathBuf;

/// Errors produced by `swagen-core` operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The source document could not be read or fetched.
    #[error("failed to load API document from {locator}: {source}")]
    Load {
        /// Path or URL the document was requested from.
        locator: String,
        /// Underlying I/O or transport failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The source document was retrieved but is neither JSON nor YAML,
    /// or does not have the shape of an API description.
    #[error("failed to parse API document from {locator}: {message}")]
    Parse {
        /// Path or URL the document was requested from.
        locator: String,
        /// Parser message.
        message: String,
    },

    /// The configuration file could not be read or deserialized.
    #[error("failed to read config file {}: {message}", path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// Reader or parser message.
        message: String,
    },

    /// The configuration failed validation. Every problem is listed.
    #[error("invalid configuration:\n  - {}", .0.join("\n  - "))]
    InvalidConfig(Vec<String>),

    /// Writing generated output failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path being written or moved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the library's public API.
pub type Result<T> = std::result::Result<T, Error>;
