//! Errors raised while reading and writing vector files.

use std::path::PathBuf;

use thiserror::Error;

/// Harness error.
#[derive(Debug, Error)]
pub enum Error {
    /// The vector file could not be read.
    #[error("read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A vector file could not be written.
    #[error("write {}: {source}", .path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Cases could not be rendered as TOML.
    #[error("serialize vector file: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The vector file is not valid TOML or does not match the expected layout.
    #[error("parse vector file: {0}")]
    Parse(#[from] toml::de::Error),
    /// A case carries a malformed key, input or expected value.
    #[error("case `{label}`: {source}")]
    InvalidCase {
        /// Label of the offending case.
        label: String,
        /// What was wrong with it.
        #[source]
        source: aes_core::Error,
    },
}

/// Result alias for the harness.
pub type Result<T> = std::result::Result<T, Error>;
