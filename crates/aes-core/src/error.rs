//! Error type shared by the key and block constructors.

use thiserror::Error;

/// Failures raised at the byte/hex boundary before any cipher work starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A key or block was not exactly 16 bytes long.
    #[error("{what} must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Which input was rejected (`"key"` or `"block"`).
        what: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// The hex text could not be decoded.
    #[error("invalid hex encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
