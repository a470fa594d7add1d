//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, ScryptError>`](ScryptError).

use thiserror::Error;

/// The error type for all scrypt operations.
///
/// Parameter errors are raised before any buffer is allocated. Allocation
/// failure for very large `cost · block_size` is not reported here: the
/// process aborts and no partially mixed buffer is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScryptError {
    /// A cost parameter or requested length is outside its valid range.
    ///
    /// Raised when:
    /// - `cost` is not a positive power of two
    /// - `block_size` or `parallel` is zero, or their product overflows the
    ///   lane-size / total-size arithmetic
    /// - `max_threads` is set to zero
    /// - the requested output length exceeds the PBKDF2-HMAC-SHA256 limit
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// A required input was not supplied.
    #[error("missing required input: {0}")]
    NullInput(&'static str),

    /// Cryptographic operation failed.
    ///
    /// This covers HMAC keying failures and reading past the end of a
    /// PBKDF2 output stream.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl ScryptError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ScryptError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl From<&'static str> for ScryptError {
    fn from(msg: &'static str) -> Self {
        ScryptError::Crypto(msg.to_string())
    }
}
