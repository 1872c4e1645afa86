//! Domain error types
//!
//! This module defines the error hierarchy for Atveil. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Atveil error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum AtveilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input stream errors, annotated with the 1-based line number
    #[error("Input error at line {line}: {source}")]
    Input {
        /// 1-based line number within the current input source
        line: u64,
        /// The underlying record-level error
        source: InputError,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl AtveilError {
    /// Wraps a record-level error with its input line number
    pub fn at_line(line: u64, source: InputError) -> Self {
        Self::Input { line, source }
    }
}

/// Record-level input errors
///
/// Errors raised while decoding or transforming a single stream record.
/// The run stops at the first one; there is no skip-and-continue policy.
#[derive(Debug, Error)]
pub enum InputError {
    /// Line does not decode into exactly four string fields, or a
    /// required field fails its shape assertion
    #[error("malformed record: {0}")]
    Malformed(String),

    /// Action tag is neither `c` nor `d`
    #[error("unsupported action tag '{0}'")]
    UnsupportedAction(String),

    /// Create-record target is not a well-formed AT-URI
    #[error("invalid target reference '{target}': {reason}")]
    InvalidTarget {
        /// The offending target string as it appeared in the input
        target: String,
        /// Why it failed to parse
        reason: String,
    },
}

// Conversion from std::io::Error
impl From<std::io::Error> for AtveilError {
    fn from(err: std::io::Error) -> Self {
        AtveilError::Io(err.to_string())
    }
}
