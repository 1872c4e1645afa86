//! Result type alias for Atveil
//!
//! This module provides a convenient Result type alias that uses
//! AtveilError as the error type.

use super::errors::AtveilError;

/// Result type alias for Atveil operations
///
/// This is a convenience type alias that uses `AtveilError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use atveil::domain::result::Result;
/// use atveil::domain::errors::AtveilError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AtveilError::Other("unexpected".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AtveilError>;
