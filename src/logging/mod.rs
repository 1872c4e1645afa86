//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console diagnostics on stderr (stdout is the data channel)
//! - Configurable log levels
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use atveil::logging::init_logging;
//! use atveil::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
