//! Configuration management for Atveil.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Atveil uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ATVEIL_*` environment variable overrides
//! - Default values for every setting (the file is optional)
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use atveil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("atveil.toml")?;
//!
//! println!("Log level: {}", config.application.log_level);
//! if let Some(seed) = config.anonymization.seed {
//!     println!("Reproducible run with seed {seed}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [anonymization]
//! # seed = 42
//! legacy_delete_suffix = true
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_PATH};
pub use schema::{AnonymizationConfig, ApplicationConfig, AtveilConfig, LoggingConfig};
