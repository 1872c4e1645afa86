//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Atveil configuration file.

use crate::config::{load_config_or_default, DEFAULT_CONFIG_PATH};
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration: {shown_path}");
        println!();

        if config_path.is_none() && !Path::new(DEFAULT_CONFIG_PATH).exists() {
            println!("ℹ️  No configuration file found; built-in defaults apply");
        }

        let config = match load_config_or_default(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!(
            "  Substitution Seed: {}",
            match config.anonymization.seed {
                Some(seed) => seed.to_string(),
                None => "entropy (fresh mapping per run)".to_string(),
            }
        );
        println!(
            "  Legacy Delete Suffix: {}",
            config.anonymization.legacy_delete_suffix
        );
        println!("  File Logging: {}", config.logging.local_enabled);
        if config.logging.local_enabled {
            println!("  Log Path: {}", config.logging.local_path);
            println!("  Log Rotation: {}", config.logging.local_rotation);
        }
        println!();
        Ok(0)
    }
}
