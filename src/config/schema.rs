//! Configuration schema types
//!
//! This module defines the configuration structure for Atveil. Every
//! section has working defaults so the tool runs without a config file.

use serde::{Deserialize, Serialize};

/// Main Atveil configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtveilConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Anonymization settings
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AtveilConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (parse and transform but don't emit output)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Anonymization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Fixed RNG seed for reproducible substitution; absent means a
    /// fresh entropy seed per run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Emit the trailing `)` on delete lines for byte-compatibility
    /// with the historical output format
    #[serde(default = "default_legacy_delete_suffix")]
    pub legacy_delete_suffix: bool,
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            legacy_delete_suffix: default_legacy_delete_suffix(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy ("daily" or "hourly")
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".into());
        }

        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_legacy_delete_suffix() -> bool {
    true
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AtveilConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert!(!config.application.dry_run);
        assert!(config.anonymization.seed.is_none());
        assert!(config.anonymization.legacy_delete_suffix);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = AtveilConfig {
            application: ApplicationConfig {
                log_level: "verbose".to_string(),
                dry_run: false,
            },
            ..AtveilConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let config = AtveilConfig {
            logging: LoggingConfig {
                local_rotation: "weekly".to_string(),
                ..LoggingConfig::default()
            },
            ..AtveilConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_log_path_rejected_when_enabled() {
        let config = AtveilConfig {
            logging: LoggingConfig {
                local_enabled: true,
                local_path: "  ".to_string(),
                ..LoggingConfig::default()
            },
            ..AtveilConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_minimal_toml_parses_with_defaults() {
        let config: AtveilConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert!(config.anonymization.legacy_delete_suffix);
    }

    #[test]
    fn test_partial_toml_parses() {
        let config: AtveilConfig = toml::from_str(
            r#"
[anonymization]
seed = 42
legacy_delete_suffix = false
"#,
        )
        .unwrap();
        assert_eq!(config.anonymization.seed, Some(42));
        assert!(!config.anonymization.legacy_delete_suffix);
        // Untouched sections keep their defaults
        assert_eq!(config.application.log_level, "info");
    }
}
