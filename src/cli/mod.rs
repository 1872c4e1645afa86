//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Atveil using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Atveil - AT Protocol like-stream anonymizer
#[derive(Parser, Debug)]
#[command(name = "atveil")]
#[command(version, about, long_about = None)]
#[command(author = "Atveil Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to atveil.toml when present)
    #[arg(short, long, env = "ATVEIL_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ATVEIL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize a like-record stream from files or standard input
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
