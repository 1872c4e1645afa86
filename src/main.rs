// Atveil - AT Protocol Like-Stream Anonymizer
// Copyright (c) 2025 Atveil Contributors
// Licensed under the MIT License

use atveil::cli::{Cli, Commands};
use atveil::config::load_config_or_default;
use atveil::logging::init_logging;
use clap::Parser;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Best-effort configuration read for logging setup; command
    // execution reloads and reports configuration errors on its own
    // path with a proper exit code
    let early_config = load_config_or_default(cli.config.as_deref()).unwrap_or_default();

    // Initialize logging; CLI flag wins over the configured level
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&early_config.application.log_level);
    let _guard = match init_logging(log_level, &early_config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Atveil - AT Protocol like-stream anonymizer"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5 // Fatal error exit code
        }
    };

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Anonymize(args) => args.execute(cli.config.as_deref()),
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()),
        Commands::Init(args) => args.execute(),
    }
}
