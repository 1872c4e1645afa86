//! Anonymize command implementation
//!
//! This module implements the `anonymize` command: the main run that
//! streams like records from files or standard input through the
//! anonymization engine to standard output.

use crate::anonymization::AnonymizationEngine;
use crate::config::load_config_or_default;
use crate::core::stream::StreamProcessor;
use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the anonymize command
#[derive(Args, Debug, Default)]
pub struct AnonymizeArgs {
    /// Input files processed in order; reads standard input when empty
    pub files: Vec<PathBuf>,

    /// Write output to a file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fixed RNG seed for a reproducible substitution table
    #[arg(long)]
    pub seed: Option<u64>,

    /// Parse and transform records without emitting output
    #[arg(long)]
    pub dry_run: bool,

    /// Drop the trailing ')' on delete lines (clean output format)
    #[arg(long)]
    pub no_legacy_delete_suffix: bool,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Starting anonymize command");

        // Load configuration
        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(seed) = self.seed {
            tracing::info!(seed, "Overriding substitution seed from CLI");
            config.anonymization.seed = Some(seed);
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
        if self.no_legacy_delete_suffix {
            config.anonymization.legacy_delete_suffix = false;
        }

        if config.application.dry_run {
            tracing::info!("Dry run mode enabled - no output will be written");
        }

        let engine = AnonymizationEngine::new(&config.anonymization);
        let mut processor = StreamProcessor::new(engine, config.application.dry_run);

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };

        if self.files.is_empty() {
            tracing::debug!("Reading from standard input");
            processor
                .process(io::stdin().lock(), &mut writer)
                .context("while processing standard input")?;
        } else {
            for path in &self.files {
                tracing::debug!(file = %path.display(), "Processing input file");
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file {}", path.display()))?;
                processor
                    .process(BufReader::new(file), &mut writer)
                    .with_context(|| format!("while processing {}", path.display()))?;
            }
        }

        writer.flush().context("Failed to flush output")?;

        let summary = processor.finish();
        summary.log_summary();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_anonymize_args_defaults() {
        let args = AnonymizeArgs::default();
        assert!(args.files.is_empty());
        assert!(args.output.is_none());
        assert!(args.seed.is_none());
        assert!(!args.dry_run);
        assert!(!args.no_legacy_delete_suffix);
    }

    #[test]
    fn test_execute_with_file_input_and_output() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("likes.jsonl");
        let output_path = dir.path().join("out.txt");

        let mut input = File::create(&input_path).unwrap();
        writeln!(
            input,
            r#"["c", "did:plc:aaa", "rkey1", "at://did:plc:bbb/app.bsky.feed.like/xyz"]"#
        )
        .unwrap();
        writeln!(input, r#"["d", "did:plc:aaa", "rkey2", ""]"#).unwrap();

        let args = AnonymizeArgs {
            files: vec![input_path],
            output: Some(output_path.clone()),
            seed: Some(11),
            ..AnonymizeArgs::default()
        };

        let code = args.execute(None).unwrap();
        assert_eq!(code, 0);

        let out = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("c;at://did:plc:"));
        assert!(lines[1].starts_with("d;did:plc:"));
        assert!(lines[1].ends_with(')'));
    }

    #[test]
    fn test_execute_fails_on_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("bad.jsonl");
        let output_path = dir.path().join("out.txt");

        let mut input = File::create(&input_path).unwrap();
        writeln!(input, r#"["c", "did:plc:aaa", "rkey1"]"#).unwrap();

        let args = AnonymizeArgs {
            files: vec![input_path],
            output: Some(output_path),
            ..AnonymizeArgs::default()
        };

        assert!(args.execute(None).is_err());
    }

    #[test]
    fn test_execute_missing_input_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = AnonymizeArgs {
            files: vec![dir.path().join("does-not-exist.jsonl")],
            output: Some(dir.path().join("out.txt")),
            ..AnonymizeArgs::default()
        };

        assert!(args.execute(None).is_err());
    }

    #[test]
    fn test_execute_explicit_missing_config_returns_config_exit_code() {
        let args = AnonymizeArgs::default();
        let code = args.execute(Some("definitely-missing.toml")).unwrap();
        assert_eq!(code, 2);
    }
}
