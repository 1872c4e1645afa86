// Atveil - AT Protocol Like-Stream Anonymizer
// Copyright (c) 2025 Atveil Contributors
// Licensed under the MIT License

//! # Atveil - AT Protocol Like-Stream Anonymizer
//!
//! Atveil is a command-line filter that reads a stream of AT Protocol
//! "like"/"unlike" records and rewrites every actor DID to a
//! consistently-substituted pseudonymous DID, preserving the relational
//! structure of the stream (same real DID → same fake DID everywhere)
//! while destroying the real values.
//!
//! ## Architecture
//!
//! Atveil follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Run orchestration (stream pipeline, summary)
//! - [`anonymization`] - The DID substitution cache and record transform
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use atveil::anonymization::AnonymizationEngine;
//! use atveil::config::AnonymizationConfig;
//! use atveil::core::stream::StreamProcessor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = AnonymizationEngine::new(&AnonymizationConfig::default());
//! let mut processor = StreamProcessor::new(engine, false);
//!
//! let input = r#"["d", "did:plc:ewvi7nxzyoun6zhxrhs64oiz", "3jx2kfqmrxk2t", ""]"#;
//! let mut output = Vec::new();
//! processor.process(input.as_bytes(), &mut output)?;
//!
//! let summary = processor.finish();
//! assert_eq!(summary.lines, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Substitution guarantees
//!
//! Within one run the mapping is a bijection restricted to the DIDs
//! seen so far: lookups are idempotent, distinct inputs never collide,
//! and every fake matches the structural shape `did:plc:` + 24
//! characters of the 32-symbol `a-z2-7` alphabet. Nothing is persisted
//! across runs, and with a configured seed a run is fully reproducible:
//!
//! ```rust
//! use atveil::anonymization::DidMapper;
//! use atveil::domain::Did;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let real = Did::new("did:plc:ewvi7nxzyoun6zhxrhs64oiz")?;
//!
//! let mut a = DidMapper::with_seed(42);
//! let mut b = DidMapper::with_seed(42);
//! assert_eq!(a.anonymize(&real), b.anonymize(&real));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Atveil uses the [`domain::AtveilError`] type for all errors. Input
//! handling is fail-fast: the first malformed line or contract
//! violation aborts the run with its line number; there is no
//! skip-and-continue policy.
//!
//! ## Logging
//!
//! Atveil uses structured logging with the `tracing` crate. All
//! diagnostics go to stderr; stdout carries nothing but the anonymized
//! record stream.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
