//! Domain models and types for Atveil.
//!
//! This module contains the core domain models, types, and business
//! rules for the like-stream anonymizer.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`Did`], [`RecordKey`], [`AtUri`])
//! - **The stream record model** ([`LikeRecord`], [`LikeAction`])
//! - **Error types** ([`AtveilError`], [`InputError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Atveil uses the newtype pattern for identifiers to prevent mixing
//! different ID types:
//!
//! ```rust
//! use atveil::domain::{Did, RecordKey};
//!
//! # fn example() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let did = Did::new("did:plc:ewvi7nxzyoun6zhxrhs64oiz")?;
//! let rkey = RecordKey::new("3jx2kfqmrxk2t");
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: Did = rkey;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, AtveilError>`]:
//!
//! ```rust
//! use atveil::domain::{AtveilError, InputError, Result};
//!
//! fn example(line: u64) -> Result<()> {
//!     Err(AtveilError::at_line(
//!         line,
//!         InputError::UnsupportedAction("x".to_string()),
//!     ))
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{AtveilError, InputError};
pub use ids::{AtUri, Did, RecordKey};
pub use record::{LikeAction, LikeRecord};
pub use result::Result;
