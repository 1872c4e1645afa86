//! Record transform engine
//!
//! Rewrites decoded like-stream records with every real DID replaced by
//! its substituted fake, preserving action semantics and the target
//! path suffix. One engine owns one [`DidMapper`], so every record
//! processed through it shares the same substitution table.

use crate::anonymization::mapper::DidMapper;
use crate::config::AnonymizationConfig;
use crate::domain::errors::InputError;
use crate::domain::ids::AtUri;
use crate::domain::record::{LikeAction, LikeRecord};

/// Anonymizing record transformer
///
/// # Output format
///
/// - create: `c;<fake_target_ref>;<fake_actor>!<rkey>`
/// - delete: `d;<fake_actor>!<rkey>` plus a trailing `)` when the
///   legacy delete marker is enabled (on by default for
///   byte-compatibility with the historical format)
pub struct AnonymizationEngine {
    mapper: DidMapper,
    legacy_delete_suffix: bool,
}

impl AnonymizationEngine {
    /// Creates an engine from the anonymization configuration
    ///
    /// A configured seed makes the whole run reproducible; otherwise
    /// the substitution table is entropy-seeded.
    pub fn new(config: &AnonymizationConfig) -> Self {
        let mapper = match config.seed {
            Some(seed) => DidMapper::with_seed(seed),
            None => DidMapper::new(),
        };
        Self {
            mapper,
            legacy_delete_suffix: config.legacy_delete_suffix,
        }
    }

    /// Transforms one record into its anonymized output line
    ///
    /// The acting DID is mapped before the target DID, so a seeded run
    /// assigns identical fakes to identical streams. Both lookups go
    /// through the shared mapper: an actor that also appears in target
    /// position receives one consistent fake.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidTarget`] when a create record's
    /// target is not a well-formed AT-URI.
    pub fn transform(&mut self, record: &LikeRecord) -> Result<String, InputError> {
        let fake_actor = self.mapper.anonymize(&record.actor);

        match record.action {
            LikeAction::Create => {
                let target =
                    AtUri::parse(&record.target).map_err(|reason| InputError::InvalidTarget {
                        target: record.target.clone(),
                        reason,
                    })?;

                let fake_target = target.with_did(self.mapper.anonymize(target.did()));
                Ok(format!(
                    "{};{};{}!{}",
                    record.action, fake_target, fake_actor, record.record_key
                ))
            }
            LikeAction::Delete => {
                let mut line = format!("{};{}!{}", record.action, fake_actor, record.record_key);
                if self.legacy_delete_suffix {
                    line.push(')');
                }
                Ok(line)
            }
        }
    }

    /// Number of distinct real DIDs mapped so far
    pub fn distinct_actors(&self) -> usize {
        self.mapper.len()
    }
}
