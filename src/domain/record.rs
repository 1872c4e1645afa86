//! Like-stream record model and line decoding
//!
//! One input line is a JSON array of exactly four string fields:
//! `[action, did, rkey, target]`. The fourth field is only meaningful
//! for create actions; delete actions carry it (usually empty) and the
//! anonymizer ignores it.

use crate::domain::errors::InputError;
use crate::domain::ids::{Did, RecordKey};
use std::fmt;
use std::str::FromStr;

/// Action carried by a like-stream record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    /// A like was created (`c`)
    Create,
    /// A like was deleted (`d`)
    Delete,
}

impl LikeAction {
    /// The one-character wire tag for this action
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Create => "c",
            Self::Delete => "d",
        }
    }
}

impl fmt::Display for LikeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for LikeAction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(Self::Create),
            "d" => Ok(Self::Delete),
            other => Err(InputError::UnsupportedAction(other.to_string())),
        }
    }
}

/// One decoded like-stream record
///
/// The target is kept as the raw input string; create handling parses
/// it into an [`AtUri`](crate::domain::ids::AtUri) at transform time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRecord {
    /// The action tag
    pub action: LikeAction,
    /// The acting actor's DID
    pub actor: Did,
    /// The record key within the actor's like collection
    pub record_key: RecordKey,
    /// Raw target reference; only interpreted for creates
    pub target: String,
}

impl LikeRecord {
    /// Decodes one input line into a record
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Malformed`] if the line is not a JSON
    /// array of exactly four strings or the acting DID is empty, and
    /// [`InputError::UnsupportedAction`] for an unrecognized tag.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let (action, actor, record_key, target): (String, String, String, String) =
            serde_json::from_str(line).map_err(|e| InputError::Malformed(e.to_string()))?;

        let action = action.parse::<LikeAction>()?;
        let actor = Did::new(actor).map_err(InputError::Malformed)?;

        Ok(Self {
            action,
            actor,
            record_key: RecordKey::new(record_key),
            target,
        })
    }
}
