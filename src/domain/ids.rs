//! Domain identifier types with validation
//!
//! Newtype wrappers for the identifiers that appear in a like stream.
//! Each type ensures type safety and carries only the minimal shape
//! assertions the stream format requires.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheme prefix of an AT-URI target reference.
pub const AT_URI_SCHEME: &str = "at://";

/// DID newtype wrapper
///
/// Represents a decentralized identifier naming an actor. Observed
/// values use the `did:plc:` method, but the type treats the value as
/// an opaque unique key.
///
/// # Examples
///
/// ```
/// use atveil::domain::ids::Did;
/// use std::str::FromStr;
///
/// let did = Did::from_str("did:plc:ewvi7nxzyoun6zhxrhs64oiz").unwrap();
/// assert_eq!(did.as_str(), "did:plc:ewvi7nxzyoun6zhxrhs64oiz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Did(String);

impl Did {
    /// Creates a new Did from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("DID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the DID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Did {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Did {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Record key newtype wrapper
///
/// Names a specific record within an actor's collection. The value is
/// opaque to the anonymizer and is passed through untouched, so no
/// shape is asserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey(String);

impl RecordKey {
    /// Creates a new RecordKey from a string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the record key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Structured AT-URI target reference
///
/// A locator of the form `at://<did>/<path-suffix>` pointing at a
/// specific record in another actor's repository. Parsing splits the
/// reference into the embedded DID and the remaining path suffix;
/// formatting reassembles it, which lets the anonymizer substitute the
/// DID while preserving the path byte-for-byte.
///
/// # Examples
///
/// ```
/// use atveil::domain::ids::AtUri;
///
/// let uri = AtUri::parse("at://did:plc:abc/app.bsky.feed.like/3jx2").unwrap();
/// assert_eq!(uri.did().as_str(), "did:plc:abc");
/// assert_eq!(uri.path(), "app.bsky.feed.like/3jx2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtUri {
    did: Did,
    path: String,
}

impl AtUri {
    /// Assembles an AT-URI from a DID and a path suffix
    pub fn new(did: Did, path: impl Into<String>) -> Self {
        Self {
            did,
            path: path.into(),
        }
    }

    /// Parses an AT-URI string into its DID and path suffix
    ///
    /// # Errors
    ///
    /// Returns an error if the reference does not start with `at://`,
    /// has no `/` separating the authority from a path, or embeds an
    /// empty DID.
    pub fn parse(uri: &str) -> Result<Self, String> {
        let rest = uri
            .strip_prefix(AT_URI_SCHEME)
            .ok_or_else(|| format!("missing '{AT_URI_SCHEME}' scheme prefix"))?;

        let (did, path) = rest
            .split_once('/')
            .ok_or_else(|| "missing path suffix after authority".to_string())?;

        let did = Did::new(did)?;
        Ok(Self {
            did,
            path: path.to_string(),
        })
    }

    /// The DID embedded in the authority position
    pub fn did(&self) -> &Did {
        &self.did
    }

    /// The path suffix after the authority, without a leading `/`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a copy with the authority DID replaced
    pub fn with_did(&self, did: Did) -> Self {
        Self {
            did,
            path: self.path.clone(),
        }
    }
}

impl fmt::Display for AtUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", AT_URI_SCHEME, self.did, self.path)
    }
}

impl FromStr for AtUri {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
