//! Fake-DID token generation
//!
//! Candidates are drawn from a 32-symbol alphabet (`a-z` plus `2-7`,
//! 5 bits per character, base32-style) so they match the structural
//! shape of real `did:plc:` identifiers. Generation is a pure function
//! of the RNG state, which keeps seeded runs reproducible.

use crate::domain::ids::Did;
use rand::Rng;

/// Alphabet the `did:plc` method draws its identifier body from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Length of a `did:plc` identifier body.
pub const BODY_LEN: usize = 24;

/// Method prefix of a generated fake identifier.
pub const DID_PREFIX: &str = "did:plc:";

/// Draws one candidate fake DID from the RNG
///
/// The result is structurally indistinguishable from a real `did:plc`
/// identifier: the fixed prefix followed by [`BODY_LEN`] characters
/// uniformly drawn from [`ALPHABET`]. Uniqueness against previously
/// issued tokens is the caller's concern.
pub fn generate_candidate<R: Rng>(rng: &mut R) -> Did {
    let mut token = String::with_capacity(DID_PREFIX.len() + BODY_LEN);
    token.push_str(DID_PREFIX);
    for _ in 0..BODY_LEN {
        let idx = rng.gen_range(0..ALPHABET.len());
        token.push(ALPHABET[idx] as char);
    }

    // Infallible: the prefix guarantees a non-empty value
    Did::new(token).expect("generated token is non-empty")
}
