//! DID substitution cache
//!
//! The heart of the anonymizer: a run-scoped, collision-free,
//! randomized substitution table from real DIDs to fake ones.

use crate::anonymization::token::generate_candidate;
use crate::domain::ids::Did;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

/// Run-scoped mapping from real DIDs to fake DIDs
///
/// The mapper owns the mapping table, the set of fake DIDs already
/// issued, and the random source. It upholds two invariants for the
/// lifetime of a run:
///
/// - every real DID maps to exactly one fake DID (idempotent lookups)
/// - no two distinct real DIDs share a fake DID (the mapping is a
///   bijection restricted to the DIDs seen so far)
///
/// Nothing is persisted; a new run starts from an empty table.
pub struct DidMapper {
    /// Real → fake associations issued so far
    mapped: HashMap<Did, Did>,
    /// Every fake DID issued so far, for collision rejection
    claimed: HashSet<Did>,
    /// Random source (StdRng so the mapper stays Send)
    rng: StdRng,
}

impl DidMapper {
    /// Creates a mapper with an entropy-seeded random source
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a mapper with a fixed seed for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            mapped: HashMap::new(),
            claimed: HashSet::new(),
            rng,
        }
    }

    /// Returns the fake DID for `did`, allocating one on first sight
    ///
    /// Memoized: repeated calls with the same input return the same
    /// fake for the remainder of the run. A fresh allocation draws
    /// candidates until one misses the claimed set; with a 32^24
    /// keyspace the expected number of retries is ~0, and keyspace
    /// exhaustion is not a reachable condition.
    pub fn anonymize(&mut self, did: &Did) -> Did {
        if let Some(fake) = self.mapped.get(did) {
            return fake.clone();
        }

        let fake = loop {
            let candidate = generate_candidate(&mut self.rng);
            if !self.claimed.contains(&candidate) {
                break candidate;
            }
        };

        self.mapped.insert(did.clone(), fake.clone());
        self.claimed.insert(fake.clone());
        fake
    }

    /// Number of distinct real DIDs seen so far
    pub fn len(&self) -> usize {
        self.mapped.len()
    }

    /// True if no DID has been mapped yet
    pub fn is_empty(&self) -> bool {
        self.mapped.is_empty()
    }
}

impl Default for DidMapper {
    fn default() -> Self {
        Self::new()
    }
}
