//! Chain IDs that are always flagged as testnets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Testnets that upstream metadata does not reliably mark as such.
pub const KNOWN_TESTNETS: &[u64] = &[
    5, 42, 4, 80_001, 84_531, 420, 200_101, 97, 43_113, 314_159, 1442, 7001, 5001, 11_155_111,
    167_005,
];

/// A set of chain IDs treated as non-mainnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Testnets(BTreeSet<u64>);

impl Default for Testnets {
    fn default() -> Self {
        Self::new(KNOWN_TESTNETS.iter().copied())
    }
}

impl Testnets {
    /// Build a set from chain IDs.
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Whether `chain_id` is a known testnet.
    #[must_use]
    pub fn contains(&self, chain_id: u64) -> bool {
        self.0.contains(&chain_id)
    }

    /// Whether the stringified `chain_id` names a mainnet.
    ///
    /// IDs that do not parse as integers can never be in the set and are
    /// therefore mainnets.
    #[must_use]
    pub fn is_mainnet(&self, chain_id: &str) -> bool {
        !chain_id
            .trim()
            .parse::<u64>()
            .is_ok_and(|id| self.contains(id))
    }
}
