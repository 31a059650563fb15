//! Stable, order-independent hashing for set-valued structures.
//!
//! `HashSet` iteration order depends on its per-instance random state, so two
//! equal sets may iterate differently. The structural hash therefore works on
//! element hashes produced by a fixed-key hasher, sorts them, and only then
//! folds them: `h = h * 31 + hash(x)`, seeded with 17, wrapping on overflow.
//!
//! Equal elements always produce equal element hashes, and sorting removes the
//! iteration order, so equal sets always fold to the same value.

use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// Seed of the structural fold.
pub const STRUCTURAL_SEED: u64 = 17;

/// Multiplier of the structural fold.
pub const STRUCTURAL_MULTIPLIER: u64 = 31;

/// Hashes a single value with a fixed-key hasher.
///
/// Unlike `RandomState`, the result is identical for every call in the
/// process, which makes it usable as a sort key.
#[inline]
pub fn element_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Accumulator for the multiplicative structural fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralHasher {
    state: u64,
}

impl StructuralHasher {
    /// Starts a fold at [`STRUCTURAL_SEED`].
    pub const fn new() -> Self {
        Self {
            state: STRUCTURAL_SEED,
        }
    }

    /// Folds a single pre-computed hash into the accumulator.
    #[inline]
    pub fn fold(&mut self, hash: u64) {
        self.state = self
            .state
            .wrapping_mul(STRUCTURAL_MULTIPLIER)
            .wrapping_add(hash);
    }

    /// Folds every element of `items` in ascending order of element hash.
    pub fn fold_sorted<'a, T, I>(&mut self, items: I)
    where
        T: Hash + 'a + ?Sized,
        I: IntoIterator<Item = &'a T>,
    {
        let mut hashes: Vec<u64> = items.into_iter().map(element_hash).collect();
        hashes.sort_unstable();
        for h in hashes {
            self.fold(h);
        }
    }

    /// Returns the accumulated value.
    #[inline]
    pub const fn finish(self) -> u64 {
        self.state
    }
}

impl Default for StructuralHasher {
    fn default() -> Self {
        Self::new()
    }
}
