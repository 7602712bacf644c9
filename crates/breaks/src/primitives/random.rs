//! Call-scoped random partition sampling.
//!
//! ## Purpose
//!
//! Jenks restarts begin from random partitions. This module owns the random
//! generator used to draw them, so each classification call carries its own
//! seeded state and concurrent calls never share draws.
//!
//! ## Design notes
//!
//! * **Reproducible**: `ChaCha8Rng` produces the same stream for the same seed
//!   on every platform.
//! * **Owned**: A sampler is created per call and dropped with it.
//!
//! ## Invariants
//!
//! * Sampled partitions have exactly `k` non-empty classes covering `[0, n - 1]`.
//!
//! ## Non-goals
//!
//! * This module does not evaluate partitions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Internal dependencies
use crate::primitives::partition::ClassPartition;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Seeded source of random class partitions.
#[derive(Debug, Clone)]
pub struct PartitionSampler {
    rng: ChaCha8Rng,
}

impl PartitionSampler {
    /// Create a sampler seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a random partition of `n` indices into `k` classes.
    ///
    /// Class starts for classes `2..=k` are drawn from `[1, n - 1]`, sorted and
    /// de-duplicated, and topped up until `k - 1` distinct starts exist.
    /// Requires `1 <= k <= n`.
    pub fn sample(&mut self, n: usize, k: usize) -> ClassPartition {
        let needed = k - 1;
        let mut starts: Vec<usize> = Vec::with_capacity(needed);

        while starts.len() < needed {
            while starts.len() < needed {
                starts.push(self.rng.random_range(1..n));
            }
            starts.sort_unstable();
            starts.dedup();
        }

        ClassPartition::from_starts(n, &starts)
    }
}
