//! Head/tail breaks for heavy-tailed distributions.
//!
//! ## Purpose
//!
//! Repeatedly splits the data around its mean and recurses into the tail
//! (values above the mean). Suited to distributions where most observations
//! sit below the mean, such as city sizes or road densities.
//!
//! ## Key concepts
//!
//! 1. The first boundary is the mean of the whole dataset.
//! 2. Each further boundary is the mean of the values strictly above the
//!    previous boundary.
//! 3. Splitting stops early once the tail is empty.
//!
//! ## Invariants
//!
//! * Boundaries are non-decreasing.
//! * At most `k` boundaries are returned.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::statistics::mean;

/// Head/tail boundaries for up to `k` classes over sorted `values`.
///
/// With fewer observations than classes the sorted data is returned as is.
pub fn head_tail_breaks<T: Float>(sorted: &[T], k: usize) -> Vec<T> {
    if sorted.len() < k {
        return sorted.to_vec();
    }

    let mut breaks = Vec::with_capacity(k);
    let Some(mut previous) = mean(sorted) else {
        return breaks;
    };
    breaks.push(previous);

    for _ in 1..k {
        let tail = &sorted[sorted.partition_point(|&v| v <= previous)..];
        let Some(next) = mean(tail) else {
            break;
        };
        breaks.push(next);
        previous = next;
    }

    breaks
}
