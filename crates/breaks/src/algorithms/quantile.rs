//! Quantile classification.
//!
//! ## Purpose
//!
//! Places roughly the same number of observations in each class by picking
//! the discrete percentile at `i / k` for `i = 1..=k`. Every boundary is an
//! existing data point.
//!
//! ## Invariants
//!
//! * Boundaries are non-decreasing.
//! * The last boundary is the dataset maximum.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::rank::percentile_disc;

/// Upper class edges for `k` quantile classes over sorted `values`.
///
/// Returns an empty vector for empty input. Requires `k >= 1`.
pub fn quantile_breaks<T: Float>(sorted: &[T], k: usize) -> Vec<T> {
    (1..=k)
        .filter_map(|i| percentile_disc(sorted, i, k))
        .collect()
}
