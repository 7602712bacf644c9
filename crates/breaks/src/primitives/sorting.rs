//! Sorting utilities for classification input.
//!
//! ## Purpose
//!
//! Every classifier works on observations in ascending order: equal interval
//! needs the extremes, quantile and head/tail need order statistics, and the
//! frequency table is built from a sorted run.
//!
//! ## Design notes
//!
//! * **Fast path**: Already-sorted input is copied without sorting.
//! * **Stability**: Uses a stable sort so equal values keep their relative order.
//!
//! ## Invariants
//!
//! * The returned sequence is non-decreasing for finite input.
//! * The returned sequence is a permutation of the input.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Check whether `values` is already in non-decreasing order.
#[inline]
pub fn is_sorted<T: Float>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Return a copy of `values` sorted in ascending order.
#[inline]
pub fn sort_values<T: Float>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();

    // Fast path: nothing to do for pre-sorted data
    if is_sorted(&sorted) {
        return sorted;
    }

    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}
