//! Equal-interval classification.
//!
//! ## Purpose
//!
//! Splits the value range `[min, max]` into `k` classes of equal width and
//! returns the upper edge of each class. The lower edge of the first class
//! is the dataset minimum.
//!
//! ## Invariants
//!
//! * Exactly `k` boundaries for non-empty input.
//! * The last boundary is exactly the dataset maximum.
//! * When `min == max` every boundary equals `min`.
//! * Boundaries stay finite and non-decreasing even when `max - min`
//!   overflows `T`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Upper class edges for `k` equal-width classes over sorted `values`.
///
/// Returns an empty vector for empty input. Requires `k >= 1`.
pub fn equal_interval_breaks<T: Float>(sorted: &[T], k: usize) -> Vec<T> {
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };

    let k_t = T::from(k).unwrap_or(T::one());
    let step = (max - min) / k_t;
    let wide = !step.is_finite();

    (1..=k)
        .map(|i| {
            let i_t = T::from(i).unwrap_or(T::zero());
            if i == k {
                max
            } else if wide {
                // Interpolate without forming the overflowing range
                let rest = T::from(k - i).unwrap_or(T::zero());
                min / k_t * rest + max / k_t * i_t
            } else {
                min + i_t * step
            }
        })
        .collect()
}
