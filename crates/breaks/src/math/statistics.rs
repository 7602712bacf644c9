//! Weighted class statistics over the frequency table.
//!
//! ## Purpose
//!
//! This module computes the weighted mean and the weighted sum of squared
//! deviations for a contiguous range of the frequency table. The Jenks
//! optimizer calls it once per class on setup and afterwards only for the
//! classes a move touched.
//!
//! ## Key concepts
//!
//! * **Deviation**: `sum((mean - v_j)^2 * w_j)` over the range.
//! * **SDAM**: the deviation of the whole table around the grand mean.
//! * **Normalising scale**: a power of two that shrinks very large values
//!   until their squared deviations fit in `T`. Multiplying by a power of two
//!   is exact, so data that needs no scaling is computed bit for bit as is.
//!
//! ## Invariants
//!
//! * Deviation is non-negative.
//! * Means of finite values are finite; deviations saturate to `+inf` only
//!   when the true value exceeds the range of `T`.
//! * Cost is linear in the size of the range.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::frequency::FrequencyTable;
use crate::primitives::partition::ClassRange;

/// Weighted mean and deviation of one class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStats<T> {
    /// Weighted mean of the values in the class.
    pub mean: T,

    /// Weighted sum of squared deviations from `mean`.
    pub deviation: T,
}

impl<T: Float> ClassStats<T> {
    /// Compute statistics for the table entries in `range`.
    pub fn compute(table: &FrequencyTable<T>, range: ClassRange) -> Self {
        let values = &table.values()[range.start..=range.end];
        let weights = &table.weights()[range.start..=range.end];

        // Sorted range: the extremes bound every magnitude
        let magnitude = values[0].abs().max(values[values.len() - 1].abs());
        let scale = normalising_scale(magnitude);

        let mut sum = T::zero();
        let mut total = T::zero();
        for (&v, &w) in values.iter().zip(weights) {
            let w = T::from(w).unwrap_or(T::one());
            sum = sum + v * scale * w;
            total = total + w;
        }
        let mean = sum / total;

        let mut deviation = T::zero();
        for (&v, &w) in values.iter().zip(weights) {
            let d = mean - v * scale;
            deviation = deviation + d * d * T::from(w).unwrap_or(T::one());
        }

        Self {
            mean: mean / scale,
            deviation: deviation / scale / scale,
        }
    }
}

/// Sum of squared deviations of the whole table from its weighted mean.
///
/// Returns zero for an empty table.
pub fn sdam<T: Float>(table: &FrequencyTable<T>) -> T {
    if table.is_empty() {
        return T::zero();
    }
    ClassStats::compute(
        table,
        ClassRange {
            start: 0,
            end: table.len() - 1,
        },
    )
    .deviation
}

/// Sum of the deviations of all classes.
#[inline]
pub fn total_deviation<T: Float>(stats: &[ClassStats<T>]) -> T {
    stats.iter().fold(T::zero(), |acc, s| acc + s.deviation)
}

/// Arithmetic mean of `values`, or `None` when empty.
///
/// Never overflows for finite input.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let magnitude = values.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()));
    let scale = normalising_scale(magnitude);

    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v * scale);
    Some(sum / T::from(values.len())? / scale)
}

/// Power of two bringing `magnitude` below `sqrt(T::MAX) / 2^32`.
///
/// Values scaled by it can be summed and squared, with up to `2^32`-fold
/// weights, without overflow. Returns one when no scaling is needed.
pub fn normalising_scale<T: Float>(magnitude: T) -> T {
    let limit = T::max_value().sqrt() / T::from(1u64 << 32).unwrap_or(T::one());
    let half = T::one() / (T::one() + T::one());

    let mut scale = T::one();
    while magnitude.is_finite() && magnitude * scale > limit {
        scale = scale * half;
    }
    scale
}
