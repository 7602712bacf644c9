//! Frequency table of distinct observations.
//!
//! ## Purpose
//!
//! This module compacts a dataset into sorted distinct values paired with
//! their occurrence counts. The Jenks optimizer partitions this table
//! instead of the raw data, so duplicate values never cost extra work.
//!
//! ## Design notes
//!
//! * **Struct of arrays**: Values and weights are stored in parallel vectors.
//! * **Single pass**: Grouping runs over a sorted copy in O(n) after sorting.
//! * **Immutable**: The table is built once per classification call.
//!
//! ## Invariants
//!
//! * `values` is strictly increasing.
//! * Every weight is at least 1.
//! * The weights sum to the number of observations compacted.
//!
//! ## Non-goals
//!
//! * This module does not filter nulls or non-finite values (caller's responsibility).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sorting::sort_values;

// ============================================================================
// Frequency Table
// ============================================================================

/// Sorted distinct values with their occurrence counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<T> {
    values: Vec<T>,
    weights: Vec<u64>,
}

impl<T: Float> FrequencyTable<T> {
    /// Build a frequency table from observations in any order.
    pub fn from_values(values: &[T]) -> Self {
        Self::from_sorted(&sort_values(values))
    }

    /// Build a frequency table from observations already sorted ascending.
    pub fn from_sorted(sorted: &[T]) -> Self {
        let mut values: Vec<T> = Vec::new();
        let mut weights: Vec<u64> = Vec::new();

        for &v in sorted {
            match values.last() {
                Some(&last) if last == v => {
                    if let Some(w) = weights.last_mut() {
                        *w += 1;
                    }
                }
                _ => {
                    values.push(v);
                    weights.push(1);
                }
            }
        }

        Self { values, weights }
    }

    /// Number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Distinct values in ascending order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Occurrence counts aligned with [`values`](Self::values).
    #[inline]
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Distinct value at `index`.
    #[inline]
    pub fn value(&self, index: usize) -> T {
        self.values[index]
    }

    /// Occurrence count at `index`.
    #[inline]
    pub fn weight(&self, index: usize) -> u64 {
        self.weights[index]
    }

    /// Total number of observations represented by the table.
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().sum()
    }

    /// Largest absolute value in the table, zero when empty.
    pub fn largest_magnitude(&self) -> T {
        match (self.values.first(), self.values.last()) {
            (Some(&lo), Some(&hi)) => lo.abs().max(hi.abs()),
            _ => T::zero(),
        }
    }

    /// Copy of the table with every value multiplied by `factor`.
    ///
    /// Weights and indices are unchanged. With a power-of-two `factor`
    /// values only change where they underflow, which can make
    /// neighbouring entries equal.
    pub fn scaled(&self, factor: T) -> Self {
        Self {
            values: self.values.iter().map(|&v| v * factor).collect(),
            weights: self.weights.clone(),
        }
    }
}
