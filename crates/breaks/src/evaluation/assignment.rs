//! Assignment of observations to classes.
//!
//! ## Purpose
//!
//! Turns a boundary sequence back into class membership, using the same
//! range predicates downstream renderers apply when styling features.
//!
//! ## Key concepts
//!
//! * **Upper edges** (equal interval, quantile, head/tail, inverted Jenks):
//!   class `i` holds `boundaries[i - 1] < v <= boundaries[i]`; the first class
//!   is closed at the dataset minimum.
//! * **Lower edges** (default Jenks): class `i` holds
//!   `boundaries[i] <= v < boundaries[i + 1]`.
//!
//! ## Invariants
//!
//! * Values outside the boundary range clamp to the first or last class.
//!   Head/tail boundaries are class means, so the largest observations sit
//!   above the last boundary and land in the last class.
//! * The returned class index is always `< boundaries.len()` for non-empty boundaries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Which edge of each class a boundary sequence records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryKind {
    /// Each boundary is the largest value of its class.
    #[default]
    Upper,

    /// Each boundary is the smallest value of its class.
    Lower,
}

/// Class index of `value` for the given boundaries, or `None` without boundaries.
pub fn assign_class<T: Float>(boundaries: &[T], kind: BoundaryKind, value: T) -> Option<usize> {
    if boundaries.is_empty() {
        return None;
    }
    let last = boundaries.len() - 1;

    let class = match kind {
        // First boundary not below the value
        BoundaryKind::Upper => boundaries.partition_point(|&b| b < value).min(last),
        // Last boundary not above the value
        BoundaryKind::Lower => boundaries
            .partition_point(|&b| b <= value)
            .saturating_sub(1),
    };
    Some(class)
}

/// `values` grouped by class, in input order within each class.
pub fn class_members<T: Float>(boundaries: &[T], kind: BoundaryKind, values: &[T]) -> Vec<Vec<T>> {
    let mut members = vec![Vec::new(); boundaries.len()];
    for &v in values {
        if let Some(class) = assign_class(boundaries, kind, v) {
            members[class].push(v);
        }
    }
    members
}
