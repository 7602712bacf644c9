//! Diagnostic metrics for classification quality.
//!
//! ## Purpose
//!
//! This module measures how well a set of class boundaries summarises the
//! data, independent of the method that produced them. Observations are
//! assigned to classes with the same predicates a renderer would use, and
//! the within-class spread is compared to the spread of the whole dataset.
//!
//! ## Design notes
//!
//! * **Method-agnostic**: Works from boundaries and observations only.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **SDAM**: Squared deviations from the array (dataset) mean.
//! * **SDCM**: Squared deviations from the class means, summed over classes.
//! * **GVF**: `1 - SDCM / SDAM`; 1 means every class is internally uniform.
//!   The ratio is formed on power-of-two rescaled values, so it stays finite
//!   when SDAM and SDCM themselves saturate to `+inf`.
//!
//! ## Invariants
//!
//! * `0 <= GVF <= 1` up to floating-point rounding.
//! * Class counts sum to the number of observations. Values beyond the
//!   boundary range are counted in the nearest end class.
//!
//! ## Non-goals
//!
//! * This module does not choose boundaries or compare methods.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::assignment::{BoundaryKind, class_members};
use crate::math::statistics::{mean, normalising_scale};

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for a classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Number of observations in each class.
    pub class_counts: Vec<usize>,

    /// Mean of each class (`None` for empty classes).
    pub class_means: Vec<Option<T>>,

    /// Squared deviations from the dataset mean.
    pub sdam: T,

    /// Squared deviations from the class means.
    pub sdcm: T,

    /// Normalised goodness of variance fit, `1 - SDCM / SDAM`.
    pub gvf: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics for `values` classified by `boundaries`.
    ///
    /// `values` need not be sorted.
    pub fn compute(values: &[T], boundaries: &[T], kind: BoundaryKind) -> Self {
        let members = class_members(boundaries, kind, values);

        let class_counts: Vec<usize> = members.iter().map(Vec::len).collect();
        let class_means: Vec<Option<T>> = members.iter().map(|m| mean(m)).collect();

        let magnitude = values.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()));
        let scale = normalising_scale(magnitude);

        let sdam = match mean(values) {
            Some(m) => squared_deviations(values, m, scale),
            None => T::zero(),
        };

        let sdcm = members
            .iter()
            .zip(&class_means)
            .filter_map(|(m, cm)| cm.map(|cm| squared_deviations(m, cm, scale)))
            .fold(T::zero(), |acc, d| acc + d);

        let gvf = if sdam > T::zero() {
            T::one() - sdcm / sdam
        } else {
            T::one()
        };

        Self {
            class_counts,
            class_means,
            sdam: sdam / scale / scale,
            sdcm: sdcm / scale / scale,
            gvf,
        }
    }
}

/// Sum of squared deviations of `values` from `center`, both multiplied by `scale`.
fn squared_deviations<T: Float>(values: &[T], center: T, scale: T) -> T {
    values.iter().fold(T::zero(), |acc, &v| {
        let d = v * scale - center * scale;
        acc + d * d
    })
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Classification Diagnostics:")?;
        writeln!(f, "  SDAM: {:.6}", self.sdam)?;
        writeln!(f, "  SDCM: {:.6}", self.sdcm)?;
        writeln!(f, "  GVF:  {:.6}", self.gvf)?;
        Ok(())
    }
}
