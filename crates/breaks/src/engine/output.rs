//! Output types for classification.
//!
//! ## Purpose
//!
//! This module defines [`ClassificationResult`], the single output type of
//! every classification method: the boundary sequence, which class edge it
//! records, the Jenks fit score, and optional diagnostics.
//!
//! ## Design notes
//!
//! * **Uniform**: All four methods return the same structure.
//! * **No data is not an error**: An empty result has no boundaries.
//! * **Ergonomics**: Implements `Display` for a human-readable class table.
//!
//! ## Invariants
//!
//! * Boundaries are non-decreasing.
//! * `fit_score` is `Some` only for Jenks on non-empty input.
//! * `min`/`max` are `Some` exactly when the input had observations.
//!
//! ## Non-goals
//!
//! * This module does not perform classification.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::method::Method;
use crate::evaluation::assignment::{BoundaryKind, assign_class};
use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Class boundaries produced by a classification method.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult<T> {
    /// Method that produced the boundaries.
    pub method: Method,

    /// Number of classes requested.
    pub classes: usize,

    /// Class boundaries in class order.
    pub boundaries: Vec<T>,

    /// Whether each boundary is a class's upper or lower edge.
    pub boundary_kind: BoundaryKind,

    /// Number of non-null observations classified.
    pub observations: usize,

    /// Smallest observation (lower bound of the first class).
    pub min: Option<T>,

    /// Largest observation.
    pub max: Option<T>,

    /// Jenks goodness of variance fit (`SDAM - sum of class deviations`).
    pub fit_score: Option<T>,

    /// Jenks local-search runs performed.
    pub runs: Option<usize>,

    /// Fit quality metrics, when requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> ClassificationResult<T> {
    /// Empty result for a dataset without observations.
    pub fn empty(method: Method, classes: usize, boundary_kind: BoundaryKind) -> Self {
        Self {
            method,
            classes,
            boundaries: Vec::new(),
            boundary_kind,
            observations: 0,
            min: None,
            max: None,
            fit_score: None,
            runs: None,
            diagnostics: None,
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Whether the input had no observations.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Number of classes actually produced.
    pub fn class_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Class index of `value`, or `None` for an empty result.
    ///
    /// Values outside the boundary range clamp to the nearest end class. For
    /// head/tail this puts observations above the last class mean in the last
    /// class rather than leaving them unclassified.
    pub fn class_of(&self, value: T) -> Option<usize> {
        assign_class(&self.boundaries, self.boundary_kind, value)
    }

    /// `(lower, upper)` value range of every class.
    ///
    /// For upper-edge boundaries a class holds `lower < v <= upper` (the first
    /// class also holds its lower bound); for lower-edge boundaries it holds
    /// `lower <= v < upper` (the last class also holds its upper bound).
    pub fn class_ranges(&self) -> Vec<(T, T)> {
        let (Some(min), Some(max)) = (self.min, self.max) else {
            return Vec::new();
        };
        let b = &self.boundaries;

        match self.boundary_kind {
            BoundaryKind::Upper => (0..b.len())
                .map(|i| (if i == 0 { min } else { b[i - 1] }, b[i]))
                .collect(),
            BoundaryKind::Lower => (0..b.len())
                .map(|i| (b[i], if i + 1 < b.len() { b[i + 1] } else { max }))
                .collect(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for ClassificationResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Method:       {}", self.method)?;
        writeln!(f, "  Observations: {}", self.observations)?;
        writeln!(f, "  Classes:      {}", self.class_count())?;
        if let Some(score) = self.fit_score {
            writeln!(f, "  Fit score:    {}", score)?;
        }
        if let Some(runs) = self.runs {
            writeln!(f, "  Runs:         {}", runs)?;
        }
        writeln!(f)?;

        if self.is_empty() {
            return writeln!(f, "No data.");
        }

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Classes:")?;
        let counts = self.diagnostics.as_ref().map(|d| &d.class_counts);

        write!(f, "{:>6} {:>14} {:>14}", "Class", "Lower", "Upper")?;
        if counts.is_some() {
            write!(f, " {:>8}", "Count")?;
        }
        writeln!(f)?;

        let line_width = 36 + if counts.is_some() { 9 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        for (i, (lower, upper)) in self.class_ranges().into_iter().enumerate() {
            write!(f, "{:>6} {:>14.6} {:>14.6}", i + 1, lower, upper)?;
            if let Some(c) = counts.and_then(|c| c.get(i)) {
                write!(f, " {:>8}", c)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
