//! Jenks natural breaks local search.
//!
//! ## Purpose
//!
//! This module implements a single local-search run of the Jenks optimizer.
//! Starting from a partition of the frequency table, it repeatedly moves
//! entries from the class with the largest deviation toward the class with
//! the smallest, keeping each move only if the goodness of variance fit
//! (`GVF = SDAM - sum(class deviations)`) improves.
//!
//! ## Design notes
//!
//! * **Incremental statistics**: After a move only the classes between the
//!   donor and the receiver are recomputed.
//! * **Exponential steps**: The move size doubles after every probe and is
//!   divided by 8 when a probe fails.
//! * **Snapshots**: The last accepted partition is kept by value; a failed
//!   probe restores it together with the saved statistics of the touched span.
//! * **Bounded**: At most `max_search` iterations run.
//!
//! ## Key concepts
//!
//! For each iteration:
//! 1. Score the current partition.
//! 2. On no improvement, stop if the step is already small (<= 2) or the
//!    minimum and maximum classes coincide; otherwise shrink the step and
//!    roll back to the last accepted partition.
//! 3. Accept and snapshot the partition.
//! 4. Find the lowest- and highest-deviation classes (first occurrence wins).
//! 5. Move up to `size(max) - 1` entries from the max class toward the min class.
//! 6. Recompute statistics for the touched span, saving the old values.
//! 7. Double the step.
//!
//! ## Invariants
//!
//! * Every partition produced covers `[0, n - 1]` with non-empty classes.
//! * The accepted GVF never decreases.
//!
//! ## Non-goals
//!
//! * This module does not draw random partitions or pick among restarts
//!   (handled by the executor).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::math::statistics::{ClassStats, total_deviation};
use crate::primitives::frequency::FrequencyTable;
use crate::primitives::partition::ClassPartition;

// ============================================================================
// Search Types
// ============================================================================

/// Default number of local-search iterations per run.
pub const DEFAULT_MAX_SEARCH: usize = 50;

/// Observable event during a local-search run.
#[derive(Debug, Clone, Copy)]
pub enum SearchStep<'a, T> {
    /// A partition was accepted with the given GVF.
    Accepted {
        /// Accepted partition.
        partition: &'a ClassPartition,
        /// GVF of the accepted partition.
        gvf: T,
    },

    /// A move produced a candidate partition that will be scored next.
    Probed {
        /// Candidate partition.
        partition: &'a ClassPartition,
    },
}

/// Result of one local-search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    /// Best partition found.
    pub partition: ClassPartition,

    /// GVF of `partition`.
    pub fit_score: T,

    /// Iterations performed.
    pub steps: usize,

    /// Whether the run stopped on its own rather than exhausting `max_search`.
    pub converged: bool,
}

// ============================================================================
// Local Search
// ============================================================================

/// Local-search optimizer for one starting partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalSearch {
    /// Maximum iterations per run.
    pub max_search: usize,
}

impl Default for LocalSearch {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SEARCH)
    }
}

impl LocalSearch {
    /// Create a local search bounded by `max_search` iterations.
    pub fn new(max_search: usize) -> Self {
        Self { max_search }
    }

    /// Optimize `initial` over `table`.
    pub fn run<T: Float>(
        &self,
        table: &FrequencyTable<T>,
        initial: ClassPartition,
        sdam: T,
    ) -> SearchOutcome<T> {
        self.run_observed(table, initial, sdam, |_| {})
    }

    /// Optimize `initial` over `table`, reporting every accepted and probed partition.
    pub fn run_observed<T, F>(
        &self,
        table: &FrequencyTable<T>,
        initial: ClassPartition,
        sdam: T,
        mut observer: F,
    ) -> SearchOutcome<T>
    where
        T: Float,
        F: FnMut(SearchStep<'_, T>),
    {
        let mut classes = initial;
        let mut stats: Vec<ClassStats<T>> = classes
            .ranges()
            .iter()
            .map(|&range| ClassStats::compute(table, range))
            .collect();

        let mut best_classes = classes.clone();
        let mut best_stats = stats.clone();
        let mut gvf = T::zero();

        let mut move_elements: usize = 1;
        let mut class_min = 0;
        let mut class_max = 0;
        let mut span = (0, 0);

        let mut steps = 0;
        let mut converged = false;

        for _ in 0..self.max_search {
            steps += 1;
            let mut new_gvf = sdam - total_deviation(&stats);

            if new_gvf <= gvf {
                if move_elements <= 2 || class_min == class_max {
                    trace!(steps, move_elements, "local search stopped");
                    converged = true;
                    break;
                }

                // Shrink the step and return to the last accepted partition
                move_elements = (move_elements / 8).max(1);
                classes = best_classes.clone();
                stats[span.0..=span.1].copy_from_slice(&best_stats[span.0..=span.1]);
                new_gvf = gvf;
                trace!(steps, move_elements, "probe rejected, rolled back");
            }

            gvf = new_gvf;
            best_classes = classes.clone();
            observer(SearchStep::Accepted {
                partition: &best_classes,
                gvf,
            });

            (class_min, class_max) = deviation_extremes(&stats);

            // Never empty the donor class
            move_elements = move_elements.min(classes.size(class_max) - 1);
            classes.transfer(class_max, class_min, move_elements);
            observer(SearchStep::Probed {
                partition: &classes,
            });

            span = (class_min.min(class_max), class_min.max(class_max));
            for class in span.0..=span.1 {
                best_stats[class] = stats[class];
                stats[class] = ClassStats::compute(table, classes.range(class));
            }

            move_elements *= 2;
        }

        SearchOutcome {
            partition: best_classes,
            fit_score: gvf,
            steps,
            converged,
        }
    }
}

/// Indices of the lowest- and highest-deviation classes, first occurrence winning ties.
fn deviation_extremes<T: Float>(stats: &[ClassStats<T>]) -> (usize, usize) {
    let mut min = 0;
    let mut max = 0;
    for (i, s) in stats.iter().enumerate() {
        if s.deviation < stats[min].deviation {
            min = i;
        }
        if s.deviation > stats[max].deviation {
            max = i;
        }
    }
    (min, max)
}
