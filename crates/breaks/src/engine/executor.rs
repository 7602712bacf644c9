//! Execution engine for Jenks natural breaks.
//!
//! ## Purpose
//!
//! This module orchestrates the Jenks optimizer: it handles the small-table
//! fallback, runs local search from the equal-count partition, draws the
//! random restart partitions from a call-scoped generator, evaluates them
//! and extracts boundaries from the best partition.
//!
//! ## Design notes
//!
//! * **Call-scoped randomness**: A fresh [`PartitionSampler`] is seeded per call.
//! * **Injectable restart pass**: Restart evaluation goes through a plain
//!   function pointer so a parallel crate can replace the sequential loop.
//! * **Order-stable selection**: Restart partitions are drawn up front in
//!   restart order and a later restart only wins with a strictly better fit,
//!   so sequential and parallel evaluation agree bit for bit.
//! * **Overflow-free search**: Tables with very large magnitudes are searched
//!   after an exact power-of-two rescale, so class deviations stay finite.
//!   Only the reported fit score and SDAM are taken back to data units.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The returned fit score is at least the fit score of the equal-count run.
//! * Identical tables and configurations produce identical outputs.
//! * Work is bounded by `iterations * max_search` local-search steps.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by `validator`).
//! * This module does not build the frequency table (caller's responsibility).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::jenks::{DEFAULT_MAX_SEARCH, LocalSearch, SearchOutcome};
use crate::math::statistics::{normalising_scale, sdam};
use crate::primitives::frequency::FrequencyTable;
use crate::primitives::partition::ClassPartition;
use crate::primitives::random::{DEFAULT_SEED, PartitionSampler};

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom restart pass function
#[doc(hidden)]
pub type RestartPassFn<T> = fn(
    &FrequencyTable<T>, // table
    &[ClassPartition],  // starting partitions, in restart order
    T,                  // sdam
    usize,              // max_search
) -> Vec<SearchOutcome<T>>; // one outcome per starting partition, same order

/// Output from Jenks execution.
#[derive(Debug, Clone, PartialEq)]
pub struct JenksOutput<T> {
    /// One boundary per class, lower or upper edge depending on `invert`.
    pub boundaries: Vec<T>,

    /// GVF of the chosen partition (`SDAM - sum of class deviations`).
    ///
    /// Saturates to `+inf` when it exceeds the range of `T`; never NaN.
    pub fit_score: T,

    /// Squared deviations of the whole table from its mean, saturating like `fit_score`.
    pub sdam: T,

    /// Chosen partition, `None` when the fallback path was taken.
    pub partition: Option<ClassPartition>,

    /// Number of local-search runs performed.
    pub runs: usize,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for Jenks execution.
#[derive(Debug, Clone)]
pub struct JenksConfig<T> {
    /// Number of classes.
    pub classes: usize,

    /// Local-search runs including the equal-count run; 0 selects the default.
    pub iterations: usize,

    /// Maximum iterations per local-search run.
    pub max_search: usize,

    /// Report upper class edges instead of lower ones.
    pub invert: bool,

    /// Seed for the restart generator.
    pub seed: u64,

    /// Custom restart pass function.
    #[doc(hidden)]
    pub custom_restart_pass: Option<RestartPassFn<T>>,
}

impl<T> Default for JenksConfig<T> {
    fn default() -> Self {
        Self {
            classes: 5,
            iterations: 0,
            max_search: DEFAULT_MAX_SEARCH,
            invert: false,
            seed: DEFAULT_SEED,
            custom_restart_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Jenks multi-restart executor.
pub struct JenksExecutor;

impl JenksExecutor {
    /// Heuristic run count for `n` distinct values: `floor(ln n) + 1`.
    pub fn default_iterations(n: usize) -> usize {
        if n <= 1 {
            return 1;
        }
        (n as f64).ln().floor() as usize + 1
    }

    /// Classify `table` into `config.classes` natural-break classes.
    ///
    /// Returns `None` for an empty table.
    pub fn run_with_config<T: Float + Debug>(
        table: &FrequencyTable<T>,
        config: &JenksConfig<T>,
    ) -> Option<JenksOutput<T>> {
        if table.is_empty() {
            return None;
        }

        let n = table.len();
        let k = config.classes;
        let sdam = sdam(table);

        // Nothing to partition: every distinct value is its own class
        if n <= k {
            debug!(n, k, "jenks fallback to distinct values");
            return Some(JenksOutput {
                boundaries: table.values().to_vec(),
                fit_score: sdam,
                sdam,
                partition: None,
                runs: 0,
            });
        }

        let runs = if config.iterations == 0 {
            Self::default_iterations(n)
        } else {
            config.iterations
        };

        // Search in a range where squared deviations cannot overflow
        let scale = normalising_scale(table.largest_magnitude());
        let normalised;
        let search_table = if scale == T::one() {
            table
        } else {
            debug!(scale = ?scale, "jenks searching a rescaled table");
            normalised = table.scaled(scale);
            &normalised
        };
        let search_sdam = if scale == T::one() {
            sdam
        } else {
            self::sdam(search_table)
        };

        let search = LocalSearch::new(config.max_search);
        let mut best = search.run(
            search_table,
            ClassPartition::equal_count(n, k),
            search_sdam,
        );
        debug!(fit_score = ?best.fit_score, steps = best.steps, "jenks equal-count run");

        if runs > 1 {
            let mut sampler = PartitionSampler::new(config.seed);
            let starts: Vec<ClassPartition> = (1..runs).map(|_| sampler.sample(n, k)).collect();

            let pass = config.custom_restart_pass.unwrap_or(restart_pass);
            for (restart, outcome) in pass(search_table, &starts, search_sdam, config.max_search)
                .into_iter()
                .enumerate()
            {
                if outcome.fit_score > best.fit_score {
                    debug!(restart, fit_score = ?outcome.fit_score, "jenks restart improved fit");
                    best = outcome;
                }
            }
        }

        debug!(runs, fit_score = ?best.fit_score, "jenks finished");

        Some(JenksOutput {
            boundaries: extract_boundaries(table, &best.partition, config.invert),
            fit_score: best.fit_score / scale / scale,
            sdam,
            partition: Some(best.partition),
            runs,
        })
    }
}

/// Evaluate each starting partition in order.
pub fn restart_pass<T: Float>(
    table: &FrequencyTable<T>,
    starts: &[ClassPartition],
    sdam: T,
    max_search: usize,
) -> Vec<SearchOutcome<T>> {
    let search = LocalSearch::new(max_search);
    starts
        .iter()
        .map(|start| search.run(table, start.clone(), sdam))
        .collect()
}

/// Lower (or, with `invert`, upper) table value of every class.
pub fn extract_boundaries<T: Float>(
    table: &FrequencyTable<T>,
    partition: &ClassPartition,
    invert: bool,
) -> Vec<T> {
    partition
        .ranges()
        .iter()
        .map(|r| table.value(if invert { r.end } else { r.start }))
        .collect()
}
