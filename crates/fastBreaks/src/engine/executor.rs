//! Parallel restart pass for Jenks natural breaks.
//!
//! ## Purpose
//!
//! This module provides the restart pass that is injected into the `breaks`
//! crate's Jenks executor. Each random restart is an independent local
//! search, so the restarts are spread across CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential restart pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Order-preserving**: Outcomes are collected in restart order, so the
//!   executor's strict-improvement selection matches the sequential result.
//!
//! ## Invariants
//!
//! * One outcome per starting partition, in input order.
//! * No randomness is consumed here; partitions arrive pre-drawn.
//!
//! ## Non-goals
//!
//! * This module does not choose the best restart (handled by `breaks::executor`).
//! * This module does not draw random partitions.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;
#[cfg(feature = "cpu")]
use tracing::debug;

// External dependencies
use num_traits::Float;

// Export dependencies from breaks crate
use breaks::internals::algorithms::jenks::{LocalSearch, SearchOutcome};
use breaks::internals::primitives::frequency::FrequencyTable;
use breaks::internals::primitives::partition::ClassPartition;

// ============================================================================
// Parallel Restart Function
// ============================================================================

/// Run one local search per starting partition in parallel.
#[cfg(feature = "cpu")]
pub fn restart_pass_parallel<T>(
    table: &FrequencyTable<T>,
    starts: &[ClassPartition],
    sdam: T,
    max_search: usize,
) -> Vec<SearchOutcome<T>>
where
    T: Float + Send + Sync,
{
    debug!(
        restarts = starts.len(),
        threads = rayon::current_num_threads(),
        "jenks parallel restart pass"
    );

    let search = LocalSearch::new(max_search);
    starts
        .par_iter()
        .map(|start| search.run(table, start.clone(), sdam))
        .collect()
}
