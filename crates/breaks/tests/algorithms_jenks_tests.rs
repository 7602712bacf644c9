#![cfg(feature = "dev")]
//! Tests for the Jenks local-search optimizer.
//!
//! These tests verify single local-search runs from the equal-count
//! partition: the final partitions on reference data sets, the reported
//! fit, and the invariants that hold for every accepted or probed
//! partition.
//!
//! ## Test Organization
//!
//! 1. **Reference Data** - Known partitions and fits
//! 2. **Run Invariants** - Coverage and non-decreasing GVF
//! 3. **Termination** - Stop conditions and iteration caps

use approx::assert_relative_eq;

use breaks::internals::algorithms::jenks::{DEFAULT_MAX_SEARCH, LocalSearch, SearchStep};
use breaks::internals::math::statistics::sdam;
use breaks::internals::primitives::frequency::FrequencyTable;
use breaks::internals::primitives::partition::ClassPartition;

/// Run one local search from the equal-count split.
fn search(values: &[f64], k: usize) -> (FrequencyTable<f64>, Vec<(usize, usize)>, f64, usize) {
    let table = FrequencyTable::from_values(values);
    let sdam = sdam(&table);
    let outcome = LocalSearch::default().run(&table, ClassPartition::equal_count(table.len(), k), sdam);
    let ranges = outcome
        .partition
        .ranges()
        .iter()
        .map(|r| (r.start, r.end))
        .collect();
    (table, ranges, outcome.fit_score, outcome.steps)
}

// ============================================================================
// Reference Data Tests
// ============================================================================

/// Test the Fibonacci sample, where the search moves entries several times.
#[test]
fn test_fibonacci_three_classes() {
    let values = [1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];
    let (_, ranges, fit, steps) = search(&values, 3);

    assert_eq!(ranges, vec![(0, 4), (5, 7), (8, 8)]);
    assert_relative_eq!(fit, 2588.1, epsilon = 1e-9);
    assert_eq!(steps, 5);
}

/// Test well separated clusters, which the initial split already matches.
#[test]
fn test_separated_clusters() {
    let values = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0];
    let (_, ranges, fit, steps) = search(&values, 3);

    assert_eq!(ranges, vec![(0, 2), (3, 5), (6, 8)]);
    assert_relative_eq!(fit, 542.0, epsilon = 1e-9);
    // Tied deviations leave nothing to move
    assert_eq!(steps, 2);
}

/// Test skewed data with an isolated maximum.
#[test]
fn test_isolated_maximum() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0, 101.0, 102.0, 500.0];
    let (_, ranges, fit, _) = search(&values, 3);

    assert_eq!(ranges, vec![(0, 4), (5, 7), (8, 8)]);
    assert_relative_eq!(fit, 206_300.888_888_888_9, epsilon = 1e-6);
}

/// Test a uniform sequence split into four classes.
#[test]
fn test_uniform_four_classes() {
    let values: Vec<f64> = (1..=20).map(f64::from).collect();
    let (_, ranges, fit, _) = search(&values, 4);

    assert_eq!(ranges, vec![(0, 4), (5, 9), (10, 14), (15, 19)]);
    assert_relative_eq!(fit, 625.0, epsilon = 1e-9);
}

/// Test that the optimizer works on `f32` data.
#[test]
fn test_f32_support() {
    let values = [5.0f32, 1.0, 4.0, 2.0, 3.0];
    let table = FrequencyTable::from_values(&values);
    let outcome = LocalSearch::default().run(&table, ClassPartition::equal_count(5, 2), sdam(&table));

    assert_eq!(outcome.partition, ClassPartition::from_starts(5, &[3]));
    assert_relative_eq!(outcome.fit_score, 7.5f32, epsilon = 1e-4);
}

// ============================================================================
// Run Invariants Tests
// ============================================================================

/// Test that every accepted and probed partition covers the table.
#[test]
fn test_every_partition_covers_table() {
    let values: Vec<f64> = (0..60).map(|i| ((i * i) % 37) as f64 * 1.5).collect();
    let table = FrequencyTable::from_values(&values);
    let n = table.len();
    let mut seen = 0;

    LocalSearch::default().run_observed(&table, ClassPartition::equal_count(n, 5), sdam(&table), |step| {
        let partition = match step {
            SearchStep::Accepted { partition, .. } | SearchStep::Probed { partition } => partition,
        };
        assert_eq!(partition.len(), 5);
        assert!(partition.covers(n), "{partition:?}");
        seen += 1;
    });

    assert!(seen > 0);
}

/// Test that the accepted GVF never decreases within a run.
#[test]
fn test_accepted_gvf_non_decreasing() {
    let values = [1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];
    let table = FrequencyTable::from_values(&values);
    let sdam = sdam(&table);
    let mut accepted = Vec::new();

    let outcome = LocalSearch::default().run_observed(&table, ClassPartition::equal_count(table.len(), 3), sdam, |step| {
        if let SearchStep::Accepted { gvf, .. } = step {
            accepted.push(gvf);
        }
    });

    assert_eq!(accepted.len(), 4);
    assert!(accepted.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*accepted.last().unwrap(), outcome.fit_score);
    assert!(outcome.fit_score <= sdam);
}

// ============================================================================
// Termination Tests
// ============================================================================

/// Test that a capped run reports non-convergence.
#[test]
fn test_max_search_cap() {
    let values = [1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];
    let table = FrequencyTable::from_values(&values);
    let outcome = LocalSearch::new(2).run(&table, ClassPartition::equal_count(table.len(), 3), sdam(&table));

    assert_eq!(outcome.steps, 2);
    assert!(!outcome.converged);
    assert!(outcome.partition.covers(table.len()));
}

/// Test that an unbounded-looking run converges well before the default cap.
#[test]
fn test_converges_before_default_cap() {
    let values: Vec<f64> = (1..=20).map(f64::from).collect();
    let table = FrequencyTable::from_values(&values);
    let outcome = LocalSearch::default().run(&table, ClassPartition::equal_count(20, 4), sdam(&table));

    assert!(outcome.converged);
    assert!(outcome.steps < DEFAULT_MAX_SEARCH);
}

/// Test a single class, which has no boundary to move.
#[test]
fn test_single_class() {
    let table = FrequencyTable::from_values(&[3.0, 1.0, 2.0]);
    let outcome = LocalSearch::default().run(&table, ClassPartition::equal_count(3, 1), sdam(&table));

    assert_eq!(outcome.partition, ClassPartition::equal_count(3, 1));
    assert!(outcome.converged);
}
