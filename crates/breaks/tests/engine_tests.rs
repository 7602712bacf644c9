#![cfg(feature = "dev")]
//! Tests for the Jenks executor and parameter validation.
//!
//! The executor wraps the local search with the fallback for small
//! tables, the seeded multi-restart loop and boundary extraction.
//!
//! ## Test Organization
//!
//! 1. **Fallback** - Tables with no more entries than classes
//! 2. **Single Run** - Equal-count search and boundary extraction
//! 3. **Restarts** - Seeding, determinism and restart passes
//! 4. **Validation** - Parameter and input checks

use approx::assert_relative_eq;

use breaks::internals::algorithms::jenks::SearchOutcome;
use breaks::internals::engine::executor::{JenksConfig, JenksExecutor, restart_pass};
use breaks::internals::engine::validator::{MAX_ITERATIONS, Validator};
use breaks::internals::primitives::errors::BreaksError;
use breaks::internals::primitives::frequency::FrequencyTable;
use breaks::internals::primitives::partition::ClassPartition;

const FIBONACCI: [f64; 10] = [1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];

fn config(classes: usize, iterations: usize) -> JenksConfig<f64> {
    JenksConfig {
        classes,
        iterations,
        ..Default::default()
    }
}

/// Restart pass that evaluates nothing.
fn no_restarts(
    _table: &FrequencyTable<f64>,
    _starts: &[ClassPartition],
    _sdam: f64,
    _max_search: usize,
) -> Vec<SearchOutcome<f64>> {
    Vec::new()
}

/// Restart pass that evaluates the starts in reverse and restores the order.
fn reversed_restarts(
    table: &FrequencyTable<f64>,
    starts: &[ClassPartition],
    sdam: f64,
    max_search: usize,
) -> Vec<SearchOutcome<f64>> {
    let reversed: Vec<ClassPartition> = starts.iter().rev().cloned().collect();
    let mut outcomes = restart_pass(table, &reversed, sdam, max_search);
    outcomes.reverse();
    outcomes
}

// ============================================================================
// Fallback Tests
// ============================================================================

/// Test that an empty table produces no output.
#[test]
fn test_empty_table() {
    let table = FrequencyTable::<f64>::from_values(&[]);

    assert!(JenksExecutor::run_with_config(&table, &config(3, 1)).is_none());
}

/// Test the fallback when distinct values equal the class count.
#[test]
fn test_fallback_distinct_equals_classes() {
    let table = FrequencyTable::from_values(&[0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0]);
    let output = JenksExecutor::run_with_config(&table, &config(2, 5)).unwrap();

    assert_eq!(output.boundaries, vec![0.0, 10.0]);
    assert_relative_eq!(output.fit_score, 200.0);
    assert_eq!(output.fit_score, output.sdam);
    assert_eq!(output.partition, None);
    assert_eq!(output.runs, 0);
}

/// Test the fallback when classes exceed the distinct values.
#[test]
fn test_fallback_more_classes_than_values() {
    let table = FrequencyTable::from_values(&[3.0, 1.0, 2.0, 3.0]);
    let output = JenksExecutor::run_with_config(&table, &config(5, 1)).unwrap();

    assert_eq!(output.boundaries, vec![1.0, 2.0, 3.0]);
}

// ============================================================================
// Single Run Tests
// ============================================================================

/// Test lower-edge boundaries from one run.
#[test]
fn test_single_run_lower_edges() {
    let table = FrequencyTable::from_values(&FIBONACCI);
    let output = JenksExecutor::run_with_config(&table, &config(3, 1)).unwrap();

    assert_eq!(output.boundaries, vec![1.0, 13.0, 55.0]);
    assert_relative_eq!(output.fit_score, 2588.1, epsilon = 1e-9);
    assert_relative_eq!(output.sdam, 2850.1, epsilon = 1e-9);
    assert_eq!(output.runs, 1);
}

/// Test upper-edge boundaries from one run.
#[test]
fn test_single_run_upper_edges() {
    let table = FrequencyTable::from_values(&FIBONACCI);
    let cfg = JenksConfig {
        invert: true,
        ..config(3, 1)
    };
    let output = JenksExecutor::run_with_config(&table, &cfg).unwrap();

    assert_eq!(output.boundaries, vec![8.0, 34.0, 55.0]);
}

/// Test that a table near the limit of `f64` still yields a fit score.
#[test]
fn test_single_run_near_max() {
    let table = FrequencyTable::from_values(&[1.0, 2.0, 1.5e308, 1.6e308, 1.7e308]);
    let output = JenksExecutor::run_with_config(&table, &config(2, 1)).unwrap();

    assert_eq!(output.boundaries, vec![1.0, 1.5e308]);
    assert_eq!(output.partition.unwrap().len(), 2);
    assert!(!output.fit_score.is_nan());
    assert!(output.fit_score > 0.0);
    assert!(!output.sdam.is_nan());
}

/// Test the heuristic run count.
#[test]
fn test_default_iterations() {
    assert_eq!(JenksExecutor::default_iterations(0), 1);
    assert_eq!(JenksExecutor::default_iterations(1), 1);
    assert_eq!(JenksExecutor::default_iterations(2), 1);
    assert_eq!(JenksExecutor::default_iterations(9), 3);
    assert_eq!(JenksExecutor::default_iterations(20), 3);
    assert_eq!(JenksExecutor::default_iterations(100), 5);
}

/// Test that zero iterations selects the heuristic run count.
#[test]
fn test_zero_iterations_uses_heuristic() {
    let table = FrequencyTable::from_values(&FIBONACCI);
    let output = JenksExecutor::run_with_config(&table, &config(3, 0)).unwrap();

    assert_eq!(output.runs, 3);
}

// ============================================================================
// Restarts Tests
// ============================================================================

/// Test that restarts never do worse than the equal-count run.
#[test]
fn test_restarts_never_worse() {
    let values: Vec<f64> = (0..80).map(|i| ((i * 31) % 47) as f64 + (i as f64).sqrt()).collect();
    let table = FrequencyTable::from_values(&values);

    let single = JenksExecutor::run_with_config(&table, &config(6, 1)).unwrap();
    let multi = JenksExecutor::run_with_config(&table, &config(6, 12)).unwrap();

    assert!(multi.fit_score >= single.fit_score);
    assert_eq!(multi.runs, 12);
    assert!(multi.partition.unwrap().covers(table.len()));
}

/// Test that the same seed reproduces the same classification.
#[test]
fn test_restarts_deterministic() {
    let values: Vec<f64> = (0..120).map(|i| ((i * 17) % 53) as f64).collect();
    let table = FrequencyTable::from_values(&values);
    let cfg = JenksConfig {
        seed: 1234,
        ..config(5, 10)
    };

    let a = JenksExecutor::run_with_config(&table, &cfg).unwrap();
    let b = JenksExecutor::run_with_config(&table, &cfg).unwrap();

    assert_eq!(a, b);
}

/// Test that a restart pass returning nothing keeps the first run.
#[test]
fn test_custom_pass_without_outcomes() {
    let table = FrequencyTable::from_values(&FIBONACCI);
    let cfg = JenksConfig {
        custom_restart_pass: Some(no_restarts as _),
        ..config(3, 6)
    };
    let output = JenksExecutor::run_with_config(&table, &cfg).unwrap();

    assert_eq!(output.boundaries, vec![1.0, 13.0, 55.0]);
    assert_eq!(output.runs, 6);
}

/// Test that evaluation order inside a pass does not change the result.
#[test]
fn test_custom_pass_matches_sequential() {
    let values: Vec<f64> = (0..90).map(|i| ((i * 13) % 41) as f64 * 0.5).collect();
    let table = FrequencyTable::from_values(&values);

    let sequential = JenksExecutor::run_with_config(&table, &config(4, 9)).unwrap();
    let custom = JenksExecutor::run_with_config(
        &table,
        &JenksConfig {
            custom_restart_pass: Some(reversed_restarts as _),
            ..config(4, 9)
        },
    )
    .unwrap();

    assert_eq!(sequential, custom);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test rejection of non-finite observations.
#[test]
fn test_validate_values() {
    assert!(Validator::validate_values(&[1.0, 2.0]).is_ok());
    assert!(Validator::validate_values::<f64>(&[]).is_ok());
    assert!(matches!(
        Validator::validate_values(&[1.0, f64::NAN]),
        Err(BreaksError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        Validator::validate_values(&[f64::INFINITY]),
        Err(BreaksError::InvalidNumericValue(_))
    ));
}

/// Test class count and Jenks parameter ranges.
#[test]
fn test_validate_parameters() {
    assert_eq!(Validator::validate_classes(0), Err(BreaksError::InvalidClassCount(0)));
    assert!(Validator::validate_classes(1).is_ok());

    assert!(Validator::validate_iterations(0).is_ok());
    assert!(Validator::validate_iterations(MAX_ITERATIONS).is_ok());
    assert_eq!(
        Validator::validate_iterations(MAX_ITERATIONS + 1),
        Err(BreaksError::InvalidIterations(MAX_ITERATIONS + 1))
    );

    assert_eq!(Validator::validate_max_search(0), Err(BreaksError::InvalidMaxSearch(0)));
    assert!(Validator::validate_max_search(50).is_ok());
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("classes")),
        Err(BreaksError::DuplicateParameter { parameter: "classes" })
    );
}
