//! fastBreaks Parallel Classification Examples
//!
//! This example demonstrates features specific to `fastBreaks`:
//! - Parallel Jenks restarts using `rayon`
//! - Sequential fallback
//! - Identical results in both modes
//! - Choosing the method by name

use fastBreaks::prelude::*;
use std::time::Instant;

fn main() -> Result<(), BreaksError> {
    println!("{}", "=".repeat(80));
    println!("fastBreaks Parallel Classification Examples");
    println!("{}", "=".repeat(80));
    println!();

    let values = synthetic_incomes(50_000);

    example_1_parallel_execution(&values)?;
    example_2_sequential_fallback(&values)?;
    example_3_method_comparison(&values)?;

    Ok(())
}

/// Right-skewed synthetic data with many repeated values.
fn synthetic_incomes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = ((i * 7919) % 10_007) as f64 / 10_007.0;
            (1_000.0 * (t * 4.0).exp()).round()
        })
        .collect()
}

/// Example 1: Parallel Execution
/// Demonstrates the default parallel execution mode
fn example_1_parallel_execution(values: &[f64]) -> Result<(), BreaksError> {
    println!("Example 1: Parallel Execution");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let classifier = Breaks::new()
        .classes(6)
        .method(Jenks)
        .iterations(32) // 32 local-search runs
        .parallel(true) // Enable parallel execution (default)
        .return_diagnostics()
        .build()?;

    let result = classifier.classify_slice(values)?;
    let duration = start.elapsed();

    println!("Classified {} values in {:?}", values.len(), duration);
    println!("Execution mode: Parallel");
    println!("{}", result);

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Demonstrates explicitly disabling parallelism
fn example_2_sequential_fallback(values: &[f64]) -> Result<(), BreaksError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let build = |parallel: bool| {
        Breaks::new()
            .classes(6)
            .method(Jenks)
            .iterations(32)
            .parallel(parallel)
            .build()
    };

    let start = Instant::now();
    let sequential = build(false)?.classify_slice(values)?;
    let seq_time = start.elapsed();

    let start = Instant::now();
    let parallel = build(true)?.classify_slice(values)?;
    let par_time = start.elapsed();

    println!("Sequential: {:?}", seq_time);
    println!("Parallel:   {:?}", par_time);
    println!(
        "Same boundaries: {}",
        sequential.boundaries == parallel.boundaries
    );

    println!();
    Ok(())
}

/// Example 3: Method Comparison
/// Runs every method selected by name over the same data
fn example_3_method_comparison(values: &[f64]) -> Result<(), BreaksError> {
    println!("Example 3: Method Comparison");
    println!("{}", "-".repeat(80));

    for name in ["equal_interval", "quantile", "head_tail", "natural_breaks"] {
        let result = Breaks::new()
            .classes(5)
            .method_name(name)
            .build()?
            .classify_slice(values)?;

        let boundaries: Vec<String> = result
            .boundaries
            .iter()
            .map(|b| format!("{:.0}", b))
            .collect();
        println!("{:<16} [{}]", name, boundaries.join(", "));
    }

    println!();
    Ok(())
}
