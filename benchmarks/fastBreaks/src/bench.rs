//! Class breaks benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of every method (1K to 50K values)
//! - Jenks parameters (restart count, classes)
//! - Real-world scenarios (incomes, elevations, rounded survey data)
//! - Pathological cases (constant data, heavy duplication, outliers)
//!
//! For serial Jenks restarts, use `FASTBREAKS_MODE=serial cargo bench`.
//! For parallel Jenks restarts, use `FASTBREAKS_MODE=parallel cargo bench`.

use breaks::internals::algorithms::jenks::LocalSearch;
use breaks::internals::math::statistics::sdam;
use breaks::internals::primitives::frequency::FrequencyTable;
use breaks::internals::primitives::partition::ClassPartition;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastBreaks::prelude::*;
use rand::prelude::*;
use rand_distr::{LogNormal, Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTBREAKS_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

fn classifier(method: Method, classes: usize, iterations: usize, parallel: bool) -> Classifier<f64> {
    Breaks::new()
        .classes(classes)
        .method(method)
        .iterations(iterations)
        .parallel(parallel)
        .build()
        .unwrap()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate right-skewed income-like data.
fn generate_income_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = LogNormal::new(10.5, 0.8).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate a mixture of three elevation bands.
fn generate_elevation_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bands = [
        Normal::new(120.0, 30.0).unwrap(),
        Normal::new(650.0, 80.0).unwrap(),
        Normal::new(1_800.0, 200.0).unwrap(),
    ];
    (0..size)
        .map(|i| bands[i % 3].sample(&mut rng).max(0.0))
        .collect()
}

/// Generate rounded survey scores (few distinct values).
fn generate_survey_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(50.0, 15.0).unwrap();
    (0..size)
        .map(|_| dist.sample(&mut rng).round().clamp(0.0, 100.0))
        .collect()
}

/// Generate uniform data with 2% extreme outliers.
fn generate_outlier_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = Uniform::new(0.0, 100.0).unwrap();
    let mut values: Vec<f64> = (0..size).map(|_| base.sample(&mut rng)).collect();

    let n_outliers = size / 50;
    for _ in 0..n_outliers {
        let idx = rng.random_range(0..size);
        values[idx] *= 1_000.0;
    }
    values
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(30);

    for size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(size as u64));
        let values = generate_income_data(size, 42);

        for method in Method::ALL {
            let model = classifier(method, 5, 8, use_parallel);
            group.bench_with_input(BenchmarkId::new(method.name(), size), &size, |b, _| {
                b.iter(|| model.classify_slice(black_box(&values)).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_restarts(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("restarts_{}", mode_name));
    group.sample_size(30);

    let values = generate_elevation_data(10_000, 42);
    for iterations in [1, 4, 16, 64] {
        let model = classifier(Method::Jenks, 6, iterations, use_parallel);
        group.bench_with_input(BenchmarkId::new("jenks", iterations), &iterations, |b, _| {
            b.iter(|| model.classify_slice(black_box(&values)).unwrap())
        });
    }

    group.finish();
}

fn bench_classes(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("classes_{}", mode_name));
    group.sample_size(30);

    let values = generate_income_data(10_000, 42);
    for classes in [3, 5, 7, 10, 15] {
        let model = classifier(Method::Jenks, classes, 8, use_parallel);
        group.bench_with_input(BenchmarkId::new("jenks", classes), &classes, |b, _| {
            b.iter(|| model.classify_slice(black_box(&values)).unwrap())
        });
    }

    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");
    group.sample_size(50);

    for size in [1_000, 10_000] {
        let values = generate_elevation_data(size, 7);
        let table = FrequencyTable::from_values(&values);
        let total = sdam(&table);

        group.bench_with_input(BenchmarkId::new("equal_count_start", size), &size, |b, _| {
            b.iter(|| {
                LocalSearch::default().run(
                    black_box(&table),
                    ClassPartition::equal_count(table.len(), 5),
                    total,
                )
            })
        });
    }

    group.finish();
}

fn bench_scenarios(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scenarios_{}", mode_name));
    group.sample_size(30);

    let incomes = generate_income_data(20_000, 1);
    let elevations = generate_elevation_data(20_000, 2);
    let surveys = generate_survey_data(20_000, 3);
    let model = classifier(Method::Jenks, 5, 0, use_parallel);

    group.bench_function("incomes", |b| {
        b.iter(|| model.classify_slice(black_box(&incomes)).unwrap())
    });
    group.bench_function("elevations", |b| {
        b.iter(|| model.classify_slice(black_box(&elevations)).unwrap())
    });
    group.bench_function("surveys", |b| {
        b.iter(|| model.classify_slice(black_box(&surveys)).unwrap())
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(30);

    let model = classifier(Method::Jenks, 5, 8, use_parallel);

    // Constant data takes the distinct-value fallback
    let constant = vec![3.5; 10_000];
    group.bench_function("constant", |b| {
        b.iter(|| model.classify_slice(black_box(&constant)).unwrap())
    });

    let duplicated: Vec<f64> = (0..10_000).map(|i| (i % 12) as f64).collect();
    group.bench_function("heavy_duplication", |b| {
        b.iter(|| model.classify_slice(black_box(&duplicated)).unwrap())
    });

    let outliers = generate_outlier_data(10_000, 42);
    group.bench_function("outliers", |b| {
        b.iter(|| model.classify_slice(black_box(&outliers)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_restarts,
    bench_classes,
    bench_local_search,
    bench_scenarios,
    bench_pathological,
);

criterion_main!(benches);
