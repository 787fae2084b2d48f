//! Descriptive statistics benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability in rows (10K to 1M samples per column)
//! - Scalability in columns (1 to 64 columns)
//! - Evince with varying outlier rates
//! - Derived statistics on top of Learn
//! - Real-world scenarios (sensor drift, heavy tails)
//!
//! For serial execution, use `FASTDESCRIPTIVE_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTDESCRIPTIVE_BACKEND=parallel cargo bench`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastDescriptive::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, StudentT, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTDESCRIPTIVE_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

fn build(parallel: bool, derived: bool) -> ParallelDescriptive<f64> {
    let builder = Descriptive::new().parallel(parallel);
    let builder = if derived {
        builder.return_derived()
    } else {
        builder
    };
    builder.build().unwrap()
}

/// Nominal value and 1.5 standard deviations for every column.
fn learned_parameters(ds: &Dataset<f64>) -> Vec<OutlierParameters<f64>> {
    ds.columns()
        .iter()
        .map(|c| {
            let d = convert(c.len(), &accumulate(c.values()).unwrap().raw).unwrap();
            OutlierParameters::new(d.mean, 1.5 * d.std_dev())
        })
        .collect()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate Gaussian columns around a common level.
fn generate_gaussian_data(rows: usize, columns: usize, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(50.0, 2.5).unwrap();

    Dataset::from_columns((0..columns).map(|j| {
        let values: Vec<f64> = (0..rows).map(|_| dist.sample(&mut rng)).collect();
        (format!("Metric {}", j + 1), values)
    }))
    .unwrap()
}

/// Generate columns where a given fraction of samples is displaced far away.
fn generate_contaminated_data(rows: usize, columns: usize, rate: f64, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();
    let shift = Uniform::new(10.0, 20.0).unwrap();

    Dataset::from_columns((0..columns).map(|j| {
        let values: Vec<f64> = (0..rows)
            .map(|_| {
                let x = noise.sample(&mut rng);
                if rng.random_bool(rate) {
                    x + shift.sample(&mut rng)
                } else {
                    x
                }
            })
            .collect();
        (format!("Metric {}", j + 1), values)
    }))
    .unwrap()
}

/// Generate slowly drifting sensor readings with measurement noise.
fn generate_drift_data(rows: usize, columns: usize, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.05).unwrap();

    Dataset::from_columns((0..columns).map(|j| {
        let values: Vec<f64> = (0..rows)
            .map(|i| 20.0 + j as f64 + 1e-5 * i as f64 + noise.sample(&mut rng))
            .collect();
        (format!("Sensor {}", j + 1), values)
    }))
    .unwrap()
}

/// Generate heavy-tailed columns (Student's t with 3 degrees of freedom).
fn generate_heavy_tail_data(rows: usize, columns: usize, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = StudentT::new(3.0).unwrap();

    Dataset::from_columns((0..columns).map(|j| {
        let values: Vec<f64> = (0..rows).map(|_| dist.sample(&mut rng)).collect();
        (format!("Metric {}", j + 1), values)
    }))
    .unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_rows(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("rows_{}", mode_name));
    group.sample_size(50);

    let columns = 8;
    for rows in [10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements((rows * columns) as u64));

        let ds = generate_gaussian_data(rows, columns, 42);
        let model = build(use_parallel, false);

        group.bench_with_input(BenchmarkId::new("learn", rows), &rows, |b, _| {
            b.iter(|| model.learn(black_box(&ds)).unwrap())
        });
    }
    group.finish();
}

fn bench_columns(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("columns_{}", mode_name));
    group.sample_size(50);

    let rows = 50_000;
    for columns in [1, 4, 16, 64] {
        group.throughput(Throughput::Elements((rows * columns) as u64));

        let ds = generate_gaussian_data(rows, columns, 42);
        let model = build(use_parallel, false);
        let params = learned_parameters(&ds);

        group.bench_with_input(BenchmarkId::new("learn", columns), &columns, |b, _| {
            b.iter(|| model.learn(black_box(&ds)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("evince", columns), &columns, |b, _| {
            b.iter(|| model.evince(black_box(&ds), black_box(&params)).unwrap())
        });
    }
    group.finish();
}

fn bench_outlier_rate(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("outlier_rate_{}", mode_name));
    group.sample_size(100);

    let (rows, columns) = (100_000, 8);
    let model = build(use_parallel, false);
    let params = vec![OutlierParameters::new(0.0, 3.0); columns];

    for rate in [0.0, 0.01, 0.05, 0.2] {
        let ds = generate_contaminated_data(rows, columns, rate, 7);

        group.bench_with_input(BenchmarkId::new("evince", rate), &rate, |b, _| {
            b.iter(|| model.evince(black_box(&ds), black_box(&params)).unwrap())
        });
    }
    group.finish();
}

fn bench_derived(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("derived_{}", mode_name));
    group.sample_size(100);

    let ds = generate_gaussian_data(100_000, 16, 42);

    for derived in [false, true] {
        let model = build(use_parallel, derived);
        group.bench_with_input(BenchmarkId::new("learn", derived), &derived, |b, _| {
            b.iter(|| model.learn(black_box(&ds)).unwrap())
        });
    }
    group.finish();
}

fn bench_scenarios(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scenarios_{}", mode_name));
    group.sample_size(50);

    let model = build(use_parallel, true);

    let drift = generate_drift_data(200_000, 12, 11);
    let drift_params = learned_parameters(&drift);
    group.bench_function("sensor_drift_learn", |b| {
        b.iter(|| model.learn(black_box(&drift)).unwrap())
    });
    group.bench_function("sensor_drift_evince", |b| {
        b.iter(|| model.evince(black_box(&drift), black_box(&drift_params)).unwrap())
    });

    let heavy = generate_heavy_tail_data(200_000, 12, 13);
    let heavy_params = learned_parameters(&heavy);
    group.bench_function("heavy_tail_learn", |b| {
        b.iter(|| model.learn(black_box(&heavy)).unwrap())
    });
    group.bench_function("heavy_tail_evince", |b| {
        b.iter(|| model.evince(black_box(&heavy), black_box(&heavy_params)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rows,
    bench_columns,
    bench_outlier_rate,
    bench_derived,
    bench_scenarios,
);

criterion_main!(benches);
