//! Benchmarks for the container aggregates across element types

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_algorithms::{max, mean, sum, transform_reduce, variance, variance_with};
use numeric_core::VarianceDivisor;

/// Generate test data with specific patterns
fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size).map(|i| (i as f64 * 0.1).sin() * 100.0).collect()
}

fn generate_int_data(size: usize) -> Vec<i64> {
    (0..size).map(|i| ((i * 7 + 3) % 1000) as i64 - 500).collect()
}

/// Benchmark the single-pass aggregates
fn bench_single_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_pass");

    for &size in &[100, 10_000, 1_000_000] {
        let data = generate_test_data(size);

        group.bench_with_input(BenchmarkId::new("sum_f64", size), &data, |b, data| {
            b.iter(|| black_box(sum(data)))
        });
        group.bench_with_input(BenchmarkId::new("mean_f64", size), &data, |b, data| {
            b.iter(|| black_box(mean(data)))
        });
        group.bench_with_input(BenchmarkId::new("max_f64", size), &data, |b, data| {
            b.iter(|| black_box(max(data)))
        });
        group.bench_with_input(
            BenchmarkId::new("transform_reduce_f64", size),
            &data,
            |b, data| b.iter(|| black_box(transform_reduce(data, |x| x * x))),
        );
    }

    group.finish();
}

/// Benchmark the two-pass variance for the integral and floating policies
fn bench_variance(c: &mut Criterion) {
    let mut group = c.benchmark_group("variance");

    for &size in &[100, 10_000, 1_000_000] {
        let floats = generate_test_data(size);
        let ints = generate_int_data(size);

        group.bench_with_input(BenchmarkId::new("f64", size), &floats, |b, data| {
            b.iter(|| black_box(variance(data)))
        });
        group.bench_with_input(BenchmarkId::new("i64", size), &ints, |b, data| {
            b.iter(|| black_box(variance(data)))
        });
        group.bench_with_input(BenchmarkId::new("f64_sample", size), &floats, |b, data| {
            b.iter(|| black_box(variance_with(data, VarianceDivisor::Sample)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_pass, bench_variance);
criterion_main!(benches);
