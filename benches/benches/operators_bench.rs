//! # Scalar Operator Benchmarks
//!
//! Measures the stabilized operators and their backward helpers.
//!
//! Run: `cargo bench --bench operators_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minigrad_ops::prelude::*;

/// Deterministic values spread over [-8, 8)
fn sample_values(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i % 1600) as f64 / 100.0 - 8.0).collect()
}

/// Benchmark sigmoid on both branches
fn bench_sigmoid(c: &mut Criterion) {
    let mut group = c.benchmark_group("sigmoid");

    group.bench_function("positive", |b| b.iter(|| black_box(sigmoid(black_box(3.5)))));
    group.bench_function("negative", |b| b.iter(|| black_box(sigmoid(black_box(-3.5)))));
    group.bench_function("extreme", |b| b.iter(|| black_box(sigmoid(black_box(-800.0)))));

    group.finish();
}

/// Benchmark log/inv and their backward helpers
fn bench_log_inv(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_inv");
    let xs = sample_values(1024);

    group.bench_function("log", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(log(x.abs()));
            }
        })
    });

    group.bench_function("inv", |b| {
        b.iter(|| {
            for &x in &xs {
                let _ = black_box(inv(x));
            }
        })
    });

    group.bench_function("log_back", |b| {
        b.iter(|| {
            for &x in &xs {
                let _ = black_box(log_back(x, 1.0));
            }
        })
    });

    group.bench_function("relu_back", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(relu_back(x, 1.0));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_sigmoid, bench_log_inv);
criterion_main!(benches);
