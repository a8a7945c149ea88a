//! # Combinator Benchmarks
//!
//! Measures map/zip_with/reduce over growing inputs, and closure vs. registry
//! dispatch.
//!
//! Run: `cargo bench --bench combinators_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use minigrad_ops::prelude::*;

/// Deterministic values spread over [-8, 8)
fn sample_values(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i % 1600) as f64 / 100.0 - 8.0).collect()
}

/// Benchmark map and zip_with
fn bench_map_zip(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_zip");

    for size in [16usize, 1024, 65_536] {
        let xs = sample_values(size);
        let ys = sample_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("map_sigmoid", size), &xs, |b, xs| {
            let f = map(sigmoid);
            b.iter(|| black_box(f(xs)))
        });

        group.bench_with_input(BenchmarkId::new("map_op_sigmoid", size), &xs, |b, xs| {
            b.iter(|| black_box(map_op(UnaryOp::Sigmoid, xs)))
        });

        group.bench_with_input(BenchmarkId::new("add_lists", size), &xs, |b, xs| {
            b.iter(|| black_box(add_lists(xs, &ys)))
        });
    }

    group.finish();
}

/// Benchmark reduce on long inputs
fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for size in [1024usize, 1_000_000] {
        let xs = sample_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sum", size), &xs, |b, xs| {
            b.iter(|| black_box(sum(xs)))
        });

        group.bench_with_input(BenchmarkId::new("reduce_max", size), &xs, |b, xs| {
            let f = reduce(max, 0.0);
            b.iter(|| black_box(f(xs)))
        });

        group.bench_with_input(BenchmarkId::new("reduce_op_add", size), &xs, |b, xs| {
            b.iter(|| black_box(reduce_op(BinaryOp::Add, 0.0, xs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_map_zip, bench_reduce);
criterion_main!(benches);
