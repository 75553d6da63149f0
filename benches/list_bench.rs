//! Benchmarks for the list algorithms.
//!
//! Compares the iterative folds, scans and predicate splits against the
//! equivalent standard iterator chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use preludium::list::{foldr, group_by, scanl, scanr, span, unfoldr};
use std::hint::black_box;

// =============================================================================
// foldr Benchmark
// =============================================================================

fn benchmark_foldr(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("foldr");

    for size in [100, 10_000, 1_000_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("foldr", size), &values, |bencher, values| {
            bencher.iter(|| foldr(|x, acc: i64| x.wrapping_sub(acc), 0, black_box(values)));
        });

        group.bench_with_input(
            BenchmarkId::new("Iterator::rfold", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    black_box(values)
                        .iter()
                        .rfold(0_i64, |acc, x| x.wrapping_sub(acc))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// scan Benchmark
// =============================================================================

fn benchmark_scans(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("scan");

    for size in [100, 10_000, 100_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("scanl", size), &values, |bencher, values| {
            bencher.iter(|| scanl(|acc: i64, x| acc.wrapping_add(*x), 0, black_box(values)));
        });

        group.bench_with_input(BenchmarkId::new("scanr", size), &values, |bencher, values| {
            bencher.iter(|| scanr(|x, acc: i64| acc.wrapping_add(*x), 0, black_box(values)));
        });
    }

    group.finish();
}

// =============================================================================
// span / group_by Benchmark
// =============================================================================

fn benchmark_splitting(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("splitting");

    for size in [100, 10_000, 100_000] {
        let values: Vec<i64> = (0..size).map(|n| n / 7).collect();
        let pivot = size / 14;

        group.bench_with_input(BenchmarkId::new("span", size), &values, |bencher, values| {
            bencher.iter(|| span(black_box(values), |x| *x < pivot));
        });

        group.bench_with_input(BenchmarkId::new("group_by", size), &values, |bencher, values| {
            bencher.iter(|| group_by(black_box(values), |a, b| a == b).len());
        });

        group.bench_with_input(
            BenchmarkId::new("slice::chunk_by", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(values).chunk_by(|a, b| a == b).count());
            },
        );
    }

    group.finish();
}

// =============================================================================
// unfoldr Benchmark
// =============================================================================

fn benchmark_unfoldr(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unfoldr");

    for size in [100_u64, 10_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("unfoldr", size), &size, |bencher, &size| {
            bencher.iter(|| unfoldr(|n: u64| (n < size).then_some((n, n + 1)), black_box(0_u64)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_foldr,
    benchmark_scans,
    benchmark_splitting,
    benchmark_unfoldr
);
criterion_main!(benches);
