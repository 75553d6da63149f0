//! Benchmarks for the collection helpers.
//!
//! `uniq` is measured with whichever hasher the enabled features select,
//! against a sort-and-dedup baseline that does not keep input order.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use preludium::collection::{ComputeIfAbsent, uniq};
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// uniq Benchmark
// =============================================================================

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    for size in [100_u64, 10_000, 100_000] {
        let values: Vec<u64> = (0..size)
            .map(|n| n.wrapping_mul(2_654_435_761) % (size / 2 + 1))
            .collect();

        group.bench_with_input(BenchmarkId::new("uniq", size), &values, |bencher, values| {
            bencher.iter(|| uniq(black_box(values).iter().copied()));
        });

        group.bench_with_input(
            BenchmarkId::new("sort_unstable+dedup", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let mut sorted = black_box(values).clone();
                    sorted.sort_unstable();
                    sorted.dedup();
                    sorted
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// compute_if_absent Benchmark
// =============================================================================

fn benchmark_compute_if_absent(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compute_if_absent");

    for size in [100_u64, 10_000] {
        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut cache: HashMap<u64, u64> = HashMap::new();
                for key in 0..size {
                    *cache.compute_if_absent(black_box(key % 64), |k| k * k) += 1;
                }
                cache
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_uniq, benchmark_compute_if_absent);
criterion_main!(benches);
