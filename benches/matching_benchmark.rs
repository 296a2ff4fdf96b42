//! Benchmarks for all-pairs graph construction.
//!
//! Construction cost is quadratic in the input sizes; this tracks the
//! per-pair overhead of the default rule.

use bimatch::MatchingGraph;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn bench_all_pairs_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs_construction");

    for size in [16usize, 64, 256] {
        let xs: Vec<u32> = (0..size as u32).collect();
        // Modular values so a fixed fraction of pairs matches
        let ys: Vec<u32> = (0..size as u32).map(|v| v % 17).collect();

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| MatchingGraph::from_sets(black_box(xs.clone()), black_box(ys.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_all_pairs_construction);
criterion_main!(benches);
