//! Pairwise distance and edge sequencing benchmarks.
//!
//! Compares the sequential and rayon-backed pairwise passes and measures the
//! full sort into processing order.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use linkage_benches::{
    error::BenchSetupError,
    params::EdgeBenchParams,
    source::{UniformConfig, uniform_points},
};
use linkage_core::{EdgeSequence, par_pairwise_edges, pairwise_edges};

/// Seed used for all synthetic data generation in this benchmark.
const SEED: u64 = 42;

/// Coordinate extent for generated points.
const EXTENT: i32 = 100_000;

/// Dataset sizes to benchmark.
const POINT_COUNTS: &[usize] = &[250, 1_000, 2_000];

fn edges_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("edges");
    group.sample_size(20);

    for &point_count in POINT_COUNTS {
        let points = uniform_points(&UniformConfig {
            point_count,
            extent: EXTENT,
            seed: SEED,
        })?;
        let params = EdgeBenchParams { point_count };

        group.bench_with_input(
            BenchmarkId::new("pairwise", &params),
            &points,
            |b, points| b.iter(|| pairwise_edges(points)),
        );
        group.bench_with_input(
            BenchmarkId::new("par_pairwise", &params),
            &points,
            |b, points| b.iter(|| par_pairwise_edges(points)),
        );
        group.bench_with_input(
            BenchmarkId::new("sequence", &params),
            &points,
            |b, points| b.iter(|| EdgeSequence::from_points(points)),
        );
    }

    group.finish();
    Ok(())
}

fn edges(c: &mut Criterion) {
    if let Err(err) = edges_impl(c) {
        panic!("edges benchmark setup failed: {err}");
    }
}

criterion_group!(benches, edges);
criterion_main!(benches);
