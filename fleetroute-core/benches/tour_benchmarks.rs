//! Criterion benchmarks for nearest-neighbour tour construction.
//!
//! Measures planning time across round sizes (50, 100, 200 shops) to track
//! the quadratic scan and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package fleetroute-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fleetroute_core::{
    EARTH_RADIUS_KM, GeoPoint, PlanRequest, RouteOptimizer, TourPlanner, distance_matrix,
    optimize_route,
};


use bench_support::{BENCHMARK_SEED, DEPOT, generate_clustered_shops};

/// Round sizes to benchmark.
const ROUND_SIZES: &[usize] = &[50, 100, 200];

fn bench_optimize_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_route");

    for &size in ROUND_SIZES {
        let shops = generate_clustered_shops(size, BENCHMARK_SEED);

        #[expect(clippy::as_conversions, reason = "Safe conversion for small round sizes")]
        let elements = size as u64;
        group.throughput(Throughput::Elements(elements));
        group.bench_with_input(BenchmarkId::new("shops", size), &shops, |b, shops| {
            b.iter(|| optimize_route(shops, DEPOT));
        });
    }

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    let optimizer = RouteOptimizer::new();

    for &size in ROUND_SIZES {
        let request = PlanRequest {
            start: DEPOT,
            waypoints: generate_clustered_shops(size, BENCHMARK_SEED),
        };

        group.bench_with_input(BenchmarkId::new("shops", size), &request, |b, request| {
            b.iter(|| optimizer.plan(request));
        });
    }

    group.finish();
}

/// Baseline for the greedy scan: every pairwise distance computed once.
fn bench_distance_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");

    for &size in ROUND_SIZES {
        let points: Vec<GeoPoint> = generate_clustered_shops(size, BENCHMARK_SEED)
            .into_iter()
            .map(|shop| shop.location)
            .collect();

        group.bench_with_input(BenchmarkId::new("points", size), &points, |b, points| {
            b.iter(|| distance_matrix(points, EARTH_RADIUS_KM));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_optimize_route, bench_plan, bench_distance_matrix);
criterion_main!(benches);
