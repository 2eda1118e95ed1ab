//! Criterion benchmarks for greedy allocation and lattice-polygon area.
//! Sizes: n in {10, 100, 1000, 10000} areas; regular-ish lattice polygons with m vertices.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seaplan::alloc::allocate_by_value;
use seaplan::geom::{polygon_area_pick, LatticePolygon};
use seaplan::Vec2;

fn random_values(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| (rng.gen::<f64>() * 100.0).round() / 100.0).collect()
}

/// Convex lattice polygon: rounded points on a large circle.
fn lattice_polygon(m: usize) -> LatticePolygon {
    let r = 10_000.0;
    let mut verts: Vec<Vec2<i64>> = (0..m)
        .map(|k| {
            let th = std::f64::consts::TAU * (k as f64) / (m as f64);
            Vec2::new((r * th.cos()).round() as i64, (r * th.sin()).round() as i64)
        })
        .collect();
    verts.dedup();
    LatticePolygon::new(verts).unwrap()
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    for &n in &[10usize, 100, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::new("by_value", n), &n, |b, &n| {
            b.iter_batched(
                || random_values(n, 43),
                |values| {
                    let _a = allocate_by_value(&values, (n / 2) as i64);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");
    for &m in &[4usize, 16, 64, 256] {
        let poly = lattice_polygon(m);
        group.bench_with_input(BenchmarkId::new("polygon_area", m), &poly, |b, poly| {
            b.iter(|| polygon_area_pick(poly))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_allocate, bench_pick);
criterion_main!(benches);
