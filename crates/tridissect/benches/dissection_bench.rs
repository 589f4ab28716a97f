//! Criterion microbenches for dissection building and its summaries.
//!
//! - Solve + extract for the fifteen-triangle perfect dissection.
//! - Core reduction and six-way separation on clones of a built dissection.
//! - Canonical signature over the six symmetries.
//! - Spherical bitrades drawn from a seeded sampler, every base cell.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use tridissect::api::*;

fn bitrade(t1: &[&[i64]], t2: &[&[i64]]) -> Bitrade {
    Bitrade::new(
        PartialTable::from_rows(t1).unwrap(),
        PartialTable::from_rows(t2).unwrap(),
    )
    .unwrap()
}

fn perfect() -> Bitrade {
    bitrade(
        &[
            &[0, 1, 2, -1, -1, -1],
            &[3, -1, 0, -1, 5, -1],
            &[1, -1, -1, 3, -1, -1],
            &[-1, 4, -1, 1, -1, -1],
            &[-1, 2, 5, -1, 4, -1],
            &[-1, -1, -1, 4, 3, -1],
        ],
        &[
            &[1, 2, 0, -1, -1, -1],
            &[0, -1, 5, -1, 3, -1],
            &[3, -1, -1, 1, -1, -1],
            &[-1, 1, -1, 4, -1, -1],
            &[-1, 4, 2, -1, 5, -1],
            &[-1, -1, -1, 3, 4, -1],
        ],
    )
}

fn six_way() -> Bitrade {
    bitrade(
        &[&[0, 1, 2, 3], &[1, -1, -1, 0], &[-1, 2, 3, 1], &[-1, -1, -1, -1]],
        &[&[1, 2, 3, 0], &[0, -1, -1, 1], &[-1, 1, 2, 3], &[-1, -1, -1, -1]],
    )
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("dissection");
    let p = perfect();
    let cfg = DissectionCfg::default();
    group.bench_function(BenchmarkId::new("new", "perfect15"), |b| {
        b.iter(|| Dissection::new(&p, 5, 3, cfg).unwrap())
    });
    let built = Dissection::new(&p, 5, 3, cfg).unwrap();
    group.bench_function(BenchmarkId::new("core", "perfect15"), |b| {
        b.iter_batched(
            || built.clone(),
            |mut d| d.core().unwrap(),
            BatchSize::SmallInput,
        )
    });
    group.bench_function(BenchmarkId::new("canonical_signature", "perfect15"), |b| {
        b.iter(|| built.canonical_signature().unwrap())
    });
    let w = Dissection::new(&six_way(), 2, 3, cfg).unwrap();
    group.bench_function(BenchmarkId::new("generate_via_geometry", "six_way9"), |b| {
        b.iter_batched(
            || w.clone(),
            |mut d| {
                let _ = d.generate_via_geometry().unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_sampled(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampled");
    for order in [4usize, 5] {
        let mut rng = StdRng::seed_from_u64(2024 + order as u64);
        let cfg = SampleCfg {
            order,
            mates_per_square: 8,
        };
        let trades: Vec<Bitrade> = sample_bitrades(cfg, &mut rng)
            .into_iter()
            .filter(Bitrade::is_spherical)
            .collect();
        group.bench_with_input(
            BenchmarkId::new("every_base_cell", order),
            &trades,
            |b, trades| {
                b.iter(|| {
                    let mut built = 0usize;
                    for t in trades {
                        for e in t.t1().entries() {
                            if Dissection::new(t, e.row, e.col, DissectionCfg::default()).is_ok() {
                                built += 1;
                            }
                        }
                    }
                    built
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_sampled);
criterion_main!(benches);
