//! Criterion microbenches for the exact-cover mate finder (group "mates").
//!
//! - First mate and the first k mates of back-circulant squares.
//! - Mates of a random isotope, allowing subtrades.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use tridissect::api::*;

fn bench_first_mates(c: &mut Criterion) {
    let mut group = c.benchmark_group("mates");
    for n in [4usize, 5, 6] {
        let p = back_circulant(n);
        group.bench_with_input(BenchmarkId::new("first", n), &p, |b, p| {
            b.iter(|| find_mates(p, MateCfg::default()).next())
        });
        group.bench_with_input(BenchmarkId::new("take_16", n), &p, |b, p| {
            b.iter(|| find_mates(p, MateCfg::default()).take(16).count())
        });
    }
    group.finish();
}

fn bench_isotope_mates(c: &mut Criterion) {
    let mut group = c.benchmark_group("mates_isotope");
    let cfg = MateCfg {
        allow_subtrade: true,
    };
    group.bench_function(BenchmarkId::new("take_32", 5), |b| {
        b.iter_batched(
            || random_isotope(&back_circulant(5), &mut StdRng::seed_from_u64(17)),
            |p| find_mates(&p, cfg).take(32).count(),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_first_mates, bench_isotope_mates);
criterion_main!(benches);
