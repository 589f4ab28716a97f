//! Seeded random bitrades (isotopes of the back-circulant square).
//!
//! Model
//! - Start from the cyclic Latin square `L[r][c] = (r + c) mod n`.
//! - Permute rows, columns and symbols independently.
//! - Enumerate subtrade-allowed mates of the isotope and strip the common cells;
//!   every non-empty remainder is a bitrade, renumbered with `Bitrade::compact`.
//!
//! Determinism comes from the caller's RNG (`StdRng::seed_from_u64` in tests and benches).
//! Sampled bitrades are compacted but not necessarily spherical; filter with
//! `Bitrade::is_spherical`.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{strip_common, Bitrade, PartialTable};
use crate::mates::{find_mates, MateCfg};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Order of the Latin square the bitrades are cut from.
    pub order: usize,
    /// Number of mates inspected per isotope.
    pub mates_per_square: usize,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            order: 4,
            mates_per_square: 12,
        }
    }
}

/// Cyclic Latin square of order `n`.
pub fn back_circulant(n: usize) -> PartialTable {
    let mut t = PartialTable::new(n);
    for r in 0..n {
        for c in 0..n {
            t.set(r, c, (r + c) % n);
        }
    }
    t
}

/// Relabel rows, columns and symbols by independent random permutations.
pub fn random_isotope<R: Rng>(t: &PartialTable, rng: &mut R) -> PartialTable {
    let n = t.dim();
    let mut rows: Vec<usize> = (0..n).collect();
    let mut cols: Vec<usize> = (0..n).collect();
    let mut syms: Vec<usize> = (0..n).collect();
    rows.shuffle(rng);
    cols.shuffle(rng);
    syms.shuffle(rng);
    let mut out = PartialTable::new(n);
    for e in t.entries() {
        out.set(rows[e.row], cols[e.col], syms[e.sym]);
    }
    out
}

/// Bitrades cut from one random isotope of `back_circulant(cfg.order)`.
pub fn sample_bitrades<R: Rng>(cfg: SampleCfg, rng: &mut R) -> Vec<Bitrade> {
    let square = random_isotope(&back_circulant(cfg.order), rng);
    let mut out: Vec<Bitrade> = Vec::new();
    let mates = find_mates(
        &square,
        MateCfg {
            allow_subtrade: true,
        },
    );
    for mate in mates.take(cfg.mates_per_square) {
        let (a, b) = strip_common(&square, &mate);
        if a.filled_cells() == 0 {
            continue;
        }
        if let Ok(bt) = Bitrade::new(a, b).map(|bt| bt.compact()) {
            if !out.contains(&bt) {
                out.push(bt);
            }
        }
    }
    out
}
