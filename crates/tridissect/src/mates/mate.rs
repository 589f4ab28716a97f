//! Mates of a partial table as exact covers.

use tracing::{debug, warn};

use super::cover::ExactCover;
use crate::table::{Entry, PartialTable};

/// Mate search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct MateCfg {
    /// Allow a mate to repeat `P[r, c]` in a cell (results may then share
    /// cells with P; use `table::strip_common` to get a bitrade).
    pub allow_subtrade: bool,
}

/// Exact-cover rows for the mates of `p`, with the assignment each row encodes
/// (`None` for filler rows that only pad an otherwise uncoverable column).
///
/// A table that is not partial Latin has no rows: its symbols may not fit the
/// `3 * n * n` column layout.
pub fn mate_rows(p: &PartialTable, cfg: MateCfg) -> (Vec<Vec<usize>>, Vec<Option<Entry>>) {
    let n = p.dim();
    if !p.is_partial_latin() {
        warn!(order = n, "table is not partial Latin; no mate rows");
        return (Vec::new(), Vec::new());
    }
    let mut rows = Vec::new();
    let mut decode = Vec::new();
    let mut used = vec![false; 3 * n * n];
    for r in 0..n {
        let in_row = p.vals_in_row(r);
        for c in 0..n {
            let Some(current) = p.get(r, c) else {
                continue;
            };
            let in_col = p.vals_in_col(c);
            for &e in in_row.intersection(&in_col) {
                if !cfg.allow_subtrade && e == current {
                    continue;
                }
                let cols = vec![e + c * n, e + r * n + n * n, 2 * n * n + r * n + c];
                for &k in &cols {
                    used[k] = true;
                }
                rows.push(cols);
                decode.push(Some(Entry { row: r, col: c, sym: e }));
            }
        }
    }
    let candidates = rows.len();
    for (k, _) in used.iter().enumerate().filter(|(_, u)| !**u) {
        rows.push(vec![k]);
        decode.push(None);
    }
    debug!(
        order = n,
        candidates,
        fillers = rows.len() - candidates,
        "mate exact-cover instance"
    );
    (rows, decode)
}

/// Lazy sequence of mates of a partial table.
#[derive(Clone, Debug)]
pub struct Mates {
    n: usize,
    cover: Option<ExactCover>,
    decode: Vec<Option<Entry>>,
}

impl Mates {
    /// Start the sequence over from the first mate.
    pub fn restart(&mut self) {
        if let Some(cover) = &mut self.cover {
            cover.restart();
        }
    }
}

impl Iterator for Mates {
    type Item = PartialTable;

    fn next(&mut self) -> Option<PartialTable> {
        let selected = self.cover.as_mut()?.next()?;
        let mut q = PartialTable::new(self.n);
        for e in selected.into_iter().filter_map(|i| self.decode[i]) {
            q.set(e.row, e.col, e.sym);
        }
        Some(q)
    }
}

/// All mates of `p`, one per exact cover.
///
/// A mate fills cells of `p` only, takes each symbol from both the row and the
/// column of `p` it lands in, and never repeats a symbol within a row or column.
/// Without `allow_subtrade` no cell repeats the symbol `p` has there.
/// A table that is not partial Latin has no mates.
pub fn find_mates(p: &PartialTable, cfg: MateCfg) -> Mates {
    let n = p.dim();
    let (rows, decode) = mate_rows(p, cfg);
    let cover = p
        .is_partial_latin()
        .then(|| ExactCover::new(3 * n * n, rows));
    Mates { n, cover, decode }
}
