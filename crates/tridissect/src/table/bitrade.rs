//! Bitrade validation, genus and subtrade stripping.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::types::{Entry, PartialTable};
use crate::error::DissectionError;

/// A validated pair `(T1, T2)` with identical filled cells and differing symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitrade {
    t1: PartialTable,
    t2: PartialTable,
}

impl Bitrade {
    /// Validate the pair: same order, same filled cells, disjoint symbols, both
    /// partial Latin, and equal symbol sets per row and per column.
    pub fn new(t1: PartialTable, t2: PartialTable) -> Result<Self, DissectionError> {
        let n = t1.dim();
        if t2.dim() != n {
            return Err(DissectionError::invalid(format!(
                "tables have orders {n} and {}",
                t2.dim()
            )));
        }
        for r in 0..n {
            for c in 0..n {
                match (t1.get(r, c), t2.get(r, c)) {
                    (None, None) => {}
                    (Some(a), Some(b)) if a != b => {}
                    (Some(_), Some(_)) => {
                        return Err(DissectionError::invalid(format!(
                            "cell ({r}, {c}) holds the same symbol in both tables"
                        )))
                    }
                    _ => {
                        return Err(DissectionError::invalid(format!(
                            "cell ({r}, {c}) is filled in only one table"
                        )))
                    }
                }
            }
        }
        if t1.filled_cells() == 0 {
            return Err(DissectionError::invalid("empty bitrade"));
        }
        if !t1.is_partial_latin() || !t2.is_partial_latin() {
            return Err(DissectionError::invalid("table is not partial Latin"));
        }
        for i in 0..n {
            if t1.vals_in_row(i) != t2.vals_in_row(i) {
                return Err(DissectionError::invalid(format!(
                    "row {i} uses different symbols"
                )));
            }
            if t1.vals_in_col(i) != t2.vals_in_col(i) {
                return Err(DissectionError::invalid(format!(
                    "column {i} uses different symbols"
                )));
            }
        }
        Ok(Self { t1, t2 })
    }

    pub fn t1(&self) -> &PartialTable {
        &self.t1
    }

    pub fn t2(&self) -> &PartialTable {
        &self.t2
    }

    pub fn dim(&self) -> usize {
        self.t1.dim()
    }

    /// Trade size: filled cells of one table.
    pub fn size(&self) -> usize {
        self.t1.filled_cells()
    }

    /// Genus of the incidence surface, from the cycle counts of the three
    /// τ permutations on the filled cells:
    /// `2 - 2g = cycles(τ1) + cycles(τ2) + cycles(τ3) - size`.
    ///
    /// `None` when the count is not a non-negative integer (disconnected pair).
    pub fn genus(&self) -> Option<usize> {
        let cells: Vec<Entry> = self.t1.entries().collect();
        let mut row_of_t1 = HashMap::new(); // (col, sym) -> row in T1
        let mut col_of_t1 = HashMap::new(); // (row, sym) -> col in T1
        let mut row_of_t2 = HashMap::new();
        let mut col_of_t2 = HashMap::new();
        for e in self.t1.entries() {
            row_of_t1.insert((e.col, e.sym), e.row);
            col_of_t1.insert((e.row, e.sym), e.col);
        }
        for e in self.t2.entries() {
            row_of_t2.insert((e.col, e.sym), e.row);
            col_of_t2.insert((e.row, e.sym), e.col);
        }

        let tau1 = |(r, c): (usize, usize)| {
            let e = self.t2.get(r, c)?;
            Some((r, *col_of_t1.get(&(r, e))?))
        };
        let tau2 = |(r, c): (usize, usize)| {
            let e = self.t1.get(r, c)?;
            Some((*row_of_t2.get(&(c, e))?, c))
        };
        let tau3 = |(r, c): (usize, usize)| {
            let e = self.t1.get(r, c)?;
            let c2 = *col_of_t2.get(&(r, e))?;
            Some((*row_of_t1.get(&(c2, e))?, c2))
        };

        let total = count_cycles(&cells, tau1)?
            + count_cycles(&cells, tau2)?
            + count_cycles(&cells, tau3)?;
        let twice = 2 + cells.len() as i64 - total as i64;
        if twice < 0 || twice % 2 != 0 {
            return None;
        }
        Some((twice / 2) as usize)
    }

    pub fn is_spherical(&self) -> bool {
        self.genus() == Some(0)
    }

    /// Renumber rows, columns and symbols to `0..k` in increasing order,
    /// dropping labels no cell uses. The order shrinks to the largest count.
    pub fn compact(&self) -> Bitrade {
        let dense = |used: BTreeSet<usize>| -> HashMap<usize, usize> {
            used.into_iter().enumerate().map(|(i, l)| (l, i)).collect()
        };
        let rows = dense(self.t1.entries().map(|e| e.row).collect());
        let cols = dense(self.t1.entries().map(|e| e.col).collect());
        let syms = dense(self.t1.entries().map(|e| e.sym).collect());
        let n = rows.len().max(cols.len()).max(syms.len());
        let relabel = |t: &PartialTable| {
            let mut out = PartialTable::new(n);
            for e in t.entries() {
                out.set(rows[&e.row], cols[&e.col], syms[&e.sym]);
            }
            out
        };
        Bitrade {
            t1: relabel(&self.t1),
            t2: relabel(&self.t2),
        }
    }
}

fn count_cycles<F>(cells: &[Entry], step: F) -> Option<usize>
where
    F: Fn((usize, usize)) -> Option<(usize, usize)>,
{
    let mut seen = HashSet::new();
    let mut cycles = 0;
    for e in cells {
        let mut at = (e.row, e.col);
        if seen.contains(&at) {
            continue;
        }
        cycles += 1;
        while seen.insert(at) {
            at = step(at)?;
        }
    }
    Some(cycles)
}

/// Drop the cells on which `p` and `q` agree; the rest is a bitrade candidate.
pub fn strip_common(p: &PartialTable, q: &PartialTable) -> (PartialTable, PartialTable) {
    let n = p.dim();
    let mut a = PartialTable::new(n);
    let mut b = PartialTable::new(n);
    for r in 0..n {
        for c in 0..n {
            if let (Some(x), Some(y)) = (p.get(r, c), q.get(r, c)) {
                if x != y {
                    a.set(r, c, x);
                    b.set(r, c, y);
                }
            }
        }
    }
    (a, b)
}
