//! Square partial tables and their filled entries.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::DissectionError;

/// One filled cell `(row, col, sym)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub sym: usize,
}

/// Number of row, column and symbol labels in use (max index + 1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub rows: usize,
    pub cols: usize,
    pub syms: usize,
}

impl LabelCounts {
    pub fn total(&self) -> usize {
        self.rows + self.cols + self.syms
    }
}

/// Square `n × n` grid; each cell is empty or holds a symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PartialTable {
    n: usize,
    cells: Vec<Option<usize>>,
}

impl PartialTable {
    /// Empty table of order `n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![None; n * n],
        }
    }

    /// Build from integer rows; negative values mark empty cells.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, DissectionError> {
        let n = rows.len();
        let mut t = Self::new(n);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(DissectionError::invalid(format!(
                    "row {r} has {} cells, expected {n}",
                    row.len()
                )));
            }
            for (c, &v) in row.iter().enumerate() {
                if v >= 0 {
                    t.set(r, c, v as usize);
                }
            }
        }
        Ok(t)
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    /// Symbol at `(r, c)`; `None` when empty or out of range.
    pub fn get(&self, r: usize, c: usize) -> Option<usize> {
        if r >= self.n || c >= self.n {
            return None;
        }
        self.cells[r * self.n + c]
    }

    pub fn set(&mut self, r: usize, c: usize, sym: usize) {
        self.cells[r * self.n + c] = Some(sym);
    }

    pub fn clear(&mut self, r: usize, c: usize) {
        self.cells[r * self.n + c] = None;
    }

    pub fn is_filled(&self, r: usize, c: usize) -> bool {
        self.get(r, c).is_some()
    }

    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Filled cells in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, s)| {
            s.map(|sym| Entry {
                row: i / self.n,
                col: i % self.n,
                sym,
            })
        })
    }

    pub fn vals_in_row(&self, r: usize) -> BTreeSet<usize> {
        (0..self.n).filter_map(|c| self.get(r, c)).collect()
    }

    pub fn vals_in_col(&self, c: usize) -> BTreeSet<usize> {
        (0..self.n).filter_map(|r| self.get(r, c)).collect()
    }

    /// Max row/col/sym index + 1 over the filled cells.
    pub fn label_counts(&self) -> LabelCounts {
        self.entries().fold(LabelCounts::default(), |acc, e| LabelCounts {
            rows: acc.rows.max(e.row + 1),
            cols: acc.cols.max(e.col + 1),
            syms: acc.syms.max(e.sym + 1),
        })
    }

    /// Symbols below `n` and no symbol repeated within a row or a column.
    pub fn is_partial_latin(&self) -> bool {
        let n = self.n;
        let mut in_row = vec![false; n * n];
        let mut in_col = vec![false; n * n];
        for e in self.entries() {
            if e.sym >= n {
                return false;
            }
            let (ri, ci) = (e.row * n + e.sym, e.col * n + e.sym);
            if in_row[ri] || in_col[ci] {
                return false;
            }
            in_row[ri] = true;
            in_col[ci] = true;
        }
        true
    }
}

impl fmt::Display for PartialTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n {
            let row: Vec<String> = (0..self.n)
                .map(|c| match self.get(r, c) {
                    Some(s) => format!("{s:>2}"),
                    None => "-1".to_string(),
                })
                .collect();
            writeln!(f, "[{}]", row.join(" "))?;
        }
        Ok(())
    }
}
