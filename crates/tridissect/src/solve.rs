//! Rational linear solver for the line coordinates of a bitrade.
//!
//! Purpose
//! - Each filled cell `(r, c, s)` of a table is the meeting point of a horizontal,
//!   a vertical and a diagonal line; `row[r] + col[c] - sym[s] = 0` places them.
//! - The base cell is replaced by the pins `row = 0`, `col = 0`, `sym = 1`, which fix
//!   the outer triangle `x = 0`, `y = 0`, `x + y = 1`.
//! - Solved by exact Gauss-Jordan elimination over `BigRational`; the solution is read
//!   from the augmented column.
//!
//! Variables are ordered rows, then columns, then symbols, sized by
//! `PartialTable::label_counts`.

use std::collections::HashSet;

use nalgebra::DMatrix;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Zero};
use tracing::debug;

use crate::error::DissectionError;
use crate::table::{LabelCounts, PartialTable};

/// Solver configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveCfg {
    /// Strict mode: reject solutions where two rows, columns or symbols coincide.
    pub only_separated: bool,
}

/// Pinned cell of the system (`row = 0`, `col = 0`, `sym = 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BaseCell {
    pub row: usize,
    pub col: usize,
    pub sym: usize,
}

/// Exact line coordinates: rows are `y` values, columns `x` values, symbols `x + y` values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub rows: Vec<BigRational>,
    pub cols: Vec<BigRational>,
    pub syms: Vec<BigRational>,
    pub base: BaseCell,
}

impl Solution {
    /// Values are pairwise distinct within each block.
    pub fn is_separated(&self) -> bool {
        fn distinct(v: &[BigRational]) -> bool {
            v.iter().collect::<HashSet<_>>().len() == v.len()
        }
        distinct(&self.rows) && distinct(&self.cols) && distinct(&self.syms)
    }

    /// Least common denominator: every coordinate is a multiple of `1/scale`.
    pub fn scale(&self) -> BigInt {
        self.rows
            .iter()
            .chain(&self.cols)
            .chain(&self.syms)
            .fold(BigInt::one(), |acc, v| acc.lcm(v.denom()))
    }
}

/// Augmented matrix `[A | b]` of the line-placement system.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    matrix: DMatrix<BigRational>,
    counts: LabelCounts,
    base: BaseCell,
}

impl LinearSystem {
    /// One equation per filled cell, three pins for the base cell.
    pub fn build(t: &PartialTable, row: usize, col: usize) -> Result<Self, DissectionError> {
        let sym = t
            .get(row, col)
            .ok_or(DissectionError::InvalidBaseCell { row, col })?;
        let counts = t.label_counts();
        check_labels_used(t, &counts)?;
        let vars = counts.total();
        let eqs = t.filled_cells() + 2;
        let mut m = DMatrix::from_element(eqs, vars + 1, BigRational::zero());
        let (c0, s0) = (counts.rows, counts.rows + counts.cols);
        let one = BigRational::one();
        let mut i = 0;
        for e in t.entries() {
            if e.row == row && e.col == col {
                m[(i, e.row)] = one.clone();
                m[(i + 1, c0 + e.col)] = one.clone();
                m[(i + 2, s0 + e.sym)] = one.clone();
                m[(i + 2, vars)] = one.clone();
                i += 3;
            } else {
                m[(i, e.row)] = one.clone();
                m[(i, c0 + e.col)] = one.clone();
                m[(i, s0 + e.sym)] = -one.clone();
                i += 1;
            }
        }
        debug!(equations = eqs, variables = vars, "linear system");
        Ok(Self {
            matrix: m,
            counts,
            base: BaseCell { row, col, sym },
        })
    }

    /// (equations, variables + 1)
    pub fn dimensions(&self) -> (usize, usize) {
        self.matrix.shape()
    }

    pub fn matrix(&self) -> &DMatrix<BigRational> {
        &self.matrix
    }

    /// Reduce to row echelon form in place; returns the pivot columns.
    pub fn rref(&mut self) -> Vec<usize> {
        let m = &mut self.matrix;
        let (nr, nc) = m.shape();
        let vars = nc - 1;
        let mut pivots = Vec::new();
        let mut lead = 0;
        for r in 0..nr {
            let mut found = None;
            while lead < vars {
                if let Some(i) = (r..nr).find(|&i| !m[(i, lead)].is_zero()) {
                    found = Some(i);
                    break;
                }
                lead += 1;
            }
            let Some(i) = found else {
                break;
            };
            m.swap_rows(i, r);
            let lv = m[(r, lead)].clone();
            for j in 0..nc {
                let v = &m[(r, j)] / &lv;
                m[(r, j)] = v;
            }
            for i in 0..nr {
                if i == r || m[(i, lead)].is_zero() {
                    continue;
                }
                let f = m[(i, lead)].clone();
                for j in 0..nc {
                    let v = &m[(i, j)] - &f * &m[(r, j)];
                    m[(i, j)] = v;
                }
            }
            pivots.push(lead);
            lead += 1;
        }
        pivots
    }

    /// Eliminate and read the unique solution; inconsistent or underdetermined
    /// systems mean the pair is not a usable bitrade.
    pub fn solve(mut self) -> Result<Solution, DissectionError> {
        let pivots = self.rref();
        let (nr, nc) = self.matrix.shape();
        let vars = nc - 1;
        let rank = pivots.len();
        if (rank..nr).any(|i| !self.matrix[(i, vars)].is_zero()) {
            return Err(DissectionError::invalid("line system is inconsistent"));
        }
        if rank < vars {
            return Err(DissectionError::invalid(format!(
                "line system leaves {} of {vars} coordinates undetermined",
                vars - rank
            )));
        }
        let values: Vec<BigRational> = (0..vars).map(|k| self.matrix[(k, vars)].clone()).collect();
        let c = &self.counts;
        Ok(Solution {
            rows: values[..c.rows].to_vec(),
            cols: values[c.rows..c.rows + c.cols].to_vec(),
            syms: values[c.rows + c.cols..].to_vec(),
            base: self.base,
        })
    }
}

/// Every label below the count must occur in some cell, or its line has no equation.
fn check_labels_used(t: &PartialTable, counts: &LabelCounts) -> Result<(), DissectionError> {
    let mut rows = vec![false; counts.rows];
    let mut cols = vec![false; counts.cols];
    let mut syms = vec![false; counts.syms];
    for e in t.entries() {
        rows[e.row] = true;
        cols[e.col] = true;
        syms[e.sym] = true;
    }
    for (kind, used) in [("row", rows), ("column", cols), ("symbol", syms)] {
        if let Some(k) = used.iter().position(|u| !u) {
            return Err(DissectionError::invalid(format!(
                "{kind} label {k} is unused; renumber with Bitrade::compact"
            )));
        }
    }
    Ok(())
}

/// Build and solve the system of `t` pinned at `(row, col)`.
pub fn solve_system(
    t: &PartialTable,
    row: usize,
    col: usize,
    cfg: SolveCfg,
) -> Result<Solution, DissectionError> {
    let sol = LinearSystem::build(t, row, col)?.solve()?;
    if cfg.only_separated && !sol.is_separated() {
        return Err(DissectionError::NoSeparatedSolution { row, col });
    }
    Ok(sol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    const INTERCALATE_T1: [[i64; 2]; 2] = [[0, 1], [1, 0]];
    const U1: [[i64; 3]; 3] = [[0, 1, 2], [1, -1, 0], [-1, 2, 1]];

    #[test]
    fn intercalate_solves_to_halves() {
        let t = PartialTable::from_rows(&INTERCALATE_T1).unwrap();
        let sol = solve_system(&t, 0, 0, SolveCfg::default()).unwrap();
        assert_eq!(sol.rows, vec![q(0, 1), q(1, 2)]);
        assert_eq!(sol.cols, vec![q(0, 1), q(1, 2)]);
        assert_eq!(sol.syms, vec![q(1, 1), q(1, 2)]);
        assert_eq!(sol.base, BaseCell { row: 0, col: 0, sym: 0 });
        assert!(sol.is_separated());
        assert_eq!(sol.scale(), BigInt::from(2));
    }

    #[test]
    fn strict_mode_rejects_coincident_lines() {
        let t = PartialTable::from_rows(&U1).unwrap();
        let sol = solve_system(&t, 0, 0, SolveCfg::default()).unwrap();
        assert_eq!(sol.rows, vec![q(0, 1), q(1, 2), q(0, 1)]);
        assert!(!sol.is_separated());
        let err = solve_system(
            &t,
            0,
            0,
            SolveCfg {
                only_separated: true,
            },
        )
        .unwrap_err();
        assert_eq!(err, DissectionError::NoSeparatedSolution { row: 0, col: 0 });
        assert!(err.is_recoverable());
    }

    #[test]
    fn empty_base_cell_is_rejected() {
        let t = PartialTable::from_rows(&U1).unwrap();
        let err = solve_system(&t, 1, 1, SolveCfg::default()).unwrap_err();
        assert_eq!(err, DissectionError::InvalidBaseCell { row: 1, col: 1 });
    }

    #[test]
    fn system_shape_counts_pins() {
        let t = PartialTable::from_rows(&U1).unwrap();
        let sys = LinearSystem::build(&t, 0, 0).unwrap();
        // 7 filled cells -> 6 plain equations + 3 pins; 3 + 3 + 3 variables + rhs
        assert_eq!(sys.dimensions(), (9, 10));
    }

    #[test]
    fn unused_row_label_is_named() {
        const GAP: [[i64; 3]; 3] = [[0, -1, 1], [-1, -1, -1], [1, -1, 0]];
        let t = PartialTable::from_rows(&GAP).unwrap();
        let err = solve_system(&t, 0, 0, SolveCfg::default()).unwrap_err();
        assert_eq!(
            err,
            DissectionError::InvalidBitrade {
                reason: "row label 1 is unused; renumber with Bitrade::compact".into()
            }
        );
    }

    #[test]
    fn single_cell_table_is_underdetermined() {
        const ONE: [[i64; 2]; 2] = [[0, -1], [-1, 1]];
        let t = PartialTable::from_rows(&ONE).unwrap();
        let err = solve_system(&t, 0, 0, SolveCfg::default()).unwrap_err();
        assert!(matches!(err, DissectionError::InvalidBitrade { .. }));
    }
}
