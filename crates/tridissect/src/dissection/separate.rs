//! Six-way point separation and bitrade reconstruction.
//!
//! A six-way point is where two distinct columns (and two distinct symbols) of
//! the underlying bitrade meet at one location. Labels are first read off the
//! lines; then, for each six-way point in sorted order, the vertical segments
//! below it and the diagonal segments below-right of it get a fresh label,
//! walking away from the point until the next six-way point or a dead end.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::extract::Dissection;
use super::geom::{colinear, is_down_right, line_coordinate, line_kind, LineKind, Pt, Triangle};
use super::types::{LineLabels, Phase, Reconstruction, TriLabels};
use crate::error::DissectionError;
use crate::mates::{find_mates, MateCfg};
use crate::table::{Bitrade, PartialTable};

/// `t` has a vertical side on the line through `six`, reaching below it.
fn has_side_below(t: &Triangle, six: &Pt) -> bool {
    t.edges().into_iter().any(|(r, s)| {
        line_kind(r, s) == LineKind::Vertical && r.x == six.x && (r.y < six.y || s.y < six.y)
    })
}

/// `t` has a diagonal side on the line through `six`, down-right of it.
fn has_side_below_right(t: &Triangle, six: &Pt) -> bool {
    let Some((r, s)) = t.edge_of_kind(LineKind::Diagonal) else {
        return false;
    };
    if r == six {
        return s.x > six.x;
    }
    if s == six {
        return r.x > six.x;
    }
    is_down_right(six, r) && is_down_right(six, s) && colinear(six, r, s)
}

fn labels_of(t: &Triangle, lines: &LineLabels) -> Result<TriLabels, DissectionError> {
    let mut row = None;
    let mut col = None;
    let mut sym = None;
    for (a, b) in t.edges() {
        let kind = line_kind(a, b);
        let label = lines
            .family(kind)
            .get(&line_coordinate(kind, a))
            .copied();
        match kind {
            LineKind::Horizontal => row = label,
            LineKind::Vertical => col = label,
            LineKind::Diagonal => sym = label,
        }
    }
    match (row, col, sym) {
        (Some(row), Some(col), Some(sym)) => Ok(TriLabels { row, col, sym }),
        _ => Err(DissectionError::reconstruction(format!(
            "triangle {t} is not bounded by one line of each kind"
        ))),
    }
}

#[derive(Clone, Copy)]
enum Pass {
    Column,
    Symbol,
}

impl Dissection {
    /// Label lines, separate six-way points and rebuild the bitrade `(X1, X2)`.
    ///
    /// `X2` is read from the triangle labels, `X1` is the first disjoint mate of `X2`,
    /// and the pair must be a genus-0 bitrade.
    pub fn generate_via_geometry(&mut self) -> Result<&Reconstruction, DissectionError> {
        if self.phase != Phase::Geometry {
            return Err(DissectionError::Phase {
                op: "generate_via_geometry",
                phase: self.phase,
            });
        }

        let lines = self.lines_of_trade();
        let mut labels = BTreeMap::new();
        for t in &self.triangles {
            labels.insert(t.clone(), labels_of(t, &lines)?);
        }

        let mut next_col = lines.vertical.len();
        let mut next_sym = lines.diagonal.len();
        let mut separated_columns = BTreeMap::new();
        let mut separated_symbols = BTreeMap::new();
        for six in &self.six_way {
            self.relabel_from(six, Pass::Column, next_col, &mut labels, &mut separated_columns);
            self.relabel_from(six, Pass::Symbol, next_sym, &mut labels, &mut separated_symbols);
            next_col += 1;
            next_sym += 1;
        }

        let dim = lines.horizontal.len().max(next_col).max(next_sym);
        let mut x2 = PartialTable::new(dim);
        for (t, l) in &labels {
            match x2.get(l.row, l.col) {
                Some(s) if s != l.sym => {
                    return Err(DissectionError::reconstruction(format!(
                        "cell ({}, {}) claimed by symbols {s} and {} (triangle {t})",
                        l.row, l.col, l.sym
                    )));
                }
                _ => x2.set(l.row, l.col, l.sym),
            }
        }
        if !x2.is_partial_latin() {
            return Err(DissectionError::reconstruction(
                "labelled table is not partial Latin",
            ));
        }

        let x1 = find_mates(&x2, MateCfg::default())
            .next()
            .ok_or(DissectionError::NoMateFound)?;
        debug!(order = dim, cells = x2.filled_cells(), "mate of labelled table found");

        let bitrade = Bitrade::new(x1.clone(), x2.clone())
            .map_err(|e| DissectionError::reconstruction(e.to_string()))?;
        match bitrade.genus() {
            Some(0) => {}
            g => {
                return Err(DissectionError::reconstruction(format!(
                    "reconstructed bitrade has genus {g:?}"
                )))
            }
        }

        info!(
            six_way = self.six_way.len(),
            separated_columns = separated_columns.len(),
            separated_symbols = separated_symbols.len(),
            order = dim,
            "separation finished"
        );
        self.phase = Phase::Separated;
        Ok(self.reconstruction.insert(Reconstruction {
            x1,
            x2,
            labels,
            lines,
            separated_columns,
            separated_symbols,
        }))
    }

    /// Give `fresh` to every column (or symbol) side beyond `six`, walking
    /// down (or down-right) until a dead end or another six-way point.
    fn relabel_from(
        &self,
        six: &Pt,
        pass: Pass,
        fresh: usize,
        labels: &mut BTreeMap<Triangle, TriLabels>,
        separated: &mut BTreeMap<usize, usize>,
    ) {
        let mut at = six.clone();
        loop {
            for t in self.incident(&at) {
                let beyond = match pass {
                    Pass::Column => has_side_below(t, six),
                    Pass::Symbol => has_side_below_right(t, six),
                };
                if !beyond {
                    continue;
                }
                let Some(l) = labels.get_mut(t) else {
                    continue;
                };
                let slot = match pass {
                    Pass::Column => &mut l.col,
                    Pass::Symbol => &mut l.sym,
                };
                if *slot != fresh {
                    separated.insert(*slot, fresh);
                }
                *slot = fresh;
            }
            let step = match pass {
                Pass::Column => self.walk_down(&at),
                Pass::Symbol => self.walk_down_right(&at),
            };
            match step {
                Some(p) if !self.six_way.contains(&p) => at = p,
                _ => break,
            }
        }
    }
}
