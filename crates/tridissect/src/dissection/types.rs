//! Phase tag, configuration and reconstruction records.

use std::collections::BTreeMap;

use num_rational::BigRational;
use serde::Serialize;

use super::geom::{line_coordinate, line_kind, LineKind, Pt, Triangle};
use crate::solve::SolveCfg;
use crate::table::PartialTable;

/// Lifecycle of a dissection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Triangles as extracted from the solved system.
    Geometry,
    /// Lines labelled, six-way points split, bitrade reconstructed.
    Separated,
    /// At least one boundary triangle removed.
    Reduced,
}

/// Dissection construction settings.
#[derive(Clone, Copy, Debug, Default)]
pub struct DissectionCfg {
    pub solve: SolveCfg,
}

/// Row, column and symbol label of one triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TriLabels {
    pub row: usize,
    pub col: usize,
    pub sym: usize,
}

/// Lines of the current triangle set, each family numbered in increasing
/// coordinate order (`y` for horizontal, `x` for vertical, `x + y` for diagonal).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineLabels {
    pub horizontal: BTreeMap<BigRational, usize>,
    pub vertical: BTreeMap<BigRational, usize>,
    pub diagonal: BTreeMap<BigRational, usize>,
}

impl LineLabels {
    pub(crate) fn from_triangles<'a>(tris: impl IntoIterator<Item = &'a Triangle>) -> Self {
        let mut out = Self::default();
        for t in tris {
            for (a, b) in t.edges() {
                let kind = line_kind(a, b);
                out.family_mut(kind).insert(line_coordinate(kind, a), 0);
            }
        }
        for family in [&mut out.horizontal, &mut out.vertical, &mut out.diagonal] {
            for (i, label) in family.values_mut().enumerate() {
                *label = i;
            }
        }
        out
    }

    fn family_mut(&mut self, kind: LineKind) -> &mut BTreeMap<BigRational, usize> {
        match kind {
            LineKind::Horizontal => &mut self.horizontal,
            LineKind::Vertical => &mut self.vertical,
            LineKind::Diagonal => &mut self.diagonal,
        }
    }

    pub fn family(&self, kind: LineKind) -> &BTreeMap<BigRational, usize> {
        match kind {
            LineKind::Horizontal => &self.horizontal,
            LineKind::Vertical => &self.vertical,
            LineKind::Diagonal => &self.diagonal,
        }
    }

    /// Label of the line through `a` and `b`.
    pub fn label_of(&self, a: &Pt, b: &Pt) -> Option<usize> {
        let kind = line_kind(a, b);
        self.family(kind).get(&line_coordinate(kind, a)).copied()
    }
}

/// Result of `Dissection::generate_via_geometry`.
#[derive(Clone, Debug)]
pub struct Reconstruction {
    /// Mate of `x2` found by the exact-cover search.
    pub x1: PartialTable,
    /// Table read off the labelled triangles.
    pub x2: PartialTable,
    pub labels: BTreeMap<Triangle, TriLabels>,
    pub lines: LineLabels,
    /// Old column label -> fresh label, for columns split at six-way points.
    pub separated_columns: BTreeMap<usize, usize>,
    /// Old symbol label -> fresh label.
    pub separated_symbols: BTreeMap<usize, usize>,
}
