//! Triangles from the solved line system.

use std::collections::{BTreeMap, BTreeSet};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use tracing::{debug, info, warn};

use super::geom::{Pt, Triangle};
use super::types::{DissectionCfg, LineLabels, Phase, Reconstruction};
use crate::error::DissectionError;
use crate::solve::{solve_system, Solution};
use crate::table::{Bitrade, Entry, PartialTable};

/// Triangle dissection of the unit triangle built from one bitrade and one base cell.
///
/// Owns the triangle set, the point -> incident triangles index and the cyclic
/// boundary corner list. Adjacency queries borrow it; `remove_triangle`, `core`
/// and `generate_via_geometry` mutate it in place.
#[derive(Clone, Debug)]
pub struct Dissection {
    pub(super) solution: Solution,
    pub(super) scale: BigInt,
    pub(super) triangles: BTreeSet<Triangle>,
    pub(super) points: BTreeMap<Pt, Vec<Triangle>>,
    pub(super) corners: Vec<Pt>,
    pub(super) six_way: BTreeSet<Pt>,
    pub(super) irregular: Vec<Pt>,
    pub(super) degenerate: Vec<Entry>,
    pub(super) phase: Phase,
    pub(super) reconstruction: Option<Reconstruction>,
}

impl Dissection {
    /// Solve the line system of `T1` pinned at `(row, col)` and place one
    /// triangle per filled cell of `T2`.
    ///
    /// Cells whose triangle has zero side are kept as degenerate entries.
    pub fn new(
        bitrade: &Bitrade,
        row: usize,
        col: usize,
        cfg: DissectionCfg,
    ) -> Result<Self, DissectionError> {
        let solution = solve_system(bitrade.t1(), row, col, cfg.solve)?;
        let scale = solution.scale();
        let (triangles, degenerate) = place_triangles(&solution, bitrade.t2())?;
        let points = index_points(&triangles);
        let (six_way, irregular) = classify_points(&points);

        let zero = BigRational::zero;
        let one = BigRational::one;
        let corners = vec![
            Pt::new(zero(), zero()),
            Pt::new(zero(), one()),
            Pt::new(one(), zero()),
        ];

        info!(
            row,
            col,
            triangles = triangles.len(),
            degenerate = degenerate.len(),
            six_way = six_way.len(),
            scale = %scale,
            "dissection built"
        );
        Ok(Self {
            solution,
            scale,
            triangles,
            points,
            corners,
            six_way,
            irregular,
            degenerate,
            phase: Phase::Geometry,
            reconstruction: None,
        })
    }

    pub fn triangles(&self) -> &BTreeSet<Triangle> {
        &self.triangles
    }

    /// Every vertex with its incident triangles.
    pub fn points(&self) -> &BTreeMap<Pt, Vec<Triangle>> {
        &self.points
    }

    /// Current boundary, cyclic.
    pub fn corners(&self) -> &[Pt] {
        &self.corners
    }

    /// Triangles incident to `p`; empty for unknown points.
    pub fn incident(&self, p: &Pt) -> &[Triangle] {
        self.points.get(p).map_or(&[], Vec::as_slice)
    }

    /// Points with exactly six incident triangles, as extracted.
    pub fn six_way_points(&self) -> &BTreeSet<Pt> {
        &self.six_way
    }

    /// Points with four or five incident triangles, as extracted.
    pub fn irregular_points(&self) -> &[Pt] {
        &self.irregular
    }

    /// Cells of `T2` whose triangle collapsed to a point.
    pub fn degenerate_entries(&self) -> &[Entry] {
        &self.degenerate
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Common denominator `n` of the solution.
    pub fn scale(&self) -> &BigInt {
        &self.scale
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Set by `generate_via_geometry`.
    pub fn reconstruction(&self) -> Option<&Reconstruction> {
        self.reconstruction.as_ref()
    }

    /// Horizontal, vertical and diagonal lines of the current triangles.
    pub fn lines_of_trade(&self) -> LineLabels {
        LineLabels::from_triangles(&self.triangles)
    }

    pub(super) fn reject_phase(&self, op: &'static str, phase: Phase) -> Result<(), DissectionError> {
        if self.phase == phase {
            return Err(DissectionError::Phase {
                op,
                phase: self.phase,
            });
        }
        Ok(())
    }
}

/// One triangle per filled cell of `t2`; zero-size cells come back as degenerate entries.
pub(super) fn place_triangles(
    solution: &Solution,
    t2: &PartialTable,
) -> Result<(BTreeSet<Triangle>, Vec<Entry>), DissectionError> {
    let mut triangles = BTreeSet::new();
    let mut degenerate = Vec::new();
    for e in t2.entries() {
        let (Some(wr), Some(wc), Some(ws)) = (
            solution.rows.get(e.row),
            solution.cols.get(e.col),
            solution.syms.get(e.sym),
        ) else {
            return Err(DissectionError::invalid(format!(
                "cell ({}, {}) of the second table uses a label absent from the first",
                e.row, e.col
            )));
        };
        if (ws - wr - wc).is_zero() {
            degenerate.push(e);
            continue;
        }
        let t = Triangle::new(
            Pt::new(wc.clone(), wr.clone()),
            Pt::new(wc.clone(), ws - wc),
            Pt::new(ws - wr, wr.clone()),
        );
        if triangles.contains(&t) {
            return Err(DissectionError::DuplicateTriangleKey { triangle: t });
        }
        triangles.insert(t);
    }
    Ok((triangles, degenerate))
}

/// Six-way points, and points with 4 or 5 incident triangles.
pub(super) fn classify_points(points: &BTreeMap<Pt, Vec<Triangle>>) -> (BTreeSet<Pt>, Vec<Pt>) {
    let mut six_way = BTreeSet::new();
    let mut irregular = Vec::new();
    for (p, incident) in points {
        match incident.len() {
            6 => {
                six_way.insert(p.clone());
            }
            4 | 5 => {
                warn!(point = %p, incident = incident.len(), "point with 4 or 5 incident triangles");
                irregular.push(p.clone());
            }
            _ => {}
        }
    }
    (six_way, irregular)
}

pub(super) fn index_points(triangles: &BTreeSet<Triangle>) -> BTreeMap<Pt, Vec<Triangle>> {
    let mut points: BTreeMap<Pt, Vec<Triangle>> = BTreeMap::new();
    for t in triangles {
        for v in t.vertices() {
            points.entry(v.clone()).or_default().push(t.clone());
        }
    }
    debug!(points = points.len(), "point index");
    points
}
