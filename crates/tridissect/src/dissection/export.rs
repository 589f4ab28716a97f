//! Data handed to renderers.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_rational::BigRational;
use serde::Serialize;

use super::extract::Dissection;
use super::geom::Triangle;

/// Triangles, line labels and separation maps of a dissection.
///
/// Line maps are `(coordinate, label)` pairs in coordinate order so that the
/// exact keys survive formats with string-only map keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderData {
    pub scale: BigInt,
    pub triangles: Vec<Triangle>,
    pub horizontal: Vec<(BigRational, usize)>,
    pub vertical: Vec<(BigRational, usize)>,
    pub diagonal: Vec<(BigRational, usize)>,
    pub separated_columns: Vec<(usize, usize)>,
    pub separated_symbols: Vec<(usize, usize)>,
}

impl Dissection {
    /// Snapshot of the current triangles. Line maps come from the separation
    /// when it ran, otherwise from the current triangle set.
    pub fn render_data(&self) -> RenderData {
        let lines = match &self.reconstruction {
            Some(rec) => rec.lines.clone(),
            None => self.lines_of_trade(),
        };
        let pairs = |m: &BTreeMap<BigRational, usize>| {
            m.iter().map(|(k, v)| (k.clone(), *v)).collect::<Vec<_>>()
        };
        let (separated_columns, separated_symbols) = match &self.reconstruction {
            Some(rec) => (
                rec.separated_columns.iter().map(|(a, b)| (*a, *b)).collect(),
                rec.separated_symbols.iter().map(|(a, b)| (*a, *b)).collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };
        RenderData {
            scale: self.scale.clone(),
            triangles: self.triangles.iter().cloned().collect(),
            horizontal: pairs(&lines.horizontal),
            vertical: pairs(&lines.vertical),
            diagonal: pairs(&lines.diagonal),
            separated_columns,
            separated_symbols,
        }
    }
}
