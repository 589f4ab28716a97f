//! Exact points, triangles and line predicates in the skewed unit-triangle frame.
//!
//! The outer triangle is bounded by `y = 0` (rows), `x = 0` (columns) and
//! `x + y = 1` (symbols). Every dissection edge lies on one of these three families.

use std::fmt;

use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use serde::Serialize;

/// Exact-rational point; ordered by `x`, then `y`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pt {
    pub x: BigRational,
    pub y: BigRational,
}

impl Pt {
    pub fn new(x: BigRational, y: BigRational) -> Self {
        Self { x, y }
    }

    /// `x + y`: the diagonal line through this point.
    pub fn diagonal(&self) -> BigRational {
        &self.x + &self.y
    }

    /// On one of the three sides of the outer triangle.
    pub fn on_outer_boundary(&self) -> bool {
        self.x.is_zero() || self.y.is_zero() || self.diagonal().is_one()
    }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction family of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `y = const`, labelled by a row.
    Horizontal,
    /// `x = const`, labelled by a column.
    Vertical,
    /// `x + y = const`, labelled by a symbol.
    Diagonal,
}

pub fn line_kind(a: &Pt, b: &Pt) -> LineKind {
    if a.x == b.x {
        LineKind::Vertical
    } else if a.y == b.y {
        LineKind::Horizontal
    } else {
        LineKind::Diagonal
    }
}

/// Coordinate identifying the line through `a` of the given kind.
pub fn line_coordinate(kind: LineKind, a: &Pt) -> BigRational {
    match kind {
        LineKind::Horizontal => a.y.clone(),
        LineKind::Vertical => a.x.clone(),
        LineKind::Diagonal => a.diagonal(),
    }
}

pub fn colinear(u: &Pt, v: &Pt, w: &Pt) -> bool {
    (&v.x - &u.x) * (&w.y - &u.y) == (&v.y - &u.y) * (&w.x - &u.x)
}

fn strictly_between(a: &BigRational, b: &BigRational, c: &BigRational) -> bool {
    (a < b && b < c) || (a > b && b > c)
}

/// `v` lies strictly inside the segment `u`–`w`.
pub fn colinear_and_ordered(u: &Pt, v: &Pt, w: &Pt) -> bool {
    if !colinear(u, v, w) {
        return false;
    }
    if u.x == v.x && v.x == w.x {
        strictly_between(&u.y, &v.y, &w.y)
    } else {
        strictly_between(&u.x, &v.x, &w.x)
    }
}

/// `b` is strictly right of and strictly below `a`.
pub fn is_down_right(a: &Pt, b: &Pt) -> bool {
    a.x < b.x && a.y > b.y
}

pub fn sq_distance(a: &Pt, b: &Pt) -> BigRational {
    let dx = &a.x - &b.x;
    let dy = &a.y - &b.y;
    &dx * &dx + &dy * &dy
}

/// Triangle keyed by its sorted vertex triple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Triangle([Pt; 3]);

impl Triangle {
    pub fn new(a: Pt, b: Pt, c: Pt) -> Self {
        let mut v = [a, b, c];
        v.sort();
        Self(v)
    }

    pub fn vertices(&self) -> &[Pt; 3] {
        &self.0
    }

    pub fn contains(&self, p: &Pt) -> bool {
        self.0.iter().any(|v| v == p)
    }

    /// The three sides as vertex pairs.
    pub fn edges(&self) -> [(&Pt, &Pt); 3] {
        let [a, b, c] = &self.0;
        [(a, b), (b, c), (c, a)]
    }

    /// The side of the given kind, if the triangle has one.
    pub fn edge_of_kind(&self, kind: LineKind) -> Option<(&Pt, &Pt)> {
        self.edges().into_iter().find(|(a, b)| line_kind(a, b) == kind)
    }

    /// Vertices other than `p`.
    pub fn others<'a>(&'a self, p: &'a Pt) -> impl Iterator<Item = &'a Pt> + 'a {
        self.0.iter().filter(move |v| *v != p)
    }

    /// Side length, measured along the horizontal side.
    pub fn side(&self) -> BigRational {
        match self.edge_of_kind(LineKind::Horizontal) {
            Some((a, b)) => (&a.x - &b.x).abs(),
            None => BigRational::zero(),
        }
    }

    /// Apex above the horizontal side.
    pub fn is_up(&self) -> bool {
        match self.edge_of_kind(LineKind::Horizontal) {
            Some((a, b)) => self.others(a).any(|v| v != b && v.y > a.y),
            None => false,
        }
    }

    /// Side length, negated for down triangles.
    pub fn signed_side(&self) -> BigRational {
        if self.is_up() {
            self.side()
        } else {
            -self.side()
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.0;
        write!(f, "[{a}, {b}, {c}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn pt(xn: i64, xd: i64, yn: i64, yd: i64) -> Pt {
        Pt::new(
            BigRational::new(BigInt::from(xn), BigInt::from(xd)),
            BigRational::new(BigInt::from(yn), BigInt::from(yd)),
        )
    }

    #[test]
    fn line_kinds() {
        assert_eq!(line_kind(&pt(0, 1, 0, 1), &pt(0, 1, 1, 1)), LineKind::Vertical);
        assert_eq!(line_kind(&pt(0, 1, 0, 1), &pt(1, 1, 0, 1)), LineKind::Horizontal);
        assert_eq!(line_kind(&pt(0, 1, 1, 1), &pt(1, 1, 0, 1)), LineKind::Diagonal);
    }

    #[test]
    fn ordered_points_on_lines() {
        let (a, b, c) = (pt(0, 1, 0, 1), pt(0, 1, 1, 2), pt(0, 1, 1, 1));
        assert!(colinear_and_ordered(&a, &b, &c));
        assert!(colinear_and_ordered(&c, &b, &a));
        assert!(!colinear_and_ordered(&a, &c, &b));
        let (d, e, f) = (pt(0, 1, 1, 1), pt(1, 4, 3, 4), pt(1, 1, 0, 1));
        assert!(colinear_and_ordered(&d, &e, &f));
        assert!(!colinear_and_ordered(&d, &e, &pt(1, 1, 1, 1)));
    }

    #[test]
    fn down_right() {
        assert!(is_down_right(&pt(0, 1, 0, 1), &pt(1, 1, -1, 1)));
        assert!(!is_down_right(&pt(0, 1, 0, 1), &pt(1, 1, 0, 1)));
        assert!(!is_down_right(&pt(0, 1, 0, 1), &pt(0, 1, 0, 1)));
    }

    #[test]
    fn triangle_key_is_sorted_and_oriented() {
        let up = Triangle::new(pt(1, 2, 0, 1), pt(0, 1, 0, 1), pt(0, 1, 1, 2));
        assert_eq!(up.vertices()[0], pt(0, 1, 0, 1));
        assert!(up.is_up());
        assert_eq!(up.side(), BigRational::new(1.into(), 2.into()));
        let down = Triangle::new(pt(0, 1, 1, 2), pt(1, 2, 0, 1), pt(1, 2, 1, 2));
        assert!(!down.is_up());
        assert_eq!(down.signed_side(), BigRational::new((-1).into(), 2.into()));
    }
}
