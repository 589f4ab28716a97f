//! The six symmetries of the equilateral triangle `(0, 0)`, `(1, 0)`, `(1/2, √3/2)`.

use super::qs3::Qs3;
use crate::dissection::Pt;

/// Point of the equilateral embedding with exact `Q(√3)` coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EqPoint {
    pub x: Qs3,
    pub y: Qs3,
}

impl EqPoint {
    pub fn new(x: Qs3, y: Qs3) -> Self {
        Self { x, y }
    }
}

/// Skewed frame to equilateral frame: `(x, y) ↦ (x + y/2, (√3/2) y)`.
pub fn to_equilateral(p: &Pt) -> EqPoint {
    let y = Qs3::rational(p.y.clone());
    let x = &Qs3::rational(p.x.clone()) + &y.half();
    EqPoint::new(x, y.mul_half_sqrt3())
}

/// Dihedral group of order 6 acting on the outer triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    /// 120° about the centroid, `(0, 0) ↦ (1, 0)`.
    Rotate,
    RotateInverse,
    /// Mirror in the vertical axis `x = 1/2`.
    ReflectVertical,
    /// Mirror fixing `(0, 0)`.
    ReflectFixingLeft,
    /// Mirror fixing `(1, 0)`.
    ReflectFixingRight,
}

impl Symmetry {
    pub const ALL: [Symmetry; 6] = [
        Symmetry::Identity,
        Symmetry::Rotate,
        Symmetry::RotateInverse,
        Symmetry::ReflectVertical,
        Symmetry::ReflectFixingLeft,
        Symmetry::ReflectFixingRight,
    ];

    pub fn apply(self, p: &EqPoint) -> EqPoint {
        match self {
            Symmetry::Identity => p.clone(),
            Symmetry::Rotate => rotate(p),
            Symmetry::RotateInverse => rotate_inv(p),
            Symmetry::ReflectVertical => reflect(p),
            Symmetry::ReflectFixingLeft => rotate(&reflect(&rotate_inv(p))),
            Symmetry::ReflectFixingRight => rotate_inv(&reflect(&rotate(p))),
        }
    }

    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate => Symmetry::RotateInverse,
            Symmetry::RotateInverse => Symmetry::Rotate,
            s => s,
        }
    }
}

/// `(x, y) ↦ (1 - x/2 - (√3/2) y, (√3/2) x - y/2)`
fn rotate(p: &EqPoint) -> EqPoint {
    let x = &(&Qs3::one() - &p.x.half()) - &p.y.mul_half_sqrt3();
    let y = &p.x.mul_half_sqrt3() - &p.y.half();
    EqPoint::new(x, y)
}

/// `(x, y) ↦ (1/2 - x/2 + (√3/2) y, √3/2 - (√3/2) x - y/2)`
fn rotate_inv(p: &EqPoint) -> EqPoint {
    let x = &(&Qs3::one().half() - &p.x.half()) + &p.y.mul_half_sqrt3();
    let y = &(&Qs3::half_sqrt3() - &p.x.mul_half_sqrt3()) - &p.y.half();
    EqPoint::new(x, y)
}

fn reflect(p: &EqPoint) -> EqPoint {
    EqPoint::new(&Qs3::one() - &p.x, p.y.clone())
}
