//! Canonical signature: the least image of a triangle set under the group.

use std::fmt;

use num_rational::BigRational;

use super::group::{to_equilateral, EqPoint, Symmetry};
use crate::dissection::Triangle;

/// Equilateral triangle with sorted vertices.
pub type EqTriangle = [EqPoint; 3];

/// Flattened sorted image `[x.a, x.b, y.a, y.b, ...]`, lexicographically least
/// over the six symmetries. Equal signatures mean congruent dissections.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalSignature(Vec<BigRational>);

impl CanonicalSignature {
    pub fn values(&self) -> &[BigRational] {
        &self.0
    }
}

impl fmt::Display for CanonicalSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

fn sorted_triangle(mut t: EqTriangle) -> EqTriangle {
    t.sort();
    t
}

pub fn equilateral_triangles<'a>(
    triangles: impl IntoIterator<Item = &'a Triangle>,
) -> Vec<EqTriangle> {
    triangles
        .into_iter()
        .map(|t| sorted_triangle(t.vertices().clone().map(|p| to_equilateral(&p))))
        .collect()
}

/// Image of a triangle set under `g`, each triangle sorted, the list sorted.
pub fn transform(triangles: &[EqTriangle], g: Symmetry) -> Vec<EqTriangle> {
    let mut image: Vec<EqTriangle> = triangles
        .iter()
        .map(|t| sorted_triangle(t.clone().map(|p| g.apply(&p))))
        .collect();
    image.sort();
    image
}

fn flatten(image: Vec<EqTriangle>) -> Vec<BigRational> {
    image
        .into_iter()
        .flatten()
        .flat_map(|p| [p.x.a, p.x.b, p.y.a, p.y.b])
        .collect()
}

pub fn canonical_signature_eq(triangles: &[EqTriangle]) -> CanonicalSignature {
    // Sorted images compare exactly like their flattenings: every entry has the same width.
    let least = Symmetry::ALL
        .into_iter()
        .map(|g| transform(triangles, g))
        .min()
        .unwrap_or_default();
    CanonicalSignature(flatten(least))
}

pub fn canonical_signature<'a>(
    triangles: impl IntoIterator<Item = &'a Triangle>,
) -> CanonicalSignature {
    canonical_signature_eq(&equilateral_triangles(triangles))
}

/// Number of group elements whose image equals the identity image (1, 2, 3 or 6).
pub fn automorphism_order<'a>(triangles: impl IntoIterator<Item = &'a Triangle>) -> usize {
    let eq = equilateral_triangles(triangles);
    let base = transform(&eq, Symmetry::Identity);
    1 + Symmetry::ALL
        .into_iter()
        .filter(|&g| g != Symmetry::Identity)
        .filter(|&g| transform(&eq, g) == base)
        .count()
}
