//! Symmetries of the outer triangle and canonical signatures.
//!
//! Purpose
//! - Map skewed dissection points into the equilateral embedding with exact
//!   `a + b√3` coordinates (`Qs3`), so images compare without rounding.
//! - Apply the six elements of D3 and take the lexicographically least sorted
//!   image as a congruence-invariant key.
//! - Count the elements that fix a dissection (automorphism order).
//!
//! Pure functions throughout; nothing here holds state between calls.

mod group;
mod qs3;
mod signature;

pub use group::{to_equilateral, EqPoint, Symmetry};
pub use qs3::Qs3;
pub use signature::{
    automorphism_order, canonical_signature, canonical_signature_eq, equilateral_triangles,
    transform, CanonicalSignature, EqTriangle,
};
