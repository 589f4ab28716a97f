//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for code in this
//!   workspace. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across experiments.

// Tables and bitrades
pub use crate::table::rand::{back_circulant, random_isotope, sample_bitrades, SampleCfg};
pub use crate::table::{strip_common, Bitrade, Entry, LabelCounts, PartialTable};
// Linear system
pub use crate::solve::{solve_system, BaseCell, LinearSystem, Solution, SolveCfg};
// Dissections
pub use crate::dissection::{
    colinear, colinear_and_ordered, is_down_right, line_coordinate, line_kind, sq_distance,
    Dissection, DissectionCfg, LineKind, LineLabels, Phase, Pt, Reconstruction, RenderData,
    TriLabels, Triangle,
};
// Mates
pub use crate::mates::{find_mates, mate_rows, ExactCover, MateCfg, Mates};
// Symmetry
pub use crate::symmetry::{
    automorphism_order, canonical_signature, canonical_signature_eq, equilateral_triangles,
    to_equilateral, transform, CanonicalSignature, EqPoint, EqTriangle, Qs3, Symmetry,
};
pub use crate::error::DissectionError;
