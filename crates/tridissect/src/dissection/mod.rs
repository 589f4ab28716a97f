//! Triangle dissections of the unit triangle from spherical bitrades.
//!
//! Purpose
//! - Extract triangles from the solved line system (`Dissection::new`).
//! - Answer incidence and boundary queries; strip boundary triangles down to the core.
//! - Separate six-way points and rebuild a genus-0 bitrade from the geometry.
//! - Summarize sizes and symmetry; export render data.
//!
//! Frame
//! - Skewed coordinates: the outer triangle has corners `(0, 0)`, `(0, 1)`, `(1, 0)`.
//!   Rows are horizontal lines `y = c`, columns vertical lines `x = c`,
//!   symbols diagonal lines `x + y = c`.
//! - All coordinates are exact `BigRational`s.
//!
//! Phases
//! - `Geometry` after construction; `generate_via_geometry` moves to `Separated`;
//!   the first removed triangle moves to `Reduced`. Statistics, signatures and
//!   separation refuse `Reduced`.
//!
//! Code cross-refs: `solve::solve_system`, `mates::find_mates`, `symmetry::canonical_signature`.

mod adjacency;
mod export;
mod extract;
mod geom;
mod separate;
mod stats;
mod types;

pub use export::RenderData;
pub use extract::Dissection;
pub use geom::{
    colinear, colinear_and_ordered, is_down_right, line_coordinate, line_kind, sq_distance,
    LineKind, Pt, Triangle,
};
pub use types::{DissectionCfg, LineLabels, Phase, Reconstruction, TriLabels};
