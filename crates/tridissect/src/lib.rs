//! Triangle dissections from spherical latin bitrades.
//!
//! Pipeline
//! - `table`: partial tables, bitrade validation, genus, seeded samplers.
//! - `solve`: exact rational line system pinned at a base cell.
//! - `dissection`: triangles, adjacency, core reduction, separation, statistics.
//! - `mates`: exact-cover search for mates of a partial table.
//! - `symmetry`: D3 action on the outer triangle and canonical signatures.
//!
//! All coordinates are exact `BigRational`s; nothing here rounds.
//!
//! API Policy
//! - There is no stable public API; `api` is a curated surface for callers in
//!   this workspace and may change with the algorithms.

pub mod api;
pub mod dissection;
pub mod error;
pub mod mates;
pub mod solve;
pub mod symmetry;
pub mod table;

#[cfg(test)]
mod fixtures;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dissection::{Dissection, DissectionCfg, Phase, Pt, Triangle};
pub use error::DissectionError;
pub use table::{Bitrade, PartialTable};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dissection::{Dissection, DissectionCfg, Phase, Pt, RenderData, Triangle};
    pub use crate::error::DissectionError;
    pub use crate::mates::{find_mates, MateCfg};
    pub use crate::solve::SolveCfg;
    pub use crate::symmetry::CanonicalSignature;
    pub use crate::table::{Bitrade, PartialTable};
    pub use num_rational::BigRational;
}
