//! Partial assignment tables and bitrades.
//!
//! Purpose
//! - Hold one side of a bitrade as a square grid of optional symbols.
//! - Validate bitrade pairs and compute the genus of their incidence structure.
//! - Produce seeded random bitrades for tests and benches.
//!
//! Code cross-refs: `solve::solve_system`, `mates::find_mates`, `dissection::Dissection`.

mod bitrade;
pub mod rand;
mod types;

pub use bitrade::{strip_common, Bitrade};
pub use types::{Entry, LabelCounts, PartialTable};
