//! Exact-cover mate finder.
//!
//! Purpose
//! - `cover`: a generic exact-cover search (Algorithm X) as a resumable iterator
//!   over an explicit choice stack. Nothing is computed beyond what is pulled.
//! - `mate`: encodes "find a mate of a partial table" as an exact-cover instance
//!   and decodes each cover into a table.
//!
//! Column families for a table of order n (each n² wide):
//! - `(symbol, column)` at `e + c·n`
//! - `(symbol, row)` at `e + r·n + n²`
//! - `(row, column)` at `2n² + r·n + c`
//!
//! Code cross-refs: `dissection::Dissection::generate_via_geometry` asks for one mate.

mod cover;
mod mate;

pub use cover::ExactCover;
pub use mate::{find_mates, mate_rows, MateCfg, Mates};

#[cfg(test)]
mod tests;
