//! Error taxonomy shared by the solver, the dissection engine and the mate finder.
//!
//! Two groups matter to callers:
//! - recoverable conditions (`NoSeparatedSolution`): try another base cell;
//! - invariant violations: defects in upstream data or logic, never retried.

use std::fmt;

use crate::dissection::{Phase, Triangle};

/// Errors surfaced by dissection construction and its phase operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DissectionError {
    /// Malformed or inconsistent input pair (including an unsolvable system).
    InvalidBitrade { reason: String },
    /// Base cell is empty in the table the system is built from.
    InvalidBaseCell { row: usize, col: usize },
    /// Strict mode: the base cell does not give an injective embedding.
    NoSeparatedSolution { row: usize, col: usize },
    /// Two bitrade cells produced the same triangle.
    DuplicateTriangleKey { triangle: Triangle },
    /// Separated labels do not assemble into a genus-0 bitrade.
    Reconstruction { reason: String },
    /// The reconstructed table has no disjoint mate.
    NoMateFound,
    /// The queried edge lies on the boundary.
    NoAdjacentTriangle { triangle: Triangle },
    /// `remove_triangle` called on a corner with more than one incident triangle.
    CornerNotRemovable { corner: usize },
    /// Operation needs a specific number of boundary corners.
    CornerCount { expected: usize, found: usize },
    /// Boundary walk lost track of the corner sequence.
    BrokenBoundary { reason: String },
    /// Operation not allowed in the current phase.
    Phase { op: &'static str, phase: Phase },
}

impl DissectionError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidBitrade {
            reason: reason.into(),
        }
    }

    pub(crate) fn reconstruction(reason: impl Into<String>) -> Self {
        Self::Reconstruction {
            reason: reason.into(),
        }
    }

    /// Expected condition the caller is supposed to branch on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoSeparatedSolution { .. })
    }

    /// Defect in data or logic; propagate to the top of the computation.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateTriangleKey { .. }
                | Self::Reconstruction { .. }
                | Self::NoMateFound
                | Self::NoAdjacentTriangle { .. }
                | Self::BrokenBoundary { .. }
        )
    }
}

impl fmt::Display for DissectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBitrade { reason } => write!(f, "invalid bitrade: {reason}"),
            Self::InvalidBaseCell { row, col } => {
                write!(f, "base cell ({row}, {col}) is empty")
            }
            Self::NoSeparatedSolution { row, col } => {
                write!(f, "base cell ({row}, {col}) gives a non-separated solution")
            }
            Self::DuplicateTriangleKey { triangle } => {
                write!(f, "triangle {triangle} produced by two cells")
            }
            Self::Reconstruction { reason } => write!(f, "reconstruction failed: {reason}"),
            Self::NoMateFound => write!(f, "reconstructed table has no disjoint mate"),
            Self::NoAdjacentTriangle { triangle } => {
                write!(f, "edge of triangle {triangle} lies on the boundary")
            }
            Self::CornerNotRemovable { corner } => {
                write!(f, "corner {corner} has more than one incident triangle")
            }
            Self::CornerCount { expected, found } => {
                write!(f, "expected {expected} boundary corners, found {found}")
            }
            Self::BrokenBoundary { reason } => write!(f, "broken boundary: {reason}"),
            Self::Phase { op, phase } => write!(f, "{op} not allowed in phase {phase:?}"),
        }
    }
}

impl std::error::Error for DissectionError {}
