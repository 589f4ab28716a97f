//! Size statistics and symmetry summaries of a dissection.
//!
//! All of these describe the full dissection, so they refuse to run once core
//! reduction has removed triangles.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::One;

use super::extract::Dissection;
use super::types::Phase;
use crate::error::DissectionError;
use crate::symmetry::{self, CanonicalSignature};

impl Dissection {
    /// Integer side at scale `n`, negated for down triangles; in triangle order.
    pub fn signed_sizes(&self) -> Result<Vec<BigInt>, DissectionError> {
        self.reject_phase("signed_sizes", Phase::Reduced)?;
        let n = BigRational::from_integer(self.scale.clone());
        Ok(self
            .triangles
            .iter()
            .map(|t| (t.signed_side() * &n).to_integer())
            .collect())
    }

    /// No two triangles share a signed size.
    pub fn is_perfect(&self) -> Result<bool, DissectionError> {
        let sizes = self.signed_sizes()?;
        let distinct: HashSet<&BigInt> = sizes.iter().collect();
        Ok(distinct.len() == sizes.len())
    }

    /// Smallest integer side of the outer triangle for which every triangle
    /// has integer side.
    pub fn outer_size(&self) -> Result<BigInt, DissectionError> {
        self.reject_phase("outer_size", Phase::Reduced)?;
        Ok(self
            .triangles
            .iter()
            .fold(BigInt::one(), |acc, t| acc.lcm(t.side().denom())))
    }

    /// Sorted integer sides at `outer_size`.
    pub fn element_sizes(&self) -> Result<Vec<BigInt>, DissectionError> {
        let outer = BigRational::from_integer(self.outer_size()?);
        let mut sizes: Vec<BigInt> = self
            .triangles
            .iter()
            .map(|t| (t.side() * &outer).to_integer())
            .collect();
        sizes.sort();
        Ok(sizes)
    }

    /// Largest side over smallest side; `None` without triangles.
    pub fn size_ratio(&self) -> Result<Option<BigRational>, DissectionError> {
        self.reject_phase("size_ratio", Phase::Reduced)?;
        let sides: Vec<BigRational> = self.triangles.iter().map(|t| t.side()).collect();
        Ok(match (sides.iter().max(), sides.iter().min()) {
            (Some(hi), Some(lo)) => Some(hi / lo),
            _ => None,
        })
    }

    /// Some triangle of the largest size has no vertex on the outer triangle.
    pub fn largest_in_interior(&self) -> Result<bool, DissectionError> {
        self.reject_phase("largest_in_interior", Phase::Reduced)?;
        let Some(max) = self.triangles.iter().map(|t| t.side()).max() else {
            return Ok(false);
        };
        Ok(self
            .triangles
            .iter()
            .filter(|t| t.side() == max)
            .any(|t| !t.vertices().iter().any(|v| v.on_outer_boundary())))
    }

    pub fn canonical_signature(&self) -> Result<CanonicalSignature, DissectionError> {
        self.reject_phase("canonical_signature", Phase::Reduced)?;
        Ok(symmetry::canonical_signature(&self.triangles))
    }

    /// Number of symmetries of the outer triangle mapping the dissection onto itself.
    pub fn automorphism_order(&self) -> Result<usize, DissectionError> {
        self.reject_phase("automorphism_order", Phase::Reduced)?;
        Ok(symmetry::automorphism_order(&self.triangles))
    }
}
