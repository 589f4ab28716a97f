//! Exact numbers `a + b√3` with rational `a`, `b`.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// `a + b√3`. Ordered by `(a, b)` lexicographically, which is a total order on
/// the representation (not on the real value) and is all the signature needs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Qs3 {
    pub a: BigRational,
    pub b: BigRational,
}

impl Qs3 {
    pub fn new(a: BigRational, b: BigRational) -> Self {
        Self { a, b }
    }

    pub fn rational(a: BigRational) -> Self {
        Self::new(a, BigRational::zero())
    }

    pub fn zero() -> Self {
        Self::rational(BigRational::zero())
    }

    pub fn one() -> Self {
        Self::rational(BigRational::one())
    }

    /// `√3 / 2`.
    pub fn half_sqrt3() -> Self {
        Self::new(BigRational::zero(), half())
    }

    pub fn half(&self) -> Self {
        let h = half();
        Self::new(&self.a * &h, &self.b * &h)
    }

    /// `self · √3 / 2 = 3b/2 + (a/2)√3`.
    pub fn mul_half_sqrt3(&self) -> Self {
        let h = half();
        let three = BigRational::from_integer(BigInt::from(3));
        Self::new(&self.b * &three * &h, &self.a * &h)
    }

    pub fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }
}

fn half() -> BigRational {
    BigRational::new(BigInt::one(), BigInt::from(2))
}

impl std::ops::Add for &Qs3 {
    type Output = Qs3;
    fn add(self, rhs: &Qs3) -> Qs3 {
        Qs3::new(&self.a + &rhs.a, &self.b + &rhs.b)
    }
}

impl std::ops::Sub for &Qs3 {
    type Output = Qs3;
    fn sub(self, rhs: &Qs3) -> Qs3 {
        Qs3::new(&self.a - &rhs.a, &self.b - &rhs.b)
    }
}

impl std::ops::Neg for &Qs3 {
    type Output = Qs3;
    fn neg(self) -> Qs3 {
        Qs3::new(-&self.a, -&self.b)
    }
}

impl std::ops::Mul for &Qs3 {
    type Output = Qs3;
    /// `(a1 + b1√3)(a2 + b2√3) = (a1a2 + 3b1b2) + (a1b2 + a2b1)√3`.
    fn mul(self, rhs: &Qs3) -> Qs3 {
        let three = BigRational::from_integer(BigInt::from(3));
        Qs3::new(
            &self.a * &rhs.a + &self.b * &rhs.b * &three,
            &self.a * &rhs.b + &rhs.a * &self.b,
        )
    }
}

impl fmt::Display for Qs3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}√3", self.a, self.b)
    }
}
