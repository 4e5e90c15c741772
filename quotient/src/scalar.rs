//! Exact complex scalars with rational components.
//!
//! [`ExactScalar`] is the amplitude type stored in a
//! [`QuotientField`](crate::QuotientField). Both parts are [`BigRational`],
//! so every result is reduced to lowest terms and no operation rounds.
//!
//! # Examples
//!
//! ```
//! use exact_quotient::ExactScalar;
//! use num_rational::BigRational;
//!
//! let half = ExactScalar::from_fractions(1, 2, 1, 2).unwrap();
//! assert_eq!(half.norm_squared(), BigRational::new(1.into(), 2.into()));
//! assert_eq!(ExactScalar::from_integers(1, 1).norm_squared(), BigRational::from_integer(2.into()));
//! ```

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::{QuotientError, Result};

/// A complex number `re + im·i` with exact rational parts.
///
/// Equality is numeric: two scalars built along different paths compare
/// equal whenever their reduced components agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactScalar {
    #[cfg_attr(feature = "serde", serde(with = "crate::ratio"))]
    re: BigRational,
    #[cfg_attr(feature = "serde", serde(with = "crate::ratio"))]
    im: BigRational,
}

impl ExactScalar {
    /// Builds a scalar from two rationals.
    pub fn new(re: BigRational, im: BigRational) -> Self {
        Self { re, im }
    }

    /// Builds a scalar with integer parts.
    pub fn from_integers(re: i64, im: i64) -> Self {
        Self::new(
            BigRational::from_integer(BigInt::from(re)),
            BigRational::from_integer(BigInt::from(im)),
        )
    }

    /// Builds `re_num/re_den + (im_num/im_den)·i`.
    ///
    /// # Errors
    ///
    /// Returns [`QuotientError::ZeroDenominator`] if either denominator is 0.
    pub fn from_fractions(re_num: i64, re_den: i64, im_num: i64, im_den: i64) -> Result<Self> {
        if re_den == 0 || im_den == 0 {
            return Err(QuotientError::ZeroDenominator);
        }
        Ok(Self::new(
            BigRational::new(BigInt::from(re_num), BigInt::from(re_den)),
            BigRational::new(BigInt::from(im_num), BigInt::from(im_den)),
        ))
    }

    /// The additive identity `0 + 0i`.
    pub fn zero() -> Self {
        Self::new(BigRational::zero(), BigRational::zero())
    }

    /// The multiplicative identity `1 + 0i`.
    pub fn one() -> Self {
        Self::new(BigRational::one(), BigRational::zero())
    }

    /// The imaginary unit `0 + 1i`.
    pub fn i() -> Self {
        Self::new(BigRational::zero(), BigRational::one())
    }

    /// Real part.
    pub fn re(&self) -> &BigRational {
        &self.re
    }

    /// Imaginary part.
    pub fn im(&self) -> &BigRational {
        &self.im
    }

    /// Returns `true` for `0 + 0i`.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Complex conjugate `re - im·i`.
    pub fn conj(&self) -> Self {
        Self::new(self.re.clone(), -&self.im)
    }

    /// `re² + im²`, computed exactly.
    pub fn norm_squared(&self) -> BigRational {
        &self.re * &self.re + &self.im * &self.im
    }
}

impl Default for ExactScalar {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for ExactScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_negative() {
            write!(f, "{} - {}i", self.re, -&self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

impl<'a> Add<&'a ExactScalar> for &'a ExactScalar {
    type Output = ExactScalar;

    fn add(self, rhs: &'a ExactScalar) -> ExactScalar {
        ExactScalar::new(&self.re + &rhs.re, &self.im + &rhs.im)
    }
}

impl<'a> Sub<&'a ExactScalar> for &'a ExactScalar {
    type Output = ExactScalar;

    fn sub(self, rhs: &'a ExactScalar) -> ExactScalar {
        ExactScalar::new(&self.re - &rhs.re, &self.im - &rhs.im)
    }
}

impl<'a> Mul<&'a ExactScalar> for &'a ExactScalar {
    type Output = ExactScalar;

    fn mul(self, rhs: &'a ExactScalar) -> ExactScalar {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        ExactScalar::new(
            &self.re * &rhs.re - &self.im * &rhs.im,
            &self.re * &rhs.im + &self.im * &rhs.re,
        )
    }
}

impl Neg for &ExactScalar {
    type Output = ExactScalar;

    fn neg(self) -> ExactScalar {
        ExactScalar::new(-&self.re, -&self.im)
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl $trait for ExactScalar {
                type Output = ExactScalar;

                fn $method(self, rhs: ExactScalar) -> ExactScalar {
                    (&self).$method(&rhs)
                }
            }
        )*
    };
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul);

impl Neg for ExactScalar {
    type Output = ExactScalar;

    fn neg(self) -> ExactScalar {
        -&self
    }
}
