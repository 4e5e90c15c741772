//! Property-based tests for exact scalar arithmetic.
//!
//! Every identity here is checked with rational equality; a single rounding
//! step anywhere would break them.

use exact_quotient::ExactScalar;
use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = ExactScalar> {
    (-1000i64..1000, 1i64..1000, -1000i64..1000, 1i64..1000).prop_map(|(a, b, c, d)| {
        ExactScalar::new(
            BigRational::new(BigInt::from(a), BigInt::from(b)),
            BigRational::new(BigInt::from(c), BigInt::from(d)),
        )
    })
}

proptest! {
    /// ‖(a/b, c/d)‖² = a²/b² + c²/d²
    #[test]
    fn prop_norm_matches_formula(a in -1000i64..1000, b in 1i64..1000, c in -1000i64..1000, d in 1i64..1000) {
        let z = ExactScalar::from_fractions(a, b, c, d).unwrap();
        let expected = BigRational::new(BigInt::from(a * a), BigInt::from(b * b))
            + BigRational::new(BigInt::from(c * c), BigInt::from(d * d));
        prop_assert_eq!(z.norm_squared(), expected);
    }

    /// Scaling numerator and denominator by k yields an equal scalar.
    #[test]
    fn prop_equality_independent_of_path(a in -1000i64..1000, b in 1i64..1000, k in 1i64..50) {
        let x = ExactScalar::from_fractions(a, b, a, b).unwrap();
        let y = ExactScalar::from_fractions(a * k, b * k, -a * k, -b * k).unwrap();
        prop_assert_eq!(x, y);
    }

    /// ‖zw‖² = ‖z‖²·‖w‖²
    #[test]
    fn prop_norm_multiplicative(z in scalar(), w in scalar()) {
        prop_assert_eq!((&z * &w).norm_squared(), z.norm_squared() * w.norm_squared());
    }

    /// z·z̄ = ‖z‖² + 0i
    #[test]
    fn prop_conj_product(z in scalar()) {
        let p = &z * &z.conj();
        prop_assert_eq!(p, ExactScalar::new(z.norm_squared(), BigRational::from_integer(BigInt::from(0))));
    }

    /// (z + w) - w = z
    #[test]
    fn prop_add_sub_inverse(z in scalar(), w in scalar()) {
        prop_assert_eq!(&(&z + &w) - &w, z);
    }

    /// Norm is never negative and is zero only at the origin.
    #[test]
    fn prop_norm_nonnegative(z in scalar()) {
        let n = z.norm_squared();
        prop_assert!(n >= BigRational::from_integer(BigInt::from(0)));
        prop_assert_eq!(n == BigRational::from_integer(BigInt::from(0)), z.is_zero());
    }
}
