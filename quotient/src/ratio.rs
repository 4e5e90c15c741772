//! Exchange format for exact rationals.
//!
//! A [`BigRational`] travels as a `[numerator, denominator]` pair of decimal
//! strings. Strings keep arbitrary precision intact through JSON, and the
//! pair form is readable by consumers that have no rational type of their
//! own. Values are always written in lowest terms with a positive
//! denominator; reading accepts any non-zero denominator and reduces.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes a rational as `[numer, denom]`.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(value: &BigRational, serializer: S) -> Result<S::Ok, S::Error> {
    (value.numer().to_string(), value.denom().to_string()).serialize(serializer)
}

/// Deserializes a rational from `[numer, denom]`.
///
/// # Errors
///
/// Fails on non-integer strings or a zero denominator.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigRational, D::Error> {
    let (numer, denom) = <(String, String)>::deserialize(deserializer)?;
    let numer: BigInt = numer.trim().parse().map_err(D::Error::custom)?;
    let denom: BigInt = denom.trim().parse().map_err(D::Error::custom)?;
    if denom.is_zero() {
        return Err(D::Error::custom("zero denominator"));
    }
    Ok(BigRational::new(numer, denom))
}

/// Same encoding for `Option<BigRational>`; `None` is `null`.
pub mod option {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Pair(
        #[serde(
            serialize_with = "crate::ratio::serialize",
            deserialize_with = "crate::ratio::deserialize"
        )]
        BigRational,
    );

    /// Serializes an optional rational.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(
        value: &Option<BigRational>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.clone().map(Pair).serialize(serializer)
    }

    /// Deserializes an optional rational.
    ///
    /// # Errors
    ///
    /// Fails on malformed pairs or a zero denominator.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigRational>, D::Error> {
        Ok(Option::<Pair>::deserialize(deserializer)?.map(|p| p.0))
    }
}
