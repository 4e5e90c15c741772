//! Per-group metadata for the simply-laced exceptional root systems.
//!
//! All group-specific behaviour of the loader and verifier is driven by a
//! [`GroupSpec`]; there is no per-group code path.
//!
//! | Group | Rank | Roots | Root norm² | Representative | Energy | dim 𝔤 |
//! |-------|------|-------|------------|----------------|--------|-------|
//! | E₆ | 6 | 72 | 1 | 1 + 0i | 72 | 78 |
//! | E₇ | 7 | 126 | 1 | 1 + 0i | 126 | 133 |
//! | E₈ | 8 | 240 | 2 | 1 + 1i | 480 | 248 |

use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;

use crate::error::QuotientError;
use crate::field::QuotientField;
use crate::loader::load_canonical;
use crate::scalar::ExactScalar;

/// Cardinality and normalization of one exceptional root system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    /// Display name (`"E6"`, `"E7"`, `"E8"`).
    pub name: &'static str,
    /// Rank of the Lie algebra.
    pub rank: usize,
    /// Number of roots, i.e. the quotient field length.
    pub root_count: usize,
    /// Squared length shared by every root.
    pub norm_squared: i64,
    /// Integer parts of the amplitude replicated across every slot.
    pub representative: (i64, i64),
}

impl GroupSpec {
    /// E₆: 72 roots of squared length 1.
    pub const E6: Self = Self {
        name: "E6",
        rank: 6,
        root_count: 72,
        norm_squared: 1,
        representative: (1, 0),
    };

    /// E₇: 126 roots of squared length 1.
    pub const E7: Self = Self {
        name: "E7",
        rank: 7,
        root_count: 126,
        norm_squared: 1,
        representative: (1, 0),
    };

    /// E₈: 240 roots of squared length 2.
    pub const E8: Self = Self {
        name: "E8",
        rank: 8,
        root_count: 240,
        norm_squared: 2,
        representative: (1, 1),
    };

    /// The amplitude every canonical slot carries.
    pub fn representative_scalar(&self) -> ExactScalar {
        ExactScalar::from_integers(self.representative.0, self.representative.1)
    }

    /// `root_count · norm_squared`, the total energy of a canonical field.
    pub fn expected_energy(&self) -> BigInt {
        BigInt::from(self.root_count) * BigInt::from(self.norm_squared)
    }

    /// Dimension of the Lie algebra: roots plus Cartan generators.
    pub fn dimension(&self) -> usize {
        self.root_count + self.rank
    }
}

/// The three simply-laced exceptional groups handled by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExceptionalGroup {
    /// E₆
    E6,
    /// E₇
    E7,
    /// E₈
    E8,
}

impl ExceptionalGroup {
    /// All groups in rank order.
    pub const ALL: [ExceptionalGroup; 3] = [Self::E6, Self::E7, Self::E8];

    /// Metadata for this group.
    pub const fn spec(self) -> GroupSpec {
        match self {
            Self::E6 => GroupSpec::E6,
            Self::E7 => GroupSpec::E7,
            Self::E8 => GroupSpec::E8,
        }
    }

    /// Loads this group's canonical quotient field.
    pub fn load(self) -> QuotientField {
        load_canonical(&self.spec())
    }
}

impl fmt::Display for ExceptionalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

impl FromStr for ExceptionalGroup {
    type Err = QuotientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "E6" => Ok(Self::E6),
            "E7" => Ok(Self::E7),
            "E8" => Ok(Self::E8),
            _ => Err(QuotientError::UnknownGroup(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    #[test]
    fn representative_matches_declared_norm() {
        for group in ExceptionalGroup::ALL {
            let spec = group.spec();
            assert_eq!(
                spec.representative_scalar().norm_squared(),
                BigRational::from_integer(BigInt::from(spec.norm_squared)),
                "{group}"
            );
        }
    }

    #[test]
    fn energies() {
        assert_eq!(GroupSpec::E6.expected_energy(), BigInt::from(72));
        assert_eq!(GroupSpec::E7.expected_energy(), BigInt::from(126));
        assert_eq!(GroupSpec::E8.expected_energy(), BigInt::from(480));
    }

    #[test]
    fn dimensions() {
        let dims: Vec<usize> = ExceptionalGroup::ALL
            .iter()
            .map(|g| g.spec().dimension())
            .collect();
        assert_eq!(dims, [78, 133, 248]);
    }

    #[test]
    fn parse_names() {
        assert_eq!("e6".parse::<ExceptionalGroup>(), Ok(ExceptionalGroup::E6));
        assert_eq!(" E8 ".parse::<ExceptionalGroup>(), Ok(ExceptionalGroup::E8));
        assert_eq!(
            "F4".parse::<ExceptionalGroup>(),
            Err(QuotientError::UnknownGroup("F4".to_string()))
        );
    }

    #[test]
    fn display_uses_spec_name() {
        assert_eq!(ExceptionalGroup::E7.to_string(), "E7");
    }
}
