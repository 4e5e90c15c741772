//! Invariant verifier for populated quotient fields.
//!
//! Every comparison is exact rational equality. A failed invariant shows up
//! as a `false` check in the returned [`InvariantReport`]; the verifier never
//! errors, so all checks are evaluated even when several fail.
//!
//! | Check | Condition |
//! |-------|-----------|
//! | `has_{N}_roots` | `len == N` |
//! | `all_roots_norm_{K}` | `‖aᵢ‖² == K` for every slot |
//! | `total_energy_{N·K}` | `Σ ‖aᵢ‖² == N·K` |
//! | `simply_laced` | same condition as `all_roots_norm_{K}` |

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::debug;

use crate::field::QuotientField;
use crate::group::GroupSpec;
use crate::report::{Check, Checked};

/// Result of verifying one field against one [`GroupSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InvariantReport {
    /// Name of the group the field was checked against.
    pub group: String,
    /// Named checks, in evaluation order.
    pub checks: Vec<Check>,
    /// Number of amplitudes in the field.
    pub count: usize,
    /// Exact sum of all squared norms.
    #[cfg_attr(feature = "serde", serde(with = "crate::ratio"))]
    pub total_energy: BigRational,
    /// `total_energy / count`, or 0 for an empty field.
    #[cfg_attr(feature = "serde", serde(with = "crate::ratio"))]
    pub mean_norm_sq: BigRational,
}

impl Checked for InvariantReport {
    fn checks(&self) -> &[Check] {
        &self.checks
    }
}

/// Verifies `field` against the cardinality and root length in `spec`.
///
/// # Examples
///
/// ```
/// use exact_quotient::{load_canonical, verify, Checked, GroupSpec};
///
/// let report = verify(&load_canonical(&GroupSpec::E8), &GroupSpec::E8);
/// assert_eq!(report.check("total_energy_480"), Some(true));
/// assert!(report.all_passed());
/// ```
pub fn verify(field: &QuotientField, spec: &GroupSpec) -> InvariantReport {
    let expected_norm = BigRational::from_integer(BigInt::from(spec.norm_squared));
    let expected_energy = BigRational::from_integer(spec.expected_energy());

    let mut total_energy = BigRational::zero();
    let mut uniform = true;
    for amplitude in field {
        let norm = amplitude.norm_squared();
        uniform &= norm == expected_norm;
        total_energy += norm;
    }

    let count = field.len();
    let mean_norm_sq = if count == 0 {
        BigRational::zero()
    } else {
        &total_energy / BigRational::from_integer(BigInt::from(count))
    };

    let checks = vec![
        Check::new(
            format!("has_{}_roots", spec.root_count),
            count == spec.root_count,
        ),
        Check::new(
            format!("all_roots_norm_{}", norm_label(spec.norm_squared)),
            uniform,
        ),
        Check::new(
            format!("total_energy_{}", spec.expected_energy()),
            total_energy == expected_energy,
        ),
        Check::new("simply_laced", uniform),
    ];

    debug!(
        group = spec.name,
        count,
        total_energy = %total_energy,
        passed = checks.iter().all(|c| c.passed),
        "verified quotient field"
    );

    InvariantReport {
        group: spec.name.to_string(),
        checks,
        count,
        total_energy,
        mean_norm_sq,
    }
}

fn norm_label(norm: i64) -> String {
    match norm {
        1 => "one".to_string(),
        2 => "two".to_string(),
        n => n.to_string(),
    }
}
