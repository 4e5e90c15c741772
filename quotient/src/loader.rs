//! Canonical loaders: populate a [`QuotientField`] from a [`GroupSpec`].
//!
//! The canonical configuration encodes only the equal-length property of a
//! simply-laced root system: the group's representative amplitude is
//! written into every slot. Individual root coordinates (for E₈, the 112
//! integer roots ±eᵢ±eⱼ and the 128 half-integer roots of even sign
//! parity) are not represented, so pairwise angles and lattice structure
//! cannot be checked from a loaded field.

use tracing::debug;

use crate::field::QuotientField;
use crate::group::GroupSpec;

/// Builds the canonical field for `spec`.
///
/// Deterministic: two calls with the same spec return equal fields.
///
/// # Examples
///
/// ```
/// use exact_quotient::{load_canonical, GroupSpec};
///
/// let field = load_canonical(&GroupSpec::E8);
/// assert_eq!(field.len(), 240);
/// ```
pub fn load_canonical(spec: &GroupSpec) -> QuotientField {
    let mut field = QuotientField::zeroed(spec.root_count);
    let amplitude = spec.representative_scalar();
    for slot in field.slots_mut() {
        *slot = amplitude.clone();
    }
    debug!(
        group = spec.name,
        roots = spec.root_count,
        amplitude = %amplitude,
        "loaded canonical quotient field"
    );
    field
}
