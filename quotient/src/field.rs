//! Fixed-length amplitude storage over the roots of a quotient structure.

use core::slice;

use crate::error::{QuotientError, Result};
use crate::scalar::ExactScalar;

/// One [`ExactScalar`] amplitude per quotient class, indexed `0..len`.
///
/// The length is fixed at construction. Slots start at `0 + 0i` and are
/// filled by a loader; verifiers only read.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QuotientField {
    amplitudes: Box<[ExactScalar]>,
}

impl QuotientField {
    /// A field of `len` zero amplitudes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            amplitudes: vec![ExactScalar::zero(); len].into_boxed_slice(),
        }
    }

    /// Takes ownership of an existing amplitude sequence.
    pub fn from_amplitudes(amplitudes: Vec<ExactScalar>) -> Self {
        Self {
            amplitudes: amplitudes.into_boxed_slice(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Returns `true` when the field has no slots.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Reads slot `index`.
    ///
    /// # Errors
    ///
    /// Returns [`QuotientError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&ExactScalar> {
        self.amplitudes
            .get(index)
            .ok_or(QuotientError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Replaces slot `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`QuotientError::IndexOutOfRange`] if `index >= len`; the
    /// field is left untouched.
    pub fn set(&mut self, index: usize, value: ExactScalar) -> Result<()> {
        let len = self.len();
        let slot = self
            .amplitudes
            .get_mut(index)
            .ok_or(QuotientError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Amplitudes in index order.
    pub fn iter(&self) -> slice::Iter<'_, ExactScalar> {
        self.amplitudes.iter()
    }

    /// The full amplitude sequence.
    pub fn as_slice(&self) -> &[ExactScalar] {
        &self.amplitudes
    }

    pub(crate) fn slots_mut(&mut self) -> slice::IterMut<'_, ExactScalar> {
        self.amplitudes.iter_mut()
    }
}

impl<'a> IntoIterator for &'a QuotientField {
    type Item = &'a ExactScalar;
    type IntoIter = slice::Iter<'a, ExactScalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
