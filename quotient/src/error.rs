//! Structural errors raised by the quotient field and graph checker.
//!
//! A failed invariant is never an error: it is reported as a failing
//! [`Check`](crate::report::Check). Only malformed input ends up here.

use thiserror::Error;

/// Errors produced by the exact-quotient core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuotientError {
    /// An index outside `0..len` was used to read or write a quotient field.
    #[error("index {index} out of range for quotient field of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the field that was accessed.
        len: usize,
    },

    /// A row of an adjacency matrix (or the sign-class list) disagrees with
    /// the vertex count.
    #[error("shape mismatch at row {row}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        /// Row that failed the check. For sign-class mismatches this is the
        /// matrix row count.
        row: usize,
        /// Expected length (the vertex count).
        expected: usize,
        /// Observed length.
        actual: usize,
    },

    /// An adjacency entry other than 0 or 1.
    #[error("adjacency entry ({row}, {column}) is {value}, expected 0 or 1")]
    InvalidEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        column: usize,
        /// The rejected value.
        value: u8,
    },

    /// A rational component was given a zero denominator.
    #[error("rational component has a zero denominator")]
    ZeroDenominator,

    /// A group name that is not one of E6, E7, E8.
    #[error("unknown exceptional group: {0:?}")]
    UnknownGroup(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuotientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = QuotientError::IndexOutOfRange { index: 72, len: 72 };
        assert_eq!(
            err.to_string(),
            "index 72 out of range for quotient field of length 72"
        );

        let err = QuotientError::InvalidEntry {
            row: 1,
            column: 2,
            value: 3,
        };
        assert!(err.to_string().contains("(1, 2) is 3"));
    }
}
