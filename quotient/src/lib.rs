//! Exact-arithmetic verification of exceptional root-system quotients.
//!
//! Two independent verification paths, neither of which touches floating
//! point:
//!
//! 1. **Algebraic**: a [`GroupSpec`] drives [`load_canonical`] to populate a
//!    [`QuotientField`] of [`ExactScalar`] amplitudes, which [`verify`]
//!    checks for cardinality, uniform root length and total energy.
//! 2. **Structural**: [`check_quotient_graph`] validates a sign-class
//!    adjacency matrix and reports connectivity and degree statistics.
//!
//! # Supported Groups
//!
//! | Group | Roots | Root norm² | Energy |
//! |-------|-------|------------|--------|
//! | E₆ | 72 | 1 | 72 |
//! | E₇ | 126 | 1 | 126 |
//! | E₈ | 240 | 2 | 480 |
//!
//! # Entry Point
//!
//! ```
//! use exact_quotient::{run_all, GroupSpec};
//!
//! let report = run_all(&[GroupSpec::E6, GroupSpec::E7, GroupSpec::E8], None).unwrap();
//! assert!(report.all_passed());
//! ```
//!
//! # Features
//!
//! - `serde` (default): serialization for fields, scalars, reports and the
//!   quotient-graph exchange format. Rationals travel as
//!   `[numerator, denominator]` string pairs.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod field;
pub mod graph;
pub mod group;
pub mod loader;
#[cfg(feature = "serde")]
pub mod ratio;
pub mod report;
pub mod scalar;
pub mod verify;

pub use error::{QuotientError, Result};
pub use field::QuotientField;
pub use graph::{
    analyze, check_quotient_graph, AdjacencyMatrix, GraphReport, QuotientGraphInput, SignClass,
    SignClassSource, F4_SIGN_CLASS_COUNT,
};
pub use group::{ExceptionalGroup, GroupSpec};
pub use loader::load_canonical;
pub use report::{Check, Checked, VerificationReport};
pub use scalar::ExactScalar;
pub use verify::{verify, InvariantReport};

/// Loads and verifies every group in `groups`, then checks `graph` if given.
///
/// Groups are verified in the order given. Failed invariants are recorded
/// in the report, not raised.
///
/// # Errors
///
/// Returns an error only if the quotient graph payload is structurally
/// malformed (see [`QuotientGraphInput::check`]).
pub fn run_all(
    groups: &[GroupSpec],
    graph: Option<&QuotientGraphInput>,
) -> Result<VerificationReport> {
    let mut report = VerificationReport::new();

    for spec in groups {
        let field = load_canonical(spec);
        report.invariants.push(verify(&field, spec));
    }

    if let Some(input) = graph {
        report.graph = Some(input.check()?);
    }

    Ok(report)
}
