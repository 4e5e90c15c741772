//! Report types: named pass/fail checks and their aggregation.

use crate::graph::GraphReport;
use crate::verify::InvariantReport;

/// A single named boolean check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Check {
    /// Stable identifier, e.g. `has_240_roots`.
    pub name: String,
    /// Whether the check held.
    pub passed: bool,
}

impl Check {
    /// Creates a check result.
    pub fn new(name: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            passed,
        }
    }
}

/// Anything that carries a list of named checks.
pub trait Checked {
    /// All checks in the order they were evaluated.
    fn checks(&self) -> &[Check];

    /// Looks up a check by name.
    fn check(&self, name: &str) -> Option<bool> {
        self.checks()
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.passed)
    }

    /// Number of failed checks.
    fn failure_count(&self) -> usize {
        self.checks().iter().filter(|c| !c.passed).count()
    }

    /// Returns true if every check passed.
    fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Aggregated output of [`run_all`](crate::run_all).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VerificationReport {
    /// One report per verified group, in request order.
    pub invariants: Vec<InvariantReport>,
    /// Quotient graph report, if a graph was supplied.
    pub graph: Option<GraphReport>,
}

impl VerificationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Failed checks across every section.
    pub fn failure_count(&self) -> usize {
        self.invariants
            .iter()
            .map(Checked::failure_count)
            .sum::<usize>()
            + self.graph.as_ref().map_or(0, Checked::failure_count)
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
