//! Connectivity and degree statistics for sign-class quotient graphs.
//!
//! The upstream construction collapses a 96-vertex base structure into
//! sign classes (48 of them in the F₄ case) and emits a 0/1 adjacency
//! matrix over the classes. This module validates the matrix shape,
//! traverses it breadth-first from vertex 0, and reports degree statistics.
//! The matrix is only ever borrowed.
//!
//! # Examples
//!
//! ```
//! use exact_quotient::check_quotient_graph;
//!
//! let path: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]];
//! let report = check_quotient_graph(&path).unwrap();
//! assert!(report.connected);
//! assert_eq!(report.edge_count, 2);
//! assert_eq!(report.degree_sequence, [1, 2, 1]);
//! ```

use std::collections::VecDeque;

use num_bigint::BigInt;
use num_rational::BigRational;
use tracing::debug;

use crate::error::{QuotientError, Result};
use crate::report::{Check, Checked};

/// Number of sign classes in the F₄ quotient of the 96-vertex structure.
pub const F4_SIGN_CLASS_COUNT: usize = 48;

/// Validated read-only view of a square 0/1 adjacency matrix.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyMatrix<'a> {
    rows: &'a [Vec<u8>],
}

impl<'a> AdjacencyMatrix<'a> {
    /// Validates `rows` as an `n × n` matrix with entries in {0, 1}.
    ///
    /// # Errors
    ///
    /// Returns [`QuotientError::ShapeMismatch`] for the first row whose
    /// length differs from the row count, and
    /// [`QuotientError::InvalidEntry`] for the first entry that is not 0 or 1.
    pub fn new(rows: &'a [Vec<u8>]) -> Result<Self> {
        let n = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n {
                return Err(QuotientError::ShapeMismatch {
                    row,
                    expected: n,
                    actual: entries.len(),
                });
            }
        }
        for (row, entries) in rows.iter().enumerate() {
            if let Some((column, &value)) = entries.iter().enumerate().find(|(_, &v)| v > 1) {
                return Err(QuotientError::InvalidEntry { row, column, value });
            }
        }
        Ok(Self { rows })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Neighbours of `vertex` in index order, or `None` if `vertex` is out
    /// of range.
    pub fn neighbors(&self, vertex: usize) -> Option<impl Iterator<Item = usize> + 'a> {
        let row = self.rows.get(vertex)?;
        Some(
            row.iter()
                .enumerate()
                .filter(|(_, &v)| v == 1)
                .map(|(j, _)| j),
        )
    }

    /// Row sum of `vertex`, or `None` if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        let row = self.rows.get(vertex)?;
        Some(row.iter().map(|&v| usize::from(v)).sum())
    }

    /// Sum of the strictly upper-triangular entries.
    pub fn edge_count(&self) -> usize {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| row[i + 1..].iter().map(|&v| usize::from(v)).sum::<usize>())
            .sum()
    }

    /// Returns true if `a[i][j] == a[j][i]` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// Returns true if no vertex is adjacent to itself.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.vertex_count()).all(|i| self.rows[i][i] == 0)
    }

    /// Vertices reachable from vertex 0, in breadth-first order.
    ///
    /// Empty for a graph with no vertices.
    pub fn bfs_from_origin(&self) -> Vec<usize> {
        let n = self.vertex_count();
        if n == 0 {
            return Vec::new();
        }

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut frontier = VecDeque::from([0usize]);
        visited[0] = true;

        while let Some(vertex) = frontier.pop_front() {
            order.push(vertex);
            for next in self.neighbors(vertex).into_iter().flatten() {
                if !visited[next] {
                    visited[next] = true;
                    frontier.push_back(next);
                }
            }
        }
        order
    }
}

/// Connectivity verdict and degree statistics for one quotient graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphReport {
    /// Named checks: `connected`, `symmetric`, and `degree_sequence_matches`
    /// when the collaborator supplied a degree sequence.
    pub checks: Vec<Check>,
    /// Number of vertices N.
    pub vertex_count: usize,
    /// True iff breadth-first traversal from vertex 0 reaches all N
    /// vertices. Always false for N = 0.
    pub connected: bool,
    /// Number of vertices reached from vertex 0.
    pub visited: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Degree of each vertex, in index order.
    pub degree_sequence: Vec<usize>,
    /// Smallest degree, `None` when N = 0.
    pub min_degree: Option<usize>,
    /// Largest degree, `None` when N = 0.
    pub max_degree: Option<usize>,
    /// Exact mean degree, `None` when N = 0.
    #[cfg_attr(feature = "serde", serde(with = "crate::ratio::option"))]
    pub average_degree: Option<BigRational>,
    /// Whether the matrix is symmetric.
    pub symmetric: bool,
    /// Whether the diagonal is all zeros.
    pub zero_diagonal: bool,
}

impl Checked for GraphReport {
    fn checks(&self) -> &[Check] {
        &self.checks
    }
}

/// Validates `adjacency` and computes connectivity and degree statistics.
///
/// # Errors
///
/// Returns [`QuotientError::ShapeMismatch`] or [`QuotientError::InvalidEntry`]
/// if the matrix is malformed; nothing is traversed in that case.
pub fn check_quotient_graph(adjacency: &[Vec<u8>]) -> Result<GraphReport> {
    let matrix = AdjacencyMatrix::new(adjacency)?;
    Ok(analyze(&matrix))
}

/// Computes the report for an already validated matrix.
pub fn analyze(matrix: &AdjacencyMatrix<'_>) -> GraphReport {
    let n = matrix.vertex_count();
    let visited = matrix.bfs_from_origin().len();
    // An empty graph has no component to certify.
    let connected = n > 0 && visited == n;

    let degree_sequence: Vec<usize> = (0..n).filter_map(|i| matrix.degree(i)).collect();
    let min_degree = degree_sequence.iter().copied().min();
    let max_degree = degree_sequence.iter().copied().max();
    let average_degree = (n > 0).then(|| {
        let total: usize = degree_sequence.iter().sum();
        BigRational::new(BigInt::from(total), BigInt::from(n))
    });

    let symmetric = matrix.is_symmetric();
    let edge_count = matrix.edge_count();

    debug!(
        vertices = n,
        visited,
        edges = edge_count,
        connected,
        symmetric,
        "checked quotient graph"
    );

    GraphReport {
        checks: vec![
            Check::new("connected", connected),
            Check::new("symmetric", symmetric),
        ],
        vertex_count: n,
        connected,
        visited,
        edge_count,
        degree_sequence,
        min_degree,
        max_degree,
        average_degree,
        symmetric,
        zero_diagonal: matrix.has_zero_diagonal(),
    }
}

/// Metadata for one sign class (one quotient-graph vertex).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignClass {
    /// Optional human-readable label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    /// Base-structure vertices collapsed into this class, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<usize>,
}

/// Payload produced by the upstream sign-class construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotientGraphInput {
    /// One entry per vertex of the quotient graph.
    pub sign_classes: Vec<SignClass>,
    /// Square 0/1 adjacency matrix over the sign classes.
    pub adjacency_matrix: Vec<Vec<u8>>,
    /// Degree sequence as computed upstream, if provided.
    #[cfg_attr(feature = "serde", serde(default))]
    pub degree_sequence: Option<Vec<usize>>,
}

impl QuotientGraphInput {
    /// Checks the adjacency matrix and cross-checks the collaborator's
    /// metadata against it.
    ///
    /// # Errors
    ///
    /// Returns [`QuotientError::ShapeMismatch`] when the sign-class count
    /// differs from the matrix size, plus any error of
    /// [`check_quotient_graph`].
    pub fn check(&self) -> Result<GraphReport> {
        let n = self.adjacency_matrix.len();
        if self.sign_classes.len() != n {
            return Err(QuotientError::ShapeMismatch {
                row: n,
                expected: n,
                actual: self.sign_classes.len(),
            });
        }

        let mut report = check_quotient_graph(&self.adjacency_matrix)?;
        if let Some(upstream) = &self.degree_sequence {
            let matches = *upstream == report.degree_sequence;
            report
                .checks
                .push(Check::new("degree_sequence_matches", matches));
        }
        Ok(report)
    }
}

/// Source of quotient-graph payloads, implemented by whatever builds the
/// sign classes from the base structure.
pub trait SignClassSource {
    /// Error produced while building or fetching the payload.
    type Error;

    /// Produces the sign classes and their adjacency matrix.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn quotient_graph(&self) -> core::result::Result<QuotientGraphInput, Self::Error>;
}
