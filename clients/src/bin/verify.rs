//! `quotient-verify` — Runs the exact invariant and quotient-graph checks.
//!
//! Verifies the canonical quotient fields of the selected exceptional
//! groups and, optionally, a sign-class quotient graph read from JSON.
//!
//! **Usage:**
//! ```text
//! quotient-verify [--group <e6|e7|e8|all>] [--graph <path>] [--json]
//! ```
//!
//! Exits non-zero if any check fails. Set `RUST_LOG=debug` for traces.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use exact_quotient::{
    run_all, Checked, ExceptionalGroup, GroupSpec, QuotientGraphInput, SignClassSource,
    VerificationReport,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Which groups to verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GroupArg {
    E6,
    E7,
    E8,
    All,
}

impl GroupArg {
    fn specs(self) -> Vec<GroupSpec> {
        let groups: &[ExceptionalGroup] = match self {
            Self::E6 => &[ExceptionalGroup::E6],
            Self::E7 => &[ExceptionalGroup::E7],
            Self::E8 => &[ExceptionalGroup::E8],
            Self::All => &ExceptionalGroup::ALL,
        };
        groups.iter().map(|g| g.spec()).collect()
    }
}

/// Verify exceptional root-system quotients with exact arithmetic.
#[derive(Parser)]
#[command(
    name = "quotient-verify",
    about = "Verify exceptional root-system quotient invariants with exact arithmetic"
)]
struct Args {
    /// Group to verify.
    #[arg(long, value_enum, default_value = "all")]
    group: GroupArg,

    /// Quotient graph payload (JSON with sign_classes and adjacency_matrix).
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// Reads a quotient graph payload produced by the sign-class construction.
struct JsonGraphFile {
    path: PathBuf,
}

impl SignClassSource for JsonGraphFile {
    type Error = anyhow::Error;

    fn quotient_graph(&self) -> Result<QuotientGraphInput> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let input = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as a quotient graph", self.path.display()))?;
        Ok(input)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let graph = match args.graph {
        Some(path) => Some(JsonGraphFile { path }.quotient_graph()?),
        None => None,
    };

    let specs = args.group.specs();
    info!(groups = specs.len(), graph = graph.is_some(), "running verification");
    let report = run_all(&specs, graph.as_ref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&specs, &report);
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Verification FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    Ok(())
}

fn print_text(specs: &[GroupSpec], report: &VerificationReport) {
    println!("Exceptional Quotient Verification Report");
    println!("========================================");

    for (spec, inv) in specs.iter().zip(&report.invariants) {
        println!();
        println!(
            "{} (rank {}, {} roots, dim {})",
            spec.name,
            spec.rank,
            spec.root_count,
            spec.dimension()
        );
        print_checks(inv);
        println!("       count        = {}", inv.count);
        println!("       total_energy = {}", inv.total_energy);
        println!("       mean_norm_sq = {}", inv.mean_norm_sq);
    }

    if let Some(graph) = &report.graph {
        println!();
        println!("Quotient graph ({} sign classes)", graph.vertex_count);
        print_checks(graph);
        println!(
            "       edges = {}, visited = {}/{}",
            graph.edge_count, graph.visited, graph.vertex_count
        );
        if let (Some(min), Some(max), Some(avg)) =
            (graph.min_degree, graph.max_degree, &graph.average_degree)
        {
            println!("       degree min = {}, max = {}, average = {}", min, max, avg);
        }
        println!("       degree sequence = {:?}", graph.degree_sequence);
    }

    let total: usize = report
        .invariants
        .iter()
        .map(|r| r.checks().len())
        .sum::<usize>()
        + report.graph.as_ref().map_or(0, |g| g.checks().len());
    let failed = report.failure_count();

    println!();
    println!("Summary: {} passed, {} failed", total - failed, failed);
}

fn print_checks(section: &impl Checked) {
    for check in section.checks() {
        let status = if check.passed { "PASS" } else { "FAIL" };
        println!("[{}] {}", status, check.name);
    }
}
