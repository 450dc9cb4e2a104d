//! Analysis and reporting for SIMD-vs-scalar benchmark runs.
//!
//! Groups parsed benchmark records into vectorized/scalar comparisons,
//! then renders them as SVG charts, a markdown summary, console tables and
//! a JSON export. Renderers take a [`Report`], which carries everything they
//! need, including the host [`Environment`].

pub mod aggregate;
pub mod artifacts;
pub mod chart;
pub mod environment;
pub mod export;
pub mod options;
pub mod output;
pub mod summary;
mod svg;

use vecbench_log::UnitTestRecord;

pub use aggregate::{ComparisonGroup, ComparisonRow, aggregate};
pub use environment::{CpuInfo, Environment};
pub use options::ReportOptions;

/// Input shared by every renderer.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Comparison groups in aggregation order.
    pub groups: &'a [ComparisonGroup],
    /// Unit-test results, when the log had any.
    pub unit_tests: Option<&'a [UnitTestRecord]>,
    /// Host the benchmarks ran on.
    pub environment: &'a Environment,
    /// Labels and chart geometry.
    pub options: &'a ReportOptions,
}

impl Report<'_> {
    /// Whether any group produced at least one paired row.
    pub fn has_rows(&self) -> bool {
        self.groups.iter().any(|g| !g.rows.is_empty())
    }
}
