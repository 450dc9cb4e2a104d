//! JSON export of a full analysis run.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vecbench_log::UnitTestRecord;

use crate::{ComparisonGroup, Environment, Report};

/// Everything a run produced, in serializable form.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisExport {
    /// Host the benchmarks ran on.
    pub environment: Environment,
    /// Comparison groups in aggregation order.
    pub groups: Vec<ComparisonGroup>,
    /// Unit-test results, when the log had any.
    pub unit_tests: Option<Vec<UnitTestRecord>>,
}

impl AnalysisExport {
    /// Snapshot a report.
    pub fn from_report(report: &Report<'_>) -> Self {
        Self {
            environment: report.environment.clone(),
            groups: report.groups.to_vec(),
            unit_tests: report.unit_tests.map(<[UnitTestRecord]>::to_vec),
        }
    }
}

/// Save the report as pretty-printed JSON.
pub fn write_json(report: &Report<'_>, path: &Path) -> Result<()> {
    let export = AnalysisExport::from_report(report);
    let json = serde_json::to_string_pretty(&export).context("serializing analysis to JSON")?;
    std::fs::write(path, json).with_context(|| format!("writing JSON export to {}", path.display()))?;
    Ok(())
}

/// Load a previously written export.
pub fn read_json(path: &Path) -> Result<AnalysisExport> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).context("parsing analysis JSON")
}
