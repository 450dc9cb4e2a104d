//! Writing every report artifact into an output directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{Report, chart, export, summary};

/// Grouped time comparison chart.
pub const COMPARISON_CHART: &str = "consolidated_comparison.svg";
/// Speedup chart.
pub const SPEEDUP_CHART: &str = "consolidated_speedup.svg";
/// Comparison table rendering.
pub const COMPARISON_TABLE: &str = "comparison_table.svg";
/// Unit-test table rendering.
pub const UNIT_TEST_TABLE: &str = "unit_test_results.svg";
/// Markdown summary.
pub const SUMMARY: &str = "summary_report.txt";
/// JSON export.
pub const JSON_EXPORT: &str = "comparison.json";

/// Write all applicable artifacts into `out_dir`, creating it if needed.
///
/// Benchmark charts are written only when at least one pair exists, the
/// unit-test table only when unit-test data exists. Returns the written
/// paths in creation order.
pub fn write_artifacts(report: &Report<'_>, out_dir: &Path, with_json: bool) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut written = Vec::new();

    if report.has_rows() {
        let charts: [(&str, fn(&Report<'_>) -> String); 3] = [
            (COMPARISON_CHART, chart::comparison_chart),
            (SPEEDUP_CHART, chart::speedup_chart),
            (COMPARISON_TABLE, chart::comparison_table),
        ];
        for (name, render) in charts {
            let path = out_dir.join(name);
            chart::write_chart(&render(report), &path)?;
            written.push(path);
        }
    }

    if report.unit_tests.is_some_and(|tests| !tests.is_empty()) {
        let path = out_dir.join(UNIT_TEST_TABLE);
        chart::write_chart(&chart::unit_test_table(report), &path)?;
        written.push(path);
    }

    let path = out_dir.join(SUMMARY);
    summary::write_summary(report, &path)?;
    written.push(path);

    if with_json {
        let path = out_dir.join(JSON_EXPORT);
        export::write_json(report, &path)?;
        written.push(path);
    }

    Ok(written)
}
