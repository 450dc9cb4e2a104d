//! Markdown summary report.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use vecbench_log::UnitTestSummary;

use crate::Report;

/// Render the summary as markdown.
///
/// One section per group with at least one paired row, one table row per
/// pair. The output depends only on the report input.
pub fn render_summary(report: &Report<'_>) -> String {
    let vec_label = &report.options.vectorized_label;
    let scalar_label = &report.options.scalar_label;
    let env = report.environment;

    let mut out = String::new();
    let _ = writeln!(out, "# {vec_label} Performance Comparison Summary\n");

    out.push_str("## Environment\n\n");
    let _ = writeln!(out, "- OS: {}", env.os);
    let _ = writeln!(out, "- Compiler: {}", env.compiler);
    let _ = writeln!(out, "- CPU: {}\n", env.cpu_line());

    for group in report.groups.iter().filter(|g| !g.rows.is_empty()) {
        let _ = writeln!(out, "## {} {}\n", group.data_type, group.operation);
        let _ = writeln!(
            out,
            "| Size | {vec_label} Time (ms) | {scalar_label} Time (ms) | Speedup (x) | Speedup (%) |"
        );
        out.push_str("|------|----------------|-----------------|-------------|-------------|\n");
        for row in &group.rows {
            let multiple = row
                .speedup_multiple()
                .map_or_else(|| "n/a".to_string(), |x| format!("{x:.2}"));
            let speedup = row
                .speedup_percent
                .map_or_else(|| "n/a".to_string(), |pct| format!("{pct:.2}"));
            let _ = writeln!(
                out,
                "| {} | {:.3} | {:.3} | {multiple} | {speedup} |",
                row.size,
                row.vectorized_ms(),
                row.scalar_ms()
            );
        }
        out.push('\n');
    }

    if let Some(tests) = report.unit_tests {
        let summary = UnitTestSummary::from_records(tests);
        out.push_str("## Unit Tests\n\n");
        let _ = writeln!(
            out,
            "{} tests: {} passed, {} failed, {} unknown\n",
            summary.total(),
            summary.passed,
            summary.failed,
            summary.unknown
        );
        out.push_str("| Suite | Case | Status | Duration (ms) |\n");
        out.push_str("|-------|------|--------|---------------|\n");
        for test in tests {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} |",
                test.test_suite, test.test_case, test.status, test.duration_ms
            );
        }
        out.push('\n');
    }

    out
}

/// Write the summary to `path`.
pub fn write_summary(report: &Report<'_>, path: &Path) -> Result<()> {
    std::fs::write(path, render_summary(report))
        .with_context(|| format!("writing summary to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::{CpuInfo, Environment, ReportOptions};
    use vecbench_log::{BenchmarkRecord, Category, TestStatus, UnitTestRecord};

    fn environment() -> Environment {
        Environment {
            os: "linux".into(),
            compiler: "clang version 17.0.6".into(),
            cpu: CpuInfo {
                brand: "Test CPU".into(),
                arch: "x86_64".into(),
                cores: 4,
                frequency_mhz: 0,
            },
        }
    }

    fn record(category: Category, size: &str, time_ms: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            name: String::new(),
            category,
            data_type: "int128".into(),
            operation: "mul".into(),
            size: size.into(),
            time_ms,
        }
    }

    #[test]
    fn renders_group_sections() {
        let groups = aggregate(&[
            record(Category::Vectorized, "64", 0.002),
            record(Category::Scalar, "64", 0.004),
            record(Category::Vectorized, "128", 0.0),
            record(Category::Scalar, "128", 0.01),
        ]);
        let env = environment();
        let options = ReportOptions::default();
        let report = Report {
            groups: &groups,
            unit_tests: None,
            environment: &env,
            options: &options,
        };
        let text = render_summary(&report);

        assert!(text.starts_with("# SIMD Performance Comparison Summary\n\n## Environment\n"));
        assert!(text.contains("- Compiler: clang version 17.0.6\n"));
        assert!(text.contains("## int128 mul\n\n| Size | SIMD Time (ms) | Plain Time (ms) | Speedup (x) | Speedup (%) |\n"));
        assert!(text.contains("| 64 | 0.002 | 0.004 | 2.00 | 100.00 |\n"));
        assert!(text.contains("| 128 | 0.000 | 0.010 | n/a | n/a |\n"));
        assert!(!text.contains("## Unit Tests"));
        assert_eq!(text, render_summary(&report));
    }

    #[test]
    fn renders_unit_test_section() {
        let tests = [
            UnitTestRecord {
                test_suite: "SuiteA".into(),
                test_case: "CaseB".into(),
                duration_ms: -1,
                status: TestStatus::Unknown,
            },
            UnitTestRecord {
                test_suite: "SuiteA".into(),
                test_case: "CaseC".into(),
                duration_ms: 3,
                status: TestStatus::Passed,
            },
        ];
        let env = environment();
        let options = ReportOptions {
            vectorized_label: "AVX2".into(),
            ..ReportOptions::default()
        };
        let report = Report {
            groups: &[],
            unit_tests: Some(&tests),
            environment: &env,
            options: &options,
        };
        let text = render_summary(&report);
        assert!(text.starts_with("# AVX2 Performance Comparison Summary"));
        assert!(text.contains("2 tests: 1 passed, 0 failed, 1 unknown"));
        assert!(text.contains("| SuiteA | CaseB | Unknown | -1 |\n"));
        assert!(text.contains("| SuiteA | CaseC | Passed | 3 |\n"));
    }
}
