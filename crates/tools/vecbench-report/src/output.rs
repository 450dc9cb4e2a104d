//! Terminal output formatting for comparison and unit-test results.

use vecbench_log::{UnitTestRecord, UnitTestSummary};

use crate::Report;

/// Format paired comparisons as an aligned console table.
pub fn format_comparison_table(report: &Report<'_>) -> String {
    let rows: Vec<_> = report
        .groups
        .iter()
        .flat_map(|g| g.rows.iter().map(move |r| (g, r)))
        .collect();

    if rows.is_empty() {
        return "  No paired benchmark results to display.\n".to_string();
    }

    let vec_col = format!("{} (ms)", report.options.vectorized_label);
    let scalar_col = format!("{} (ms)", report.options.scalar_label);

    // Compute column widths.
    let labels: Vec<String> = rows.iter().map(|(g, _)| g.label()).collect();
    let max_name = labels.iter().map(String::len).max().unwrap_or(9).max(9);
    let max_size = rows.iter().map(|(_, r)| r.size.len()).max().unwrap_or(4).max(4);
    let time_w = vec_col.len().max(scalar_col.len()).max(12);

    let mut out = String::new();
    out.push_str(&format!(
        "  {:<name$}  {:>size$}  {:>time$}  {:>time$}  {:>11}\n",
        "Benchmark",
        "Size",
        vec_col,
        scalar_col,
        "Speedup (%)",
        name = max_name,
        size = max_size,
        time = time_w
    ));
    out.push_str(&format!(
        "  {:-<name$}  {:->size$}  {:->time$}  {:->time$}  {:->11}\n",
        "",
        "",
        "",
        "",
        "",
        name = max_name,
        size = max_size,
        time = time_w
    ));

    for (label, (_, row)) in labels.iter().zip(&rows) {
        let speedup = row
            .speedup_percent
            .map_or_else(|| "n/a".to_string(), |pct| format!("{pct:+.1}"));
        out.push_str(&format!(
            "  {:<name$}  {:>size$}  {:>time$.4}  {:>time$.4}  {:>11}\n",
            label,
            row.size,
            row.vectorized_ms(),
            row.scalar_ms(),
            speedup,
            name = max_name,
            size = max_size,
            time = time_w
        ));
    }
    out
}

/// Print paired comparisons as a formatted table.
pub fn print_comparison_table(report: &Report<'_>) {
    println!();
    print!("{}", format_comparison_table(report));
    println!();
}

/// Print unit-test results with a pass/fail tally.
pub fn print_unit_test_table(records: &[UnitTestRecord]) {
    if records.is_empty() {
        println!("  No unit-test results to display.");
        return;
    }

    let max_name = records
        .iter()
        .map(|r| r.test_suite.len() + r.test_case.len() + 1)
        .max()
        .unwrap_or(4)
        .max(4);

    println!();
    println!("  {:<width$}  {:>8}  {:>10}", "Test", "Status", "Time (ms)", width = max_name);
    println!("  {:-<width$}  {:->8}  {:->10}", "", "", "", width = max_name);

    for record in records {
        let name = format!("{}.{}", record.test_suite, record.test_case);
        let duration = if record.duration_ms < 0 {
            "-".to_string()
        } else {
            record.duration_ms.to_string()
        };
        println!(
            "  {:<width$}  {:>8}  {:>10}",
            name,
            record.status.to_string(),
            duration,
            width = max_name
        );
    }

    let summary = UnitTestSummary::from_records(records);
    println!();
    println!(
        "  {} passed, {} failed, {} unknown ({} ms total)",
        summary.passed, summary.failed, summary.unknown, summary.total_ms
    );
    println!();
}
