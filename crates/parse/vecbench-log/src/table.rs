//! Benchmark result table extraction.
//!
//! Google Benchmark prints its results as a block framed by dashed rules:
//!
//! ```text
//! ----------------------------------------------------------------------
//! Benchmark                            Time             CPU   Iterations
//! ----------------------------------------------------------------------
//! BM_SIMD_float256_add_1024          500 ns          499 ns      1000000
//! BM_Plain_float256_add_1024        2000 ns         1998 ns       350000
//! ```
//!
//! The block body runs until the first blank line or the end of the text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::decoder::decode_name;
use crate::record::{BenchmarkRecord, Diagnostic, DiagnosticKind};

/// Header rule, column header, rule, then the lazily matched body.
static TABLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^-+\nBenchmark\s+Time\s+CPU\s+Iterations\n-+\n([\s\S]+?)(?:\n\n|\z)")
        .expect("table block regex is valid")
});

/// Minimum tokens on a data line: name, time, unit, and one more column.
const MIN_TOKENS: usize = 4;

/// Records and diagnostics recovered from one benchmark table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTable {
    /// One record per surviving data line, in table order.
    pub records: Vec<BenchmarkRecord>,
    /// Problems found along the way, in table order.
    pub diagnostics: Vec<Diagnostic>,
}

impl BenchmarkTable {
    /// Distinct data types in first-appearance order.
    pub fn data_types(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.data_type.as_str()))
    }

    /// Distinct operations in first-appearance order.
    pub fn operations(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.operation.as_str()))
    }

    /// Number of lines dropped from the record set.
    pub fn skipped(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_skip()).count()
    }
}

/// Locate the benchmark table in `text` and parse its body.
///
/// Returns `None` when the text contains no table block; that is the
/// normal "no benchmark data" outcome, not an error.
pub fn parse_benchmark_table(text: &str) -> Option<BenchmarkTable> {
    let text = text.replace("\r\n", "\n");
    let body = TABLE_BLOCK.captures(&text)?.get(1)?.as_str();
    Some(parse_table_body(body))
}

/// Parse the data lines of a table body.
pub fn parse_table_body(body: &str) -> BenchmarkTable {
    let mut table = BenchmarkTable::default();

    for (idx, line) in body.trim().lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let diag = |kind| Diagnostic {
            line: line_no,
            text: line.to_string(),
            kind,
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < MIN_TOKENS {
            table.diagnostics.push(diag(DiagnosticKind::TooFewTokens));
            continue;
        }

        let Ok(value) = parts[1].parse::<f64>() else {
            table.diagnostics.push(diag(DiagnosticKind::InvalidTime));
            continue;
        };
        let Some(time_ms) = to_millis(value, parts[2]) else {
            table
                .diagnostics
                .push(diag(DiagnosticKind::UnknownUnit(parts[2].to_string())));
            continue;
        };

        let name = parts[0];
        let decoded = decode_name(name);
        if decoded.is_unknown() {
            table.diagnostics.push(diag(DiagnosticKind::UnrecognizedName));
        }

        table.records.push(BenchmarkRecord {
            name: name.to_string(),
            category: decoded.category,
            data_type: decoded.data_type,
            operation: decoded.operation,
            size: decoded.size,
            time_ms,
        });
    }

    table
}

/// Convert a time value in `unit` to milliseconds.
pub fn to_millis(value: f64, unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(value / 1_000_000.0),
        "us" => Some(value / 1_000.0),
        "ms" => Some(value),
        "s" => Some(value * 1_000.0),
        _ => None,
    }
}

fn distinct<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
