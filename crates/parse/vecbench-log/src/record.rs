//! Record types produced by the parsers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Implementation variant of a benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Data-parallel path, `SIMD` in benchmark names.
    Vectorized,
    /// Element-at-a-time baseline, `Plain` in benchmark names.
    Scalar,
    /// The name matched no known grammar.
    Unknown,
}

impl Category {
    /// Parse the category marker used inside benchmark names.
    pub fn from_marker(marker: &str) -> Self {
        match marker {
            "SIMD" => Self::Vectorized,
            "Plain" => Self::Scalar,
            _ => Self::Unknown,
        }
    }

    /// The marker this category carries in benchmark names.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Vectorized => "SIMD",
            Self::Scalar => "Plain",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// One line of a benchmark result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Full benchmark identifier as printed by the harness.
    pub name: String,
    /// Implementation variant.
    pub category: Category,
    /// Operand type, e.g. `float256` or `int128_with_int32_t`.
    pub data_type: String,
    /// Operation under test, e.g. `add`.
    pub operation: String,
    /// Problem size, kept verbatim as the pairing key.
    pub size: String,
    /// Wall time in milliseconds.
    pub time_ms: f64,
}

/// Outcome of a single unit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    /// A pass marker was found.
    Passed,
    /// A failure marker was found.
    Failed,
    /// The test started but never reported a result.
    Unknown,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// One test found in a GoogleTest run log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTestRecord {
    /// Test suite, or `Unknown` when the name had no `.` separator.
    pub test_suite: String,
    /// Test case name.
    pub test_case: String,
    /// Duration in milliseconds, `-1` when failed or unknown.
    pub duration_ms: i64,
    /// Resolved outcome.
    pub status: TestStatus,
}

/// Why a table line was skipped or degraded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Fewer than four whitespace-separated tokens.
    TooFewTokens,
    /// The time column is not a number.
    InvalidTime,
    /// The time unit is not one of `ns`, `us`, `ms`, `s`.
    UnknownUnit(String),
    /// The benchmark name matched no grammar. The record is still emitted
    /// with `Unknown` fields.
    UnrecognizedName,
}

/// A recoverable problem found while parsing a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number within the table body.
    pub line: usize,
    /// The offending line, as found.
    pub text: String,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Whether the line was dropped from the record set.
    pub fn is_skip(&self) -> bool {
        !matches!(self.kind, DiagnosticKind::UnrecognizedName)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::TooFewTokens => write!(f, "Skipping invalid line: {}", self.text),
            DiagnosticKind::InvalidTime => {
                write!(f, "Skipping line with invalid time format: {}", self.text)
            }
            DiagnosticKind::UnknownUnit(unit) => {
                write!(f, "Skipping line with unknown time unit '{unit}': {}", self.text)
            }
            DiagnosticKind::UnrecognizedName => {
                let name = self.text.split_whitespace().next().unwrap_or_default();
                write!(f, "Warning: Could not parse benchmark name: {name}")
            }
        }
    }
}
