//! Benchmark log parsing.
//!
//! Turns the console output of a SIMD-vs-scalar benchmark run into
//! structured records:
//!
//! - [`decoder`]: benchmark identifier → category, data type, operation, size
//! - [`table`]: Google Benchmark result table → [`BenchmarkRecord`]s
//! - [`unit_test`]: GoogleTest console markers → [`UnitTestRecord`]s
//!
//! Parsing is best-effort. Malformed lines never abort a parse; they are
//! reported as [`Diagnostic`]s next to the records that did survive.

pub mod decoder;
pub mod record;
pub mod table;

pub use decoder::{DecodedName, Grammar, decode_name};
pub use record::{BenchmarkRecord, Category, Diagnostic, DiagnosticKind, TestStatus, UnitTestRecord};
pub use table::{BenchmarkTable, parse_benchmark_table};
pub use unit_test::{UnitTestSummary, parse_unit_test_log};
