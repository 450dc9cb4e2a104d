//! SIMD benchmark report generator.
//!
//! Reads a console log containing a Google Benchmark result table and/or
//! GoogleTest output, pairs each SIMD benchmark with its plain counterpart
//! and writes charts plus a markdown summary.
//!
//! Pipeline: read input → parse table + unit-test markers → aggregate →
//!           detect environment → render artifacts.

mod cli;
mod config;
mod host;
mod toolchain;
mod verbose;

use anyhow::{Context, Result};
use clap::Parser;
use vecbench_log::{BenchmarkTable, parse_benchmark_table, parse_unit_test_log};
use vecbench_report::{Report, aggregate, artifacts, output};

use crate::config::Config;
use crate::verbose::{Stage, Timer, dprintln, vprintln};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    verbose::init(verbose::Verbosity::from_flags(cli.quiet, cli.verbose));
    run(&cli)
}

fn run(cli: &cli::Cli) -> Result<()> {
    dprintln!("Analyzing benchmarks from: {}", cli.input.display());
    dprintln!("Saving results to: {}", cli.output.display());

    let config = Config::load(cli.config.as_deref())?;

    let text = {
        let _t = Timer::start(Stage::ReadInput);
        std::fs::read_to_string(&cli.input)
            .with_context(|| format!("reading benchmark results {}", cli.input.display()))?
    };

    let (table, unit_tests) = {
        let _t = Timer::start(Stage::Parse);
        (parse_benchmark_table(&text), parse_unit_test_log(&text))
    };

    let records = match table {
        Some(table) => {
            report_table(&table);
            table.records
        }
        None => {
            dprintln!("Benchmark results not found in the file.");
            Vec::new()
        }
    };

    match &unit_tests {
        Some(tests) => dprintln!("Parsed {} unit tests", tests.len()),
        None => dprintln!("No unit-test data found."),
    }

    if records.is_empty() && unit_tests.is_none() {
        println!("No benchmark data found.");
        return Ok(());
    }

    let groups = {
        let _t = Timer::start(Stage::Aggregate);
        aggregate(&records)
    };
    for group in &groups {
        let unmatched = group.unmatched_sizes();
        if !unmatched.is_empty() {
            vprintln!("  {}: no counterpart for sizes {}", group.label(), unmatched.join(", "));
        }
    }

    let compiler = match cli.compiler.clone().or_else(|| config.environment.compiler.clone()) {
        Some(compiler) => compiler,
        None => toolchain::detect_compiler().context("detecting compiler version")?,
    };
    let environment = host::detect(compiler);
    vprintln!("  Environment: {}", environment.caption());

    let options = config.report_options();
    let report = Report {
        groups: &groups,
        unit_tests: unit_tests.as_deref(),
        environment: &environment,
        options: &options,
    };

    if !verbose::is_quiet() {
        if report.has_rows() {
            output::print_comparison_table(&report);
        }
        if let Some(tests) = report.unit_tests {
            output::print_unit_test_table(tests);
        }
    }

    let written = {
        let _t = Timer::start(Stage::WriteArtifacts);
        artifacts::write_artifacts(&report, &cli.output, cli.json)?
    };
    for path in &written {
        vprintln!("  Wrote {}", path.display());
    }

    println!("Analysis complete. Results saved to {}", cli.output.display());
    Ok(())
}

/// Print what the table parser recovered and skipped.
fn report_table(table: &BenchmarkTable) {
    for diag in &table.diagnostics {
        verbose::diagnostic(diag);
    }
    dprintln!("Parsed {} benchmarks", table.records.len());
    vprintln!("Unique data types: {:?}", table.data_types());
    vprintln!("Unique operations: {:?}", table.operations());
    if table.skipped() > 0 {
        vprintln!("Skipped {} malformed lines", table.skipped());
    }
}
