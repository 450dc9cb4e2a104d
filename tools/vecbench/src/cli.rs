//! Command-line interface definitions for vecbench.

use std::path::PathBuf;

use clap::Parser;

/// Analyze SIMD benchmark results.
#[derive(Parser)]
#[command(name = "vecbench", version, about)]
pub struct Cli {
    /// Path to the benchmark results file.
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Directory to save analysis results (created if absent).
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Optional TOML file with labels, chart size and environment overrides.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Compiler identifier to report instead of querying the toolchain.
    #[arg(long)]
    pub compiler: Option<String>,

    /// Also write a JSON export of all records.
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output; show only errors and the final summary.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output with per-line diagnostics and stage timings.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn input_and_output_are_required() {
        assert!(Cli::try_parse_from(["vecbench", "-i", "log.txt"]).is_err());
        let cli = Cli::try_parse_from(["vecbench", "-i", "log.txt", "-o", "out"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("log.txt"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(!cli.json);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["vecbench", "-i", "a", "-o", "b", "-q", "-v"]).is_err());
    }
}
