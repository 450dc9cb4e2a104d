//! Console output levels for the analysis pipeline.
//!
//! `-q` keeps only errors and the closing line, the default adds progress,
//! parse diagnostics and the console tables, `-v` adds stage timings,
//! diagnostic line numbers and sizes dropped by the join.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

use vecbench_log::Diagnostic;

/// How much the pipeline prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Verbosity {
    Quiet = 0,
    Default = 1,
    Verbose = 2,
}

impl Verbosity {
    /// Level selected by the `-q`/`-v` flags (clap rejects both at once).
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Default,
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Verbosity::Default as u8);

/// Set the level for the rest of the run.
pub fn init(level: Verbosity) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Returns `true` under `-v`.
pub fn is_verbose() -> bool {
    LEVEL.load(Ordering::Relaxed) == Verbosity::Verbose as u8
}

/// Returns `true` under `-q`.
pub fn is_quiet() -> bool {
    LEVEL.load(Ordering::Relaxed) == Verbosity::Quiet as u8
}

/// Print only under `-v`.
macro_rules! vprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            println!($($arg)*);
        }
    };
}

pub(crate) use vprintln;

/// Print unless `-q`.
macro_rules! dprintln {
    ($($arg:tt)*) => {
        if !$crate::verbose::is_quiet() {
            println!($($arg)*);
        }
    };
}

pub(crate) use dprintln;

/// Print a table diagnostic, prefixed with its table line under `-v`.
pub fn diagnostic(diag: &Diagnostic) {
    if let Some(line) = format_diagnostic(diag) {
        println!("{line}");
    }
}

fn format_diagnostic(diag: &Diagnostic) -> Option<String> {
    if is_quiet() {
        None
    } else if is_verbose() {
        Some(format!("  table line {}: {diag}", diag.line))
    } else {
        Some(diag.to_string())
    }
}

/// Pipeline stages timed under `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReadInput,
    Parse,
    Aggregate,
    WriteArtifacts,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReadInput => "reading input",
            Self::Parse => "parsing log",
            Self::Aggregate => "pairing records",
            Self::WriteArtifacts => "writing artifacts",
        })
    }
}

/// Prints how long a [`Stage`] took when dropped, under `-v`.
pub struct Timer {
    stage: Stage,
    start: Instant,
}

impl Timer {
    /// Start timing `stage`.
    pub fn start(stage: Stage) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if is_verbose() {
            println!("  {}: {:.1?}", self.stage, self.start.elapsed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecbench_log::DiagnosticKind;

    #[test]
    fn flags_select_level() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Default);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
    }

    #[test]
    fn diagnostics_follow_level() {
        let diag = Diagnostic {
            line: 7,
            text: "BM_Plain_float256_div_1024 1.5 ms".into(),
            kind: DiagnosticKind::TooFewTokens,
        };

        init(Verbosity::Default);
        assert_eq!(
            format_diagnostic(&diag).as_deref(),
            Some("Skipping invalid line: BM_Plain_float256_div_1024 1.5 ms")
        );
        init(Verbosity::Verbose);
        assert_eq!(
            format_diagnostic(&diag).as_deref(),
            Some("  table line 7: Skipping invalid line: BM_Plain_float256_div_1024 1.5 ms")
        );
        init(Verbosity::Quiet);
        assert_eq!(format_diagnostic(&diag), None);
        init(Verbosity::Default);
    }

    #[test]
    fn stages_have_readable_names() {
        assert_eq!(Stage::Parse.to_string(), "parsing log");
        assert_eq!(Stage::WriteArtifacts.to_string(), "writing artifacts");
    }
}
