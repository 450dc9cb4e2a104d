//! C++ toolchain identification.
//!
//! On Windows the installed Visual Studio is located with `vswhere`; on
//! every other platform the compiler named by `$CXX` (default `c++`) is
//! asked for `--version`. Failure is fatal: a report without a compiler
//! identifier is not comparable to other runs.

use std::process::Command;

use anyhow::{Context, Result, bail};

/// Compiler queried when `$CXX` is unset.
const DEFAULT_CXX: &str = "c++";

/// Query the host toolchain for a compiler identifier.
pub fn detect_compiler() -> Result<String> {
    if cfg!(windows) { query_vswhere() } else { query_cxx() }
}

fn query_cxx() -> Result<String> {
    let cxx = std::env::var("CXX").unwrap_or_else(|_| DEFAULT_CXX.to_string());
    let output = Command::new(&cxx)
        .arg("--version")
        .output()
        .with_context(|| format!("failed to run `{cxx} --version`"))?;

    if !output.status.success() {
        bail!(
            "`{cxx} --version` failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stdout = String::from_utf8(output.stdout).context("non-UTF-8 compiler version output")?;
    first_line(&stdout).ok_or_else(|| anyhow::anyhow!("`{cxx} --version` printed nothing"))
}

fn query_vswhere() -> Result<String> {
    let output = Command::new("vswhere")
        .args(["-latest", "-property", "catalog_productDisplayVersion"])
        .output()
        .context("failed to run `vswhere` (is Visual Studio installed?)")?;

    if !output.status.success() {
        bail!("vswhere failed: {}", String::from_utf8_lossy(&output.stderr).trim());
    }

    let stdout = String::from_utf8(output.stdout).context("non-UTF-8 vswhere output")?;
    first_line(&stdout)
        .map(|version| format!("MSVC {version}"))
        .ok_or_else(|| anyhow::anyhow!("vswhere found no Visual Studio installation"))
}

/// First non-blank line of tool output, trimmed.
fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(ToString::to_string)
}
