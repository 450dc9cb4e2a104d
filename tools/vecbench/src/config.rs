//! Optional configuration file.
//!
//! ```toml
//! [labels]
//! vectorized = "AVX2"
//! scalar = "Scalar"
//!
//! [charts]
//! width = 1600
//! height = 900
//!
//! [environment]
//! compiler = "clang 17.0.6"
//! ```
//!
//! Every table and key is optional; command-line flags win over the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use vecbench_report::ReportOptions;

/// Display names of the two variants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelConfig {
    /// Vectorized variant label.
    pub vectorized: Option<String>,
    /// Scalar variant label.
    pub scalar: Option<String>,
}

/// Chart geometry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    /// Width in pixels.
    pub width: Option<u32>,
    /// Height in pixels.
    pub height: Option<u32>,
}

/// Environment overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Compiler string; skips toolchain detection when set.
    pub compiler: Option<String>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Variant labels.
    #[serde(default)]
    pub labels: LabelConfig,
    /// Chart geometry.
    #[serde(default)]
    pub charts: ChartConfig,
    /// Environment overrides.
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

impl Config {
    /// Load from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Parse configuration text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve presentation options, falling back to the defaults.
    pub fn report_options(&self) -> ReportOptions {
        let defaults = ReportOptions::default();
        ReportOptions {
            vectorized_label: self.labels.vectorized.clone().unwrap_or(defaults.vectorized_label),
            scalar_label: self.labels.scalar.clone().unwrap_or(defaults.scalar_label),
            chart_width: self.charts.width.unwrap_or(defaults.chart_width),
            chart_height: self.charts.height.unwrap_or(defaults.chart_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.report_options(), ReportOptions::default());
        assert!(config.environment.compiler.is_none());
    }

    #[test]
    fn partial_overrides() {
        let config = Config::parse(
            r#"
[labels]
vectorized = "AVX2"

[charts]
height = 600

[environment]
compiler = "clang 17"
"#,
        )
        .unwrap();
        let options = config.report_options();
        assert_eq!(options.vectorized_label, "AVX2");
        assert_eq!(options.scalar_label, "Plain");
        assert_eq!(options.chart_width, 1800);
        assert_eq!(options.chart_height, 600);
        assert_eq!(config.environment.compiler.as_deref(), Some("clang 17"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("[labels]\nvector = \"x\"\n").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/vecbench.toml"))).is_err());
        assert!(Config::load(None).is_ok());
    }
}
