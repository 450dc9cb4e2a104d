//! Presentation options shared by all renderers.

use serde::{Deserialize, Serialize};

/// Labels and chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Display name of the vectorized variant.
    pub vectorized_label: String,
    /// Display name of the scalar variant.
    pub scalar_label: String,
    /// Chart width in pixels.
    pub chart_width: u32,
    /// Chart height in pixels.
    pub chart_height: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            vectorized_label: "SIMD".into(),
            scalar_label: "Plain".into(),
            chart_width: 1800,
            chart_height: 1000,
        }
    }
}
