//! SVG charts and table renderings.

use std::path::Path;

use anyhow::{Context, Result};
use vecbench_log::TestStatus;

use crate::Report;
use crate::aggregate::{self, ComparisonGroup, ComparisonRow};
use crate::svg::{Anchor, Svg, TextStyle};

const VECTORIZED_COLOR: &str = "royalblue";
const SCALAR_COLOR: &str = "lightcoral";
const GAIN_COLOR: &str = "green";
const LOSS_COLOR: &str = "red";
const GAIN_FILL: &str = "#d5f4e6";
const LOSS_FILL: &str = "#f4d5d5";
const UNKNOWN_FILL: &str = "#f4efd5";
const HEADER_FILL: &str = "#e8e8e8";
const GRID_COLOR: &str = "#cccccc";

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 80.0;
const MARGIN_BOTTOM: f64 = 240.0;
const Y_TICKS: u32 = 5;
const BAR_WIDTH: f64 = 0.35;

const TABLE_ROW_HEIGHT: f64 = 30.0;
const TABLE_MARGIN: f64 = 40.0;
const TABLE_TOP: f64 = 90.0;

/// One bar position on the consolidated charts.
struct ChartRow<'a> {
    label: String,
    group: &'a ComparisonGroup,
    row: &'a ComparisonRow,
}

fn chart_rows<'a>(groups: &'a [ComparisonGroup]) -> Vec<ChartRow<'a>> {
    aggregate::sorted_rows(groups)
        .into_iter()
        .map(|(group, row)| ChartRow {
            label: format!("{} {}", group.label(), row.size),
            group,
            row,
        })
        .collect()
}

fn speedup_label(speedup: Option<f64>, signed: bool) -> String {
    match speedup {
        Some(pct) if signed => format!("{pct:+.1}%"),
        Some(pct) => format!("{pct:.1}%"),
        None => "n/a".into(),
    }
}

fn speedup_color(speedup: Option<f64>) -> &'static str {
    if speedup.is_some_and(|pct| pct > 0.0) {
        GAIN_COLOR
    } else {
        LOSS_COLOR
    }
}

fn title(svg: &mut Svg, width: f64, heading: &str, caption: &str) {
    svg.text(
        width / 2.0,
        32.0,
        heading,
        TextStyle {
            size: 20.0,
            anchor: Anchor::Middle,
            bold: true,
            ..TextStyle::default()
        },
    );
    svg.text(
        width / 2.0,
        54.0,
        caption,
        TextStyle {
            size: 12.0,
            anchor: Anchor::Middle,
            fill: "#555",
            ..TextStyle::default()
        },
    );
}

/// Plot area shared by the bar charts.
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    y_min: f64,
    y_max: f64,
}

impl Plot {
    fn new(report: &Report<'_>, y_min: f64, y_max: f64) -> Self {
        let width = f64::from(report.options.chart_width);
        let height = f64::from(report.options.chart_height);
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
            y_min,
            y_max: if y_max > y_min { y_max } else { y_min + 1.0 },
        }
    }

    fn y(&self, value: f64) -> f64 {
        self.top + self.height * (1.0 - (value - self.y_min) / (self.y_max - self.y_min))
    }

    fn slot(&self, count: usize) -> f64 {
        self.width / count.max(1) as f64
    }

    fn center(&self, idx: usize, count: usize) -> f64 {
        self.left + self.slot(count) * (idx as f64 + 0.5)
    }

    fn axes(&self, svg: &mut Svg, y_label: &str, format_tick: impl Fn(f64) -> String) {
        for tick in 0..=Y_TICKS {
            let value = self.y_min + (self.y_max - self.y_min) * f64::from(tick) / f64::from(Y_TICKS);
            let y = self.y(value);
            svg.line(self.left, y, self.left + self.width, y, GRID_COLOR, true);
            svg.text(
                self.left - 8.0,
                y + 4.0,
                &format_tick(value),
                TextStyle {
                    size: 11.0,
                    anchor: Anchor::End,
                    ..TextStyle::default()
                },
            );
        }
        svg.line(self.left, self.top, self.left, self.top + self.height, "#333", false);
        svg.text(
            24.0,
            self.top + self.height / 2.0,
            y_label,
            TextStyle {
                size: 13.0,
                anchor: Anchor::Middle,
                rotate: -90.0,
                ..TextStyle::default()
            },
        );
    }

    fn x_labels(&self, svg: &mut Svg, rows: &[ChartRow<'_>]) {
        let base = self.top + self.height + 14.0;
        for (idx, row) in rows.iter().enumerate() {
            svg.text(
                self.center(idx, rows.len()),
                base,
                &row.label,
                TextStyle {
                    size: 10.0,
                    anchor: Anchor::End,
                    rotate: -45.0,
                    ..TextStyle::default()
                },
            );
        }
    }
}

/// Grouped bars of vectorized vs scalar time, labelled with the speedup.
pub fn comparison_chart(report: &Report<'_>) -> String {
    let rows = chart_rows(report.groups);
    let opts = report.options;
    let width = f64::from(opts.chart_width);
    let height = f64::from(opts.chart_height);

    let max_time = rows
        .iter()
        .map(|r| r.row.vectorized_ms().max(r.row.scalar_ms()))
        .fold(0.0_f64, f64::max);
    let plot = Plot::new(report, 0.0, max_time * 1.15);

    let mut svg = Svg::new(width, height);
    title(
        &mut svg,
        width,
        &format!("{} vs {} Performance Comparison", opts.vectorized_label, opts.scalar_label),
        &report.environment.caption(),
    );
    plot.axes(&mut svg, "Time (ms)", |v| format!("{v:.3}"));

    let slot = plot.slot(rows.len());
    let bar = slot * BAR_WIDTH;
    for (idx, chart_row) in rows.iter().enumerate() {
        let center = plot.center(idx, rows.len());
        let row = chart_row.row;
        for (x, value, color) in [
            (center - bar, row.vectorized_ms(), VECTORIZED_COLOR),
            (center, row.scalar_ms(), SCALAR_COLOR),
        ] {
            let top = plot.y(value.max(0.0));
            svg.rect(x, top, bar, plot.y(0.0) - top, color, None);
        }
        let peak = plot.y(row.vectorized_ms().max(row.scalar_ms()));
        svg.text(
            center,
            peak - 6.0,
            &speedup_label(row.speedup_percent, false),
            TextStyle {
                size: 10.0,
                anchor: Anchor::Middle,
                fill: speedup_color(row.speedup_percent),
                bold: true,
                ..TextStyle::default()
            },
        );
    }
    plot.x_labels(&mut svg, &rows);

    legend(
        &mut svg,
        width - MARGIN_RIGHT - 160.0,
        MARGIN_TOP + 10.0,
        &[
            (opts.vectorized_label.as_str(), VECTORIZED_COLOR),
            (opts.scalar_label.as_str(), SCALAR_COLOR),
        ],
    );
    svg.finish()
}

/// One bar per pair showing the speedup percentage.
pub fn speedup_chart(report: &Report<'_>) -> String {
    let rows = chart_rows(report.groups);
    let opts = report.options;
    let width = f64::from(opts.chart_width);
    let height = f64::from(opts.chart_height);

    let speedups: Vec<f64> = rows.iter().filter_map(|r| r.row.speedup_percent).collect();
    let lo = speedups.iter().copied().fold(0.0_f64, f64::min);
    let hi = speedups.iter().copied().fold(0.0_f64, f64::max);
    let pad = ((hi - lo) * 0.1).max(1.0);
    let plot = Plot::new(report, if lo < 0.0 { lo - pad } else { 0.0 }, hi + pad);

    let mut svg = Svg::new(width, height);
    title(
        &mut svg,
        width,
        &format!("{} Speedup over {} Implementation", opts.vectorized_label, opts.scalar_label),
        &report.environment.caption(),
    );
    plot.axes(&mut svg, "Speedup (%)", |v| format!("{v:.0}"));

    let zero = plot.y(0.0);
    svg.line(plot.left, zero, plot.left + plot.width, zero, "#000", false);

    let bar = plot.slot(rows.len()) * BAR_WIDTH * 2.0;
    for (idx, chart_row) in rows.iter().enumerate() {
        let center = plot.center(idx, rows.len());
        let speedup = chart_row.row.speedup_percent;
        let value = speedup.unwrap_or(0.0);
        let y = plot.y(value);
        let (top, h) = if value >= 0.0 { (y, zero - y) } else { (zero, y - zero) };
        svg.rect(center - bar / 2.0, top, bar, h, speedup_color(speedup), None);

        let label_y = if value > 0.0 { y - 6.0 } else { y + 14.0 };
        svg.text(
            center,
            label_y,
            &speedup_label(speedup, false),
            TextStyle {
                size: 10.0,
                anchor: Anchor::Middle,
                ..TextStyle::default()
            },
        );
    }
    plot.x_labels(&mut svg, &rows);
    svg.finish()
}

/// Tabular rendering of every pair, speedup cells shaded by sign.
pub fn comparison_table(report: &Report<'_>) -> String {
    let opts = report.options;
    let mut rows = chart_rows(report.groups);
    rows.sort_by_cached_key(|r| r.group.label());

    let cells: Vec<(Vec<String>, Option<&str>)> = rows
        .iter()
        .map(|r| {
            let speedup = r.row.speedup_percent;
            let fill = if speedup.is_some_and(|pct| pct > 0.0) { GAIN_FILL } else { LOSS_FILL };
            (
                vec![
                    r.label.clone(),
                    format!("{:.3}", r.row.vectorized_ms()),
                    format!("{:.3}", r.row.scalar_ms()),
                    speedup_label(speedup, true),
                ],
                Some(fill),
            )
        })
        .collect();

    let headers = [
        "Benchmark".to_string(),
        format!("{} (ms)", opts.vectorized_label),
        format!("{} (ms)", opts.scalar_label),
        "Speedup (%)".to_string(),
    ];
    table(
        report,
        &format!("{} vs {} Performance Comparison Table", opts.vectorized_label, opts.scalar_label),
        &headers,
        &[0.4, 0.2, 0.2, 0.2],
        3,
        &cells,
    )
}

/// Tabular rendering of unit-test results, status cells shaded.
pub fn unit_test_table(report: &Report<'_>) -> String {
    let tests = report.unit_tests.unwrap_or_default();
    let cells: Vec<(Vec<String>, Option<&str>)> = tests
        .iter()
        .map(|t| {
            let fill = match t.status {
                TestStatus::Passed => GAIN_FILL,
                TestStatus::Failed => LOSS_FILL,
                TestStatus::Unknown => UNKNOWN_FILL,
            };
            let duration = if t.duration_ms < 0 {
                "-".to_string()
            } else {
                t.duration_ms.to_string()
            };
            (
                vec![t.test_suite.clone(), t.test_case.clone(), t.status.to_string(), duration],
                Some(fill),
            )
        })
        .collect();

    let headers = ["Suite", "Case", "Status", "Duration (ms)"].map(String::from);
    table(report, "Unit Test Results", &headers, &[0.3, 0.4, 0.15, 0.15], 2, &cells)
}

fn table(
    report: &Report<'_>,
    heading: &str,
    headers: &[String],
    fractions: &[f64],
    shaded_column: usize,
    rows: &[(Vec<String>, Option<&str>)],
) -> String {
    let width = f64::from(report.options.chart_width);
    let height = TABLE_TOP + TABLE_ROW_HEIGHT * (rows.len() + 1) as f64 + TABLE_MARGIN;
    let inner = width - 2.0 * TABLE_MARGIN;

    let mut svg = Svg::new(width, height);
    title(&mut svg, width, heading, &report.environment.caption());

    let lefts: Vec<f64> = fractions
        .iter()
        .scan(TABLE_MARGIN, |x, f| {
            let left = *x;
            *x += f * inner;
            Some(left)
        })
        .collect();

    let draw_row = |svg: &mut Svg, y: f64, cells: &[String], fill: Option<&str>, header: bool| {
        for (col, cell) in cells.iter().enumerate() {
            let w = fractions[col] * inner;
            let bg = if header {
                HEADER_FILL
            } else if col == shaded_column {
                fill.unwrap_or("#FFFFFF")
            } else {
                "#FFFFFF"
            };
            svg.rect(lefts[col], y, w, TABLE_ROW_HEIGHT, bg, Some("#999"));
            svg.text(
                lefts[col] + w / 2.0,
                y + TABLE_ROW_HEIGHT / 2.0 + 5.0,
                cell,
                TextStyle {
                    size: 13.0,
                    anchor: Anchor::Middle,
                    bold: header,
                    ..TextStyle::default()
                },
            );
        }
    };

    draw_row(&mut svg, TABLE_TOP, headers, None, true);
    for (idx, (cells, fill)) in rows.iter().enumerate() {
        let y = TABLE_TOP + TABLE_ROW_HEIGHT * (idx + 1) as f64;
        draw_row(&mut svg, y, cells, *fill, false);
    }
    svg.finish()
}

fn legend(svg: &mut Svg, x: f64, y: f64, entries: &[(&str, &str)]) {
    for (idx, (label, color)) in entries.iter().enumerate() {
        let row_y = y + idx as f64 * 22.0;
        svg.rect(x, row_y, 16.0, 14.0, color, None);
        svg.text(
            x + 24.0,
            row_y + 12.0,
            label,
            TextStyle {
                size: 13.0,
                ..TextStyle::default()
            },
        );
    }
}

/// Write `document` to `path`.
pub fn write_chart(document: &str, path: &Path) -> Result<()> {
    std::fs::write(path, document).with_context(|| format!("writing chart to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::{CpuInfo, Environment, ReportOptions};
    use vecbench_log::{BenchmarkRecord, Category, UnitTestRecord};

    fn environment() -> Environment {
        Environment {
            os: "linux".into(),
            compiler: "g++ 13".into(),
            cpu: CpuInfo {
                brand: "Test CPU".into(),
                arch: "x86_64".into(),
                cores: 2,
                frequency_mhz: 2000,
            },
        }
    }

    fn record(category: Category, data_type: &str, time_ms: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            name: String::new(),
            category,
            data_type: data_type.into(),
            operation: "add".into(),
            size: "1024".into(),
            time_ms,
        }
    }

    fn groups() -> Vec<ComparisonGroup> {
        aggregate(&[
            record(Category::Vectorized, "int128", 0.5),
            record(Category::Scalar, "int128", 0.25),
            record(Category::Vectorized, "float256", 0.001),
            record(Category::Scalar, "float256", 0.004),
        ])
    }

    #[test]
    fn comparison_chart_labels_each_pair() {
        let groups = groups();
        let env = environment();
        let options = ReportOptions::default();
        let report = Report {
            groups: &groups,
            unit_tests: None,
            environment: &env,
            options: &options,
        };
        let svg = comparison_chart(&report);
        assert!(svg.contains("SIMD vs Plain Performance Comparison"));
        assert!(svg.contains(">300.0%</text>"));
        assert!(svg.contains(">-50.0%</text>"));
        // float256 sorts before int128.
        let float_pos = svg.find(">float256 add 1024<").expect("float label");
        let int_pos = svg.find(">int128 add 1024<").expect("int label");
        assert!(float_pos < int_pos);
    }

    #[test]
    fn speedup_chart_colors_by_sign() {
        let groups = groups();
        let env = environment();
        let options = ReportOptions::default();
        let report = Report {
            groups: &groups,
            unit_tests: None,
            environment: &env,
            options: &options,
        };
        let svg = speedup_chart(&report);
        assert!(svg.contains("fill=\"green\""));
        assert!(svg.contains("fill=\"red\""));
    }

    #[test]
    fn comparison_table_shades_speedup_cells() {
        let groups = groups();
        let env = environment();
        let options = ReportOptions::default();
        let report = Report {
            groups: &groups,
            unit_tests: None,
            environment: &env,
            options: &options,
        };
        let svg = comparison_table(&report);
        assert!(svg.contains(">+300.0%</text>"));
        assert!(svg.contains(GAIN_FILL));
        assert!(svg.contains(LOSS_FILL));
        assert!(svg.contains(">Plain (ms)</text>"));
    }

    #[test]
    fn comparison_table_keeps_size_order_within_group() {
        let sized = |category, size: &str| BenchmarkRecord {
            name: String::new(),
            category,
            data_type: "int128".into(),
            operation: "mul".into(),
            size: size.into(),
            time_ms: 1.0,
        };
        let groups = aggregate(&[
            sized(Category::Vectorized, "64"),
            sized(Category::Vectorized, "1024"),
            sized(Category::Scalar, "64"),
            sized(Category::Scalar, "1024"),
        ]);
        let env = environment();
        let options = ReportOptions::default();
        let report = Report {
            groups: &groups,
            unit_tests: None,
            environment: &env,
            options: &options,
        };

        for svg in [comparison_table(&report), comparison_chart(&report)] {
            let small = svg.find(">int128 mul 64<").expect("size 64 label");
            let large = svg.find(">int128 mul 1024<").expect("size 1024 label");
            assert!(small < large);
        }
    }

    #[test]
    fn unit_test_table_lists_tests() {
        let tests = [UnitTestRecord {
            test_suite: "SIMD_Test".into(),
            test_case: "SIMD_Import".into(),
            duration_ms: -1,
            status: TestStatus::Failed,
        }];
        let env = environment();
        let options = ReportOptions::default();
        let report = Report {
            groups: &[],
            unit_tests: Some(&tests),
            environment: &env,
            options: &options,
        };
        let svg = unit_test_table(&report);
        assert!(svg.contains(">SIMD_Import</text>"));
        assert!(svg.contains(">Failed</text>"));
        assert!(svg.contains(LOSS_FILL));
    }
}
