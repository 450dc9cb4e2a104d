//! Grouping of benchmark records and vectorized-vs-scalar pairing.

use serde::{Deserialize, Serialize};
use vecbench_log::{BenchmarkRecord, Category};

/// A vectorized and a scalar measurement of the same size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Problem size shared by both records.
    pub size: String,
    /// Vectorized measurement.
    pub vectorized: BenchmarkRecord,
    /// Scalar measurement.
    pub scalar: BenchmarkRecord,
    /// `(scalar / vectorized - 1) * 100`, `None` when the vectorized time
    /// is not positive.
    pub speedup_percent: Option<f64>,
}

impl ComparisonRow {
    /// Pair two records. The caller guarantees equal sizes.
    pub fn new(vectorized: BenchmarkRecord, scalar: BenchmarkRecord) -> Self {
        debug_assert_eq!(vectorized.size, scalar.size);
        Self {
            size: vectorized.size.clone(),
            speedup_percent: speedup_percent(scalar.time_ms, vectorized.time_ms),
            vectorized,
            scalar,
        }
    }

    /// Vectorized time in milliseconds.
    pub fn vectorized_ms(&self) -> f64 {
        self.vectorized.time_ms
    }

    /// Scalar time in milliseconds.
    pub fn scalar_ms(&self) -> f64 {
        self.scalar.time_ms
    }

    /// Speedup as a multiple (`2.0` means twice as fast).
    pub fn speedup_multiple(&self) -> Option<f64> {
        self.speedup_percent.map(|pct| pct / 100.0 + 1.0)
    }
}

/// All measurements of one `(data_type, operation)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonGroup {
    /// Operand type.
    pub data_type: String,
    /// Operation name.
    pub operation: String,
    /// Vectorized records, in input order. Never empty.
    pub vectorized: Vec<BenchmarkRecord>,
    /// Scalar records, in input order. Never empty.
    pub scalar: Vec<BenchmarkRecord>,
    /// Size-matched pairs.
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonGroup {
    /// Human-readable label, `"<data_type> <operation>"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.data_type, self.operation)
    }

    /// Ordering key used by the charts, `"<data_type>_<operation>"`.
    pub fn sort_key(&self) -> String {
        format!("{}_{}", self.data_type, self.operation)
    }

    /// Sizes measured on only one side, and therefore absent from `rows`.
    pub fn unmatched_sizes(&self) -> Vec<&str> {
        let mut unmatched: Vec<&str> = Vec::new();
        let sides = [(&self.vectorized, &self.scalar), (&self.scalar, &self.vectorized)];
        for (side, other) in sides {
            for record in side {
                let size = record.size.as_str();
                if !other.iter().any(|o| o.size == size) && !unmatched.contains(&size) {
                    unmatched.push(size);
                }
            }
        }
        unmatched
    }
}

/// Relative improvement of `vectorized_ms` over `scalar_ms`, in percent.
pub fn speedup_percent(scalar_ms: f64, vectorized_ms: f64) -> Option<f64> {
    (vectorized_ms > 0.0).then(|| (scalar_ms / vectorized_ms - 1.0) * 100.0)
}

/// Group records by `(data_type, operation)` and pair them by size.
///
/// Groups come out in cross-product order of the distinct data types and
/// operations, each in first-appearance order. A group is kept only when
/// both a vectorized and a scalar record exist for it.
pub fn aggregate(records: &[BenchmarkRecord]) -> Vec<ComparisonGroup> {
    let data_types = distinct(records.iter().map(|r| r.data_type.as_str()));
    let operations = distinct(records.iter().map(|r| r.operation.as_str()));

    let mut groups = Vec::new();
    for data_type in &data_types {
        for operation in &operations {
            let side = |category: Category| -> Vec<BenchmarkRecord> {
                records
                    .iter()
                    .filter(|r| {
                        r.category == category && r.data_type == *data_type && r.operation == *operation
                    })
                    .cloned()
                    .collect()
            };
            let vectorized = side(Category::Vectorized);
            let scalar = side(Category::Scalar);
            if vectorized.is_empty() || scalar.is_empty() {
                continue;
            }

            let rows = pair_by_size(&vectorized, &scalar);
            groups.push(ComparisonGroup {
                data_type: (*data_type).to_string(),
                operation: (*operation).to_string(),
                vectorized,
                scalar,
                rows,
            });
        }
    }
    groups
}

/// Inner join on `size`.
///
/// Every vectorized record is paired with every scalar record of the same
/// size, so duplicated sizes fan out. Sizes without a partner are dropped.
pub fn pair_by_size(vectorized: &[BenchmarkRecord], scalar: &[BenchmarkRecord]) -> Vec<ComparisonRow> {
    vectorized
        .iter()
        .flat_map(|v| {
            scalar
                .iter()
                .filter(move |s| s.size == v.size)
                .map(move |s| ComparisonRow::new(v.clone(), s.clone()))
        })
        .collect()
}

/// All rows of all groups, stably ordered by [`ComparisonGroup::sort_key`].
pub fn sorted_rows(groups: &[ComparisonGroup]) -> Vec<(&ComparisonGroup, &ComparisonRow)> {
    let mut rows: Vec<_> = groups
        .iter()
        .flat_map(|g| g.rows.iter().map(move |r| (g, r)))
        .collect();
    rows.sort_by_cached_key(|(g, _)| g.sort_key());
    rows
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

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Category, data_type: &str, operation: &str, size: &str, time_ms: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            name: format!("BM_{}_{data_type}_{operation}_{size}", category.marker()),
            category,
            data_type: data_type.into(),
            operation: operation.into(),
            size: size.into(),
            time_ms,
        }
    }

    #[test]
    fn speedup_of_twice_as_fast_is_one_hundred_percent() {
        let records = [
            record(Category::Vectorized, "int128", "mul", "64", 0.002),
            record(Category::Scalar, "int128", "mul", "64", 0.004),
        ];
        let groups = aggregate(&records);
        assert_eq!(groups.len(), 1);
        let row = &groups[0].rows[0];
        assert!((row.speedup_percent.unwrap() - 100.0).abs() < 1e-9);
        assert!((row.speedup_multiple().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_vectorized_time_has_no_speedup() {
        assert_eq!(speedup_percent(1.0, 0.0), None);
        assert_eq!(speedup_percent(1.0, -2.0), None);
        assert!((speedup_percent(1.0, 2.0).unwrap() + 50.0).abs() < 1e-9);
    }

    #[test]
    fn one_sided_groups_are_dropped() {
        let records = [
            record(Category::Vectorized, "float256", "add", "8", 1.0),
            record(Category::Scalar, "float256", "add", "8", 2.0),
            record(Category::Vectorized, "float256", "sub", "8", 1.0),
            record(Category::Scalar, "int128", "mul", "8", 1.0),
            record(Category::Unknown, "Unknown", "Unknown", "Unknown", 1.0),
        ];
        let groups = aggregate(&records);
        let labels: Vec<_> = groups.iter().map(ComparisonGroup::label).collect();
        assert_eq!(labels, vec!["float256 add"]);
        for group in &groups {
            assert!(!group.vectorized.is_empty());
            assert!(!group.scalar.is_empty());
        }
    }

    #[test]
    fn groups_follow_cross_product_order() {
        let records = [
            record(Category::Vectorized, "int128", "mul", "1", 1.0),
            record(Category::Vectorized, "float256", "add", "1", 1.0),
            record(Category::Scalar, "float256", "add", "1", 1.0),
            record(Category::Scalar, "int128", "mul", "1", 1.0),
            record(Category::Vectorized, "int128", "add", "1", 1.0),
            record(Category::Scalar, "int128", "add", "1", 1.0),
        ];
        let labels: Vec<_> = aggregate(&records).iter().map(ComparisonGroup::label).collect();
        assert_eq!(labels, vec!["int128 mul", "int128 add", "float256 add"]);
    }

    #[test]
    fn pairing_is_an_inner_join_on_size() {
        let vectorized = [
            record(Category::Vectorized, "a", "add", "16", 1.0),
            record(Category::Vectorized, "a", "add", "32", 1.0),
        ];
        let scalar = [
            record(Category::Scalar, "a", "add", "32", 2.0),
            record(Category::Scalar, "a", "add", "64", 2.0),
        ];
        let rows = pair_by_size(&vectorized, &scalar);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].size, "32");
        for row in &rows {
            assert_eq!(row.vectorized.size, row.scalar.size);
        }

        let mut records = vectorized.to_vec();
        records.extend(scalar);
        let groups = aggregate(&records);
        assert_eq!(groups[0].unmatched_sizes(), vec!["16", "64"]);
    }

    #[test]
    fn duplicate_sizes_fan_out() {
        let vectorized = [
            record(Category::Vectorized, "a", "add", "8", 1.0),
            record(Category::Vectorized, "a", "add", "8", 1.5),
        ];
        let scalar = [
            record(Category::Scalar, "a", "add", "8", 2.0),
            record(Category::Scalar, "a", "add", "8", 3.0),
        ];
        let rows = pair_by_size(&vectorized, &scalar);
        let times: Vec<_> = rows.iter().map(|r| (r.vectorized_ms(), r.scalar_ms())).collect();
        assert_eq!(times, vec![(1.0, 2.0), (1.0, 3.0), (1.5, 2.0), (1.5, 3.0)]);
    }

    #[test]
    fn sorted_rows_order_by_key_and_keep_size_order() {
        let records = [
            record(Category::Vectorized, "int128", "mul", "64", 1.0),
            record(Category::Vectorized, "int128", "mul", "8", 1.0),
            record(Category::Scalar, "int128", "mul", "64", 1.0),
            record(Category::Scalar, "int128", "mul", "8", 1.0),
            record(Category::Vectorized, "float256", "add", "8", 1.0),
            record(Category::Scalar, "float256", "add", "8", 1.0),
        ];
        let groups = aggregate(&records);
        let order: Vec<_> = sorted_rows(&groups)
            .iter()
            .map(|(g, r)| format!("{} {}", g.sort_key(), r.size))
            .collect();
        assert_eq!(order, vec!["float256_add 8", "int128_mul 64", "int128_mul 8"]);
    }
}
