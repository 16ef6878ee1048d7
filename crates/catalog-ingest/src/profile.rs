//! Null-count profiling of raw and cleaned tables.

use polars::prelude::DataFrame;
use serde::Serialize;

/// Per-column null statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub null_count: usize,
    /// Share of rows that are null, in percent.
    pub null_percent: f64,
}

/// Shape and completeness of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableProfile {
    pub rows: usize,
    pub columns: usize,
    pub column_profiles: Vec<ColumnProfile>,
    pub null_cells: usize,
    pub filled_cells: usize,
}

impl TableProfile {
    pub fn total_cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Filled cells as a percentage of all cells; `0.0` for an empty table.
    pub fn completeness(&self) -> f64 {
        let total = self.total_cells();
        if total == 0 {
            0.0
        } else {
            self.filled_cells as f64 / total as f64 * 100.0
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.column_profiles.iter().map(|c| c.name.as_str()).collect()
    }

    /// Columns with at least one null, in frame order.
    pub fn incomplete_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.column_profiles.iter().filter(|c| c.null_count > 0)
    }
}

/// Computes a [`TableProfile`] for `df`.
pub fn profile_table(df: &DataFrame) -> TableProfile {
    let rows = df.height();
    let column_profiles: Vec<ColumnProfile> = df
        .get_columns()
        .iter()
        .map(|column| {
            let null_count = column.null_count();
            let null_percent = if rows == 0 {
                0.0
            } else {
                null_count as f64 / rows as f64 * 100.0
            };
            ColumnProfile {
                name: column.name().to_string(),
                null_count,
                null_percent,
            }
        })
        .collect();
    let null_cells: usize = column_profiles.iter().map(|c| c.null_count).sum();
    let columns = column_profiles.len();
    TableProfile {
        rows,
        columns,
        column_profiles,
        null_cells,
        filled_cells: rows * columns - null_cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn counts_nulls_per_column() {
        let df = DataFrame::new(vec![
            Series::new("ItemName".into(), vec![Some("F100/Backpack"), Some("W2/Loafer")])
                .into_column(),
            Series::new("U_Zone".into(), vec![Some("A"), None]).into_column(),
        ])
        .unwrap();
        let profile = profile_table(&df);
        assert_eq!(profile.rows, 2);
        assert_eq!(profile.columns, 2);
        assert_eq!(profile.null_cells, 1);
        assert_eq!(profile.filled_cells, 3);
        assert!((profile.completeness() - 75.0).abs() < f64::EPSILON);
        let incomplete: Vec<&str> = profile.incomplete_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(incomplete, vec!["U_Zone"]);
    }

    #[test]
    fn empty_table_is_zero_complete() {
        let profile = profile_table(&DataFrame::empty());
        assert_eq!(profile.total_cells(), 0);
        assert_eq!(profile.completeness(), 0.0);
    }
}
