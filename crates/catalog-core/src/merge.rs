//! Fill-only enrichment from a reference table.
//!
//! The reference is indexed once per pass: keys are coerced to text, null
//! and empty keys are dropped, and the first row for each key wins. A row
//! of the input table then receives reference values only in cells that
//! are null; values already present are never replaced.

use std::collections::HashMap;

use catalog_ingest::column_names;
use catalog_model::{EnrichColumns, EnrichmentPass};
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::frame::{set_string_column, string_column, string_column_or_null};

/// Normalizes a join key: optional trimming, and empty keys never match.
pub fn normalize_key(value: Option<&str>, trim: bool) -> Option<String> {
    let value = value?;
    let value = if trim { value.trim() } else { value };
    (!value.is_empty()).then(|| value.to_string())
}

/// Deduplicated lookup over one reference table for one pass.
#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    key: String,
    columns: Vec<(String, Vec<Option<String>>)>,
    rows: HashMap<String, usize>,
}

impl ReferenceIndex {
    /// Indexes `reference` for `pass`.
    ///
    /// Returns `None` when the reference has no column named after the key.
    pub fn build(reference: &DataFrame, pass: &EnrichmentPass) -> Result<Option<Self>> {
        let names = column_names(reference);
        if !names.iter().any(|name| name == pass.key) {
            return Ok(None);
        }

        let enrich: Vec<&String> = match pass.columns {
            EnrichColumns::Listed(listed) => listed
                .iter()
                .filter_map(|wanted| names.iter().find(|name| name.as_str() == *wanted))
                .filter(|name| name.as_str() != pass.key)
                .collect(),
            EnrichColumns::AllExcept(excluded) => names
                .iter()
                .filter(|name| name.as_str() != pass.key && !excluded.contains(&name.as_str()))
                .collect(),
        };

        let keys = string_column(reference, pass.key)?;
        let mut rows = HashMap::new();
        for (idx, key) in keys.iter().enumerate() {
            if let Some(key) = normalize_key(key.as_deref(), pass.trim_keys) {
                rows.entry(key).or_insert(idx);
            }
        }

        let mut columns = Vec::with_capacity(enrich.len());
        for name in enrich {
            columns.push((name.clone(), string_column(reference, name)?));
        }

        Ok(Some(Self {
            key: pass.key.to_string(),
            columns,
            rows,
        }))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reference row for a normalized key.
    pub fn lookup(&self, key: &str) -> Option<usize> {
        self.rows.get(key).copied()
    }

    /// Columns this pass may fill, in reference order.
    pub fn enrich_columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

/// Outcome of one merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Rows whose key was found in the reference.
    pub matched_rows: usize,
    /// Cells that went from null to a reference value.
    pub filled_cells: usize,
    /// Per-row flag: at least one cell was filled.
    pub gained: Vec<bool>,
}

impl MergeReport {
    pub fn enriched_rows(&self) -> usize {
        self.gained.iter().filter(|gained| **gained).count()
    }
}

/// Fills null cells of `df` from `index`, one group of row indices at a time.
///
/// Groups model partitioned merges: each group is joined independently
/// against the same reference. Rows outside every group are left untouched.
/// Enrichable columns missing from `df` are created before filling.
pub fn apply_pass(
    df: &mut DataFrame,
    index: &ReferenceIndex,
    trim_keys: bool,
    groups: &[Vec<usize>],
) -> Result<MergeReport> {
    let height = df.height();
    let keys: Vec<Option<String>> = string_column_or_null(df, &index.key)?
        .iter()
        .map(|key| normalize_key(key.as_deref(), trim_keys))
        .collect();

    let mut targets = Vec::with_capacity(index.columns.len());
    for (name, _) in &index.columns {
        targets.push(string_column_or_null(df, name)?);
    }

    let mut report = MergeReport {
        gained: vec![false; height],
        ..MergeReport::default()
    };
    for group in groups {
        for &row in group {
            let Some(ref_row) = keys
                .get(row)
                .and_then(Option::as_deref)
                .and_then(|key| index.lookup(key))
            else {
                continue;
            };
            report.matched_rows += 1;
            for (target, (_, source)) in targets.iter_mut().zip(&index.columns) {
                if target[row].is_some() {
                    continue;
                }
                if let Some(value) = &source[ref_row] {
                    target[row] = Some(value.clone());
                    report.filled_cells += 1;
                    report.gained[row] = true;
                }
            }
        }
    }

    for ((name, _), values) in index.columns.iter().zip(targets) {
        set_string_column(df, name, values)?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::MergePartition;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    const PASS: EnrichmentPass = EnrichmentPass {
        key: "U_Estilo",
        columns: EnrichColumns::Listed(&["U_Genero", "U_Zone"]),
        trim_keys: false,
        partition: MergePartition::Whole,
    };

    fn reference() -> DataFrame {
        DataFrame::new(vec![
            Series::new("U_Estilo".into(), vec![Some("F100"), Some("F100"), None, Some("W2")])
                .into_column(),
            Series::new("U_Genero".into(), vec![Some("MACC"), Some("OTHER"), Some("X"), None])
                .into_column(),
            Series::new("U_Extra".into(), vec!["a", "b", "c", "d"]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn index_keeps_first_key_and_skips_nulls() {
        let index = ReferenceIndex::build(&reference(), &PASS).unwrap().unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("F100"), Some(0));
        assert_eq!(index.lookup("W2"), Some(3));
        // U_Zone is not in the reference, U_Extra is not listed.
        assert_eq!(index.enrich_columns().collect::<Vec<_>>(), vec!["U_Genero"]);
    }

    #[test]
    fn all_except_takes_remaining_columns() {
        let pass = EnrichmentPass {
            columns: EnrichColumns::AllExcept(&["U_Extra"]),
            ..PASS
        };
        let index = ReferenceIndex::build(&reference(), &pass).unwrap().unwrap();
        assert_eq!(index.enrich_columns().collect::<Vec<_>>(), vec!["U_Genero"]);
    }

    #[test]
    fn missing_key_column_yields_none() {
        let pass = EnrichmentPass {
            key: "U_Estilo_Color",
            ..PASS
        };
        assert!(ReferenceIndex::build(&reference(), &pass).unwrap().is_none());
    }

    #[test]
    fn fills_only_nulls_and_creates_columns() {
        let mut df = DataFrame::new(vec![
            Series::new("U_Estilo".into(), vec![Some("F100"), Some("F100"), Some("W2"), None])
                .into_column(),
        ])
        .unwrap();
        let index = ReferenceIndex::build(&reference(), &PASS).unwrap().unwrap();
        let report = apply_pass(&mut df, &index, false, &[(0..4).collect()]).unwrap();
        let genders = string_column(&df, "U_Genero").unwrap();
        assert_eq!(
            genders,
            vec![Some("MACC".to_string()), Some("MACC".to_string()), None, None]
        );
        assert_eq!(report.matched_rows, 3);
        assert_eq!(report.filled_cells, 2);
        assert_eq!(report.enriched_rows(), 2);
    }

    #[test]
    fn existing_values_survive() {
        let mut df = DataFrame::new(vec![
            Series::new("U_Estilo".into(), vec!["F100"]).into_column(),
            Series::new("U_Genero".into(), vec!["WOMENS"]).into_column(),
        ])
        .unwrap();
        let index = ReferenceIndex::build(&reference(), &PASS).unwrap().unwrap();
        let report = apply_pass(&mut df, &index, false, &[vec![0]]).unwrap();
        assert_eq!(string_column(&df, "U_Genero").unwrap()[0].as_deref(), Some("WOMENS"));
        assert_eq!(report.filled_cells, 0);
        assert_eq!(report.matched_rows, 1);
    }

    #[test]
    fn trimmed_keys_match() {
        assert_eq!(normalize_key(Some("  P1 "), true).as_deref(), Some("P1"));
        assert_eq!(normalize_key(Some("  P1 "), false).as_deref(), Some("  P1 "));
        assert_eq!(normalize_key(Some("   "), true), None);
        assert_eq!(normalize_key(Some(""), false), None);
        assert_eq!(normalize_key(None, true), None);
    }
}
