//! Column-level helpers over string-typed frames.

use catalog_ingest::optional_string_column;
use polars::prelude::{DataFrame, DataType, IdxCa, IdxSize, NamedFrom, Series};

use crate::error::Result;

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Reads a column as optional strings, coercing other dtypes to text.
pub fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    Ok(optional_string_column(df, name)?)
}

/// Reads a column, or all nulls when the column is absent.
pub fn string_column_or_null(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    if has_column(df, name) {
        string_column(df, name)
    } else {
        Ok(vec![None; df.height()])
    }
}

/// Adds or replaces a string column.
pub fn set_string_column(df: &mut DataFrame, name: &str, values: Vec<Option<String>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Appends an all-null string column for every name the frame lacks.
pub fn ensure_columns(df: &mut DataFrame, names: &[&str]) -> Result<()> {
    for name in names {
        if !has_column(df, name) {
            let series = Series::full_null((*name).into(), df.height(), &DataType::String);
            df.with_column(series)?;
        }
    }
    Ok(())
}

/// Reorders rows so that output row `i` is input row `order[i]`.
pub fn reorder_rows(df: &DataFrame, order: &[usize]) -> Result<DataFrame> {
    let indices: Vec<IdxSize> = order.iter().map(|&idx| idx as IdxSize).collect();
    let indices = IdxCa::from_vec("order".into(), indices);
    Ok(df.take(&indices)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::IntoColumn;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("ItemName".into(), vec!["A/1", "B/2", "C/3"]).into_column(),
            Series::new("ItemCode".into(), vec![312345i64, 804001, 5]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn numeric_columns_read_as_text() {
        let df = frame();
        let codes = string_column(&df, "ItemCode").unwrap();
        assert_eq!(codes[0].as_deref(), Some("312345"));
    }

    #[test]
    fn ensure_columns_adds_nulls_once() {
        let mut df = frame();
        ensure_columns(&mut df, &["U_Estilo", "ItemName"]).unwrap();
        assert_eq!(df.width(), 3);
        assert_eq!(df.column("U_Estilo").unwrap().null_count(), 3);
    }

    #[test]
    fn reorder_rows_follows_order() {
        let df = frame();
        let reordered = reorder_rows(&df, &[2, 0, 1]).unwrap();
        let names = string_column(&reordered, "ItemName").unwrap();
        assert_eq!(
            names,
            vec![Some("C/3".to_string()), Some("A/1".to_string()), Some("B/2".to_string())]
        );
    }

    #[test]
    fn absent_column_reads_as_nulls() {
        let df = frame();
        assert_eq!(string_column_or_null(&df, "U_Zone").unwrap(), vec![None, None, None]);
    }
}
