#![allow(dead_code)]

use catalog_core::frame::string_column;
use polars::prelude::*;

/// Builds a string frame from `(column, values)` pairs.
pub fn frame(columns: &[(&str, Vec<Option<&str>>)]) -> DataFrame {
    let columns: Vec<Column> = columns
        .iter()
        .map(|(name, values)| Series::new((*name).into(), values.clone()).into_column())
        .collect();
    DataFrame::new(columns).expect("build frame")
}

/// Input table with the three mandatory columns.
pub fn items(names: &[&str], codes: &[&str]) -> DataFrame {
    let empresa = vec![Some("X"); names.len()];
    frame(&[
        ("ItemName", names.iter().map(|n| Some(*n)).collect()),
        ("ItemCode", codes.iter().map(|c| Some(*c)).collect()),
        ("Empresa", empresa),
    ])
}

pub fn values(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    string_column(df, column).expect("column")
}

pub fn some(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some((*v).to_string())).collect()
}

pub fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}
