//! Polars helpers shared by the ingest and cleaning crates.
//!
//! Every table in this workspace is string-typed, but frames handed in by
//! callers may carry numeric or boolean columns. These helpers coerce any
//! cell to text so join keys and derived fields never depend on dtype.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null` and formats floats without a
/// trailing `.0`, so `312345.0` read from a spreadsheet becomes `"312345"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use catalog_ingest::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(804.0)), "804");
/// assert_eq!(any_to_string(AnyValue::String("F100")), "F100");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Like [`any_to_string`] but keeps `Null` distinct from the empty string.
pub fn any_to_optional_string(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Formats a floating-point number as a string without trailing zeros after decimal.
///
/// # Examples
///
/// ```
/// use catalog_ingest::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Reads a column as optional strings, coercing non-string dtypes.
pub fn optional_string_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    if let Ok(chunked) = column.str() {
        return Ok(chunked.iter().map(|v| v.map(str::to_string)).collect());
    }
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_optional_string(
            column.get(idx).unwrap_or(AnyValue::Null),
        ));
    }
    Ok(values)
}

/// Builds a string-typed frame from headers and row-major cells.
///
/// Rows shorter than the header are padded with nulls.
pub fn string_frame(headers: &[String], rows: &[Vec<Option<String>>]) -> PolarsResult<DataFrame> {
    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<Option<String>> = rows
                .iter()
                .map(|row| row.get(idx).cloned().flatten())
                .collect();
            Series::new(name.as_str().into(), values).into_column()
        })
        .collect();
    DataFrame::new(columns)
}

/// Column names in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}
