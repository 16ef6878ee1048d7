use catalog_model::columns::ITEM_NAME;
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::frame::string_column;

pub(super) use crate::frame::{set_string_column, string_column_or_null};
pub(super) use crate::parse::{ParsedName, parse_slash_layout};

/// Parses every `ItemName` with `parse`.
pub(super) fn parse_names<F>(df: &DataFrame, parse: F) -> Result<Vec<ParsedName>>
where
    F: Fn(Option<&str>) -> ParsedName,
{
    Ok(string_column(df, ITEM_NAME)?
        .iter()
        .map(|name| parse(name.as_deref()))
        .collect())
}

/// Pulls one field out of every parsed name.
pub(super) fn project_field<F>(parsed: &[ParsedName], field: F) -> Vec<Option<String>>
where
    F: Fn(&ParsedName) -> Option<String>,
{
    parsed.iter().map(field).collect()
}

/// Wraps labels so the empty default stays an empty string, not a null.
pub(super) fn labels(values: impl IntoIterator<Item = &'static str>) -> Vec<Option<String>> {
    values.into_iter().map(|v| Some(v.to_string())).collect()
}
