//! Mandatory column checks.

use catalog_model::columns::MANDATORY_COLUMNS;
use polars::prelude::DataFrame;

use crate::error::{CleanError, Result};
use crate::frame::has_column;

/// Names from `required` that `df` lacks, in the order given.
pub fn missing_columns(df: &DataFrame, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !has_column(df, name))
        .map(|name| (*name).to_string())
        .collect()
}

/// Fails with [`CleanError::MissingColumns`] unless every mandatory column exists.
pub fn validate_schema(df: &DataFrame) -> Result<()> {
    let missing = missing_columns(df, &MANDATORY_COLUMNS);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CleanError::MissingColumns { missing })
    }
}
