//! Result object returned by a clean invocation.

use catalog_model::{Diagnostic, has_errors, warning_count};
use polars::prelude::DataFrame;
use serde::Serialize;

/// Enrichment figures for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentSummary {
    pub total_rows: usize,
    /// Rows that gained at least one value from the reference.
    pub enriched_rows: usize,
    pub filled_cells: usize,
    /// Distinct keys in the reference used by the first merge pass.
    pub reference_keys: usize,
}

impl EnrichmentSummary {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            ..Self::default()
        }
    }
}

/// Cleaned table plus everything the caller should be told about it.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub data: DataFrame,
    pub diagnostics: Vec<Diagnostic>,
    pub enrichment: EnrichmentSummary,
    /// Name of the reference collection used, if any.
    pub reference: Option<String>,
}

impl CleanOutcome {
    pub fn warning_count(&self) -> usize {
        warning_count(&self.diagnostics)
    }

    pub fn has_errors(&self) -> bool {
        has_errors(&self.diagnostics)
    }

    /// Diagnostics with the given code.
    pub fn diagnostics_with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }
}
