use std::path::PathBuf;

use catalog_core::{CleanOutcome, EnrichmentSummary};
use catalog_ingest::TableProfile;
use catalog_model::{Brand, Diagnostic};
use serde::Serialize;

/// Everything a finished `clean` run produced.
#[derive(Debug)]
pub struct CleanRun {
    pub brand: Brand,
    pub input: PathBuf,
    pub reference_collections: usize,
    pub outcome: CleanOutcome,
    /// Profile of the cleaned table.
    pub profile: TableProfile,
    /// Written CSV; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

impl CleanRun {
    pub fn has_errors(&self) -> bool {
        self.outcome.has_errors()
    }
}

/// JSON document written by `--report`.
#[derive(Debug, Serialize)]
pub struct CleanReport {
    pub brand: Brand,
    pub brand_name: &'static str,
    /// Input file name, without its directory.
    pub input: String,
    pub output: Option<String>,
    pub reference: Option<String>,
    pub rows: usize,
    pub columns: usize,
    pub filled_cells: usize,
    pub null_cells: usize,
    pub enrichment: EnrichmentSummary,
    pub diagnostics: Vec<Diagnostic>,
}

impl CleanReport {
    pub fn from_run(run: &CleanRun) -> Self {
        let file_name = |path: &PathBuf| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        };
        Self {
            brand: run.brand,
            brand_name: run.brand.display_name(),
            input: file_name(&run.input),
            output: run.output.as_ref().map(|path| path.display().to_string()),
            reference: run.outcome.reference.clone(),
            rows: run.profile.rows,
            columns: run.profile.columns,
            filled_cells: run.profile.filled_cells,
            null_cells: run.profile.null_cells,
            enrichment: run.outcome.enrichment,
            diagnostics: run.outcome.diagnostics.clone(),
        }
    }
}
