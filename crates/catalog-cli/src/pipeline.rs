//! Stages of a `clean` run: read, load references, clean, write.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use catalog_core::{CleanOptions, Cleaner};
use catalog_ingest::{
    ReferenceSet, detect_brand_from_filename, load_reference_dir, profile_table, read_table,
    write_csv,
};
use catalog_model::Brand;
use chrono::{Local, NaiveDateTime};
use tracing::{info, info_span, warn};

use crate::config::CleanSettings;
use crate::types::{CleanReport, CleanRun};

/// Inputs of one `clean` run after config and flags are merged.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    /// Brand code; detected from the input file name when absent.
    pub brand: Option<String>,
    pub settings: CleanSettings,
    /// Exact output file; wins over `settings.output_dir`.
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub dry_run: bool,
}

impl CleanRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            brand: None,
            settings: CleanSettings::default(),
            output: None,
            report: None,
            dry_run: false,
        }
    }
}

/// Picks the brand from an explicit code or, failing that, the file name.
pub fn resolve_brand(code: Option<&str>, input: &Path) -> Result<Brand> {
    if let Some(code) = code {
        return Ok(Brand::parse_code(code)?);
    }
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let brand = detect_brand_from_filename(&name).ok_or_else(|| {
        anyhow!("cannot detect a brand from file name {name:?}; pass --brand")
    })?;
    info!(brand = %brand, file = %name, "detected brand from file name");
    Ok(brand)
}

/// `<brand>_cleaned_<YYYYmmdd_HHMMSS>.csv`
pub fn output_file_name(brand: Brand, at: NaiveDateTime) -> String {
    format!(
        "{}_cleaned_{}.csv",
        brand.code().to_lowercase(),
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Where the cleaned CSV goes, or `None` on a dry run.
///
/// Without `--output` or an output directory the file lands next to the input.
pub fn output_path(request: &CleanRequest, brand: Brand, at: NaiveDateTime) -> Option<PathBuf> {
    if request.dry_run {
        return None;
    }
    if let Some(path) = &request.output {
        return Some(path.clone());
    }
    let dir = request.settings.output_dir.clone().unwrap_or_else(|| {
        request
            .input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    });
    Some(dir.join(output_file_name(brand, at)))
}

/// Loads the configured reference directory; empty set when none is configured.
pub fn load_references(settings: &CleanSettings) -> Result<ReferenceSet> {
    let Some(dir) = &settings.references else {
        warn!("no reference directory configured; enrichment will be skipped");
        return Ok(ReferenceSet::new());
    };
    load_reference_dir(dir, settings.reference_limit)
        .with_context(|| format!("load references from {}", dir.display()))
}

pub fn run_clean(request: &CleanRequest) -> Result<CleanRun> {
    let brand = resolve_brand(request.brand.as_deref(), &request.input)?;
    let run_span = info_span!("run", brand = %brand, input = %request.input.display());
    let _run_guard = run_span.enter();

    // =========================================================================
    // Stage 1: Ingest - input table and reference collections
    // =========================================================================
    let ingest_start = Instant::now();
    let input = read_table(&request.input)
        .with_context(|| format!("read {}", request.input.display()))?;
    let references = load_references(&request.settings)?;
    info!(
        rows = input.height(),
        columns = input.width(),
        collections = references.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Clean
    // =========================================================================
    let cleaner = Cleaner::for_brand(brand)?.with_options(CleanOptions {
        restore_row_order: request.settings.restore_row_order,
    });
    let outcome = cleaner
        .clean(&input, &references)
        .with_context(|| format!("clean {} catalog", brand.display_name()))?;
    let profile = profile_table(&outcome.data);

    // =========================================================================
    // Stage 3: Output - cleaned CSV and optional JSON report
    // =========================================================================
    let output = output_path(request, brand, Local::now().naive_local());
    if let Some(path) = &output {
        let output_start = Instant::now();
        write_csv(&outcome.data, path, request.settings.delimiter)
            .with_context(|| format!("write {}", path.display()))?;
        info!(
            path = %path.display(),
            rows = outcome.data.height(),
            duration_ms = output_start.elapsed().as_millis(),
            "wrote cleaned table"
        );
    } else {
        info!("dry run: cleaned table not written");
    }

    let run = CleanRun {
        brand,
        input: request.input.clone(),
        reference_collections: references.len(),
        outcome,
        profile,
        output,
        report: request.report.clone(),
    };
    if let Some(path) = &request.report {
        write_report(&run, path)?;
    }
    Ok(run)
}

/// Writes the run's [`CleanReport`] as pretty JSON.
pub fn write_report(run: &CleanRun, path: &Path) -> Result<()> {
    let report = CleanReport::from_run(run);
    let json = serde_json::to_string_pretty(&report).context("serialize report")?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}
