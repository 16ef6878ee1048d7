use anyhow::{Context, Result};
use catalog_ingest::{profile_table, read_table};
use tracing::info;

use catalog_cli::config::{CleanSettings, FileConfig, SettingOverrides, load_config};
use catalog_cli::pipeline::{CleanRequest, run_clean as run_clean_request};
use catalog_cli::summary::{brands_table, print_profile};
use catalog_cli::types::CleanRun;

use crate::cli::{CleanArgs, InspectArgs};

pub fn run_clean(args: &CleanArgs) -> Result<CleanRun> {
    let file = match &args.config {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };
    let overrides = SettingOverrides {
        references: args.references.clone(),
        reference_limit: args.reference_limit,
        output_dir: args.output_dir.clone(),
        delimiter: args.delimiter,
        restore_row_order: args.no_restore_row_order.then_some(false),
    };
    let settings = CleanSettings::resolve(file, overrides)?;
    let request = CleanRequest {
        input: args.input.clone(),
        brand: args.brand.clone(),
        settings,
        output: args.output.clone(),
        report: args.report.clone(),
        dry_run: args.dry_run,
    };
    run_clean_request(&request)
}

pub fn run_brands() -> Result<()> {
    println!("{}", brands_table());
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let df = read_table(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    let profile = profile_table(&df);
    info!(
        rows = profile.rows,
        columns = profile.columns,
        "profiled {}",
        args.input.display()
    );
    println!("File: {}", args.input.display());
    print_profile(&profile);
    Ok(())
}
