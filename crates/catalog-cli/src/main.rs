//! `catalog-clean` binary.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use catalog_cli::logging::{LogConfig, init_logging};
use catalog_cli::summary::print_summary;
use clap::{ColorChoice, Parser};

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_brands, run_clean, run_inspect};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Command::Clean(args) => run_clean(args).map(|run| {
            print_summary(&run);
            !run.has_errors()
        }),
        Command::Brands => run_brands().map(|()| true),
        Command::Inspect(args) => run_inspect(args).map(|()| true),
    };
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), Into::into);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !explicit,
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}
