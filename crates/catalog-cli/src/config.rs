//! Run settings: optional TOML file merged with command-line flags.
//!
//! ```toml
//! references = "data/referencias"
//! reference_limit = 5000
//! output_dir = "out"
//! delimiter = ";"
//! restore_row_order = true
//! ```
//!
//! Flags given on the command line win over file values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use catalog_ingest::DEFAULT_OUTPUT_DELIMITER;
use serde::Deserialize;
use tracing::debug;

/// Contents of a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Directory holding reference collections (`*.csv`, `*.json`).
    pub references: Option<PathBuf>,
    /// Maximum rows loaded per reference collection.
    pub reference_limit: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub restore_row_order: Option<bool>,
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse config")
    }
}

/// Reads and parses a config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config = FileConfig::parse(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Values given on the command line; `None` defers to the file.
#[derive(Debug, Clone, Default)]
pub struct SettingOverrides {
    pub references: Option<PathBuf>,
    pub reference_limit: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub restore_row_order: Option<bool>,
}

/// Effective settings for one `clean` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSettings {
    pub references: Option<PathBuf>,
    pub reference_limit: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub delimiter: u8,
    pub restore_row_order: bool,
}

impl Default for CleanSettings {
    fn default() -> Self {
        Self {
            references: None,
            reference_limit: None,
            output_dir: None,
            delimiter: DEFAULT_OUTPUT_DELIMITER,
            restore_row_order: true,
        }
    }
}

impl CleanSettings {
    /// Merges file values and flag overrides, flags first.
    pub fn resolve(file: FileConfig, overrides: SettingOverrides) -> Result<Self> {
        let delimiter = match overrides.delimiter.or(file.delimiter) {
            Some(c) => delimiter_byte(c)?,
            None => DEFAULT_OUTPUT_DELIMITER,
        };
        Ok(Self {
            references: overrides.references.or(file.references),
            reference_limit: overrides.reference_limit.or(file.reference_limit),
            output_dir: overrides.output_dir.or(file.output_dir),
            delimiter,
            restore_row_order: overrides
                .restore_row_order
                .or(file.restore_row_order)
                .unwrap_or(true),
        })
    }
}

fn delimiter_byte(c: char) -> Result<u8> {
    if !c.is_ascii() || c.is_ascii_alphanumeric() || c == '"' || c == '\n' || c == '\r' {
        bail!("unusable delimiter {c:?}: expected a single ASCII separator such as ';' or ','");
    }
    Ok(c as u8)
}
