//! Input table loading by file extension.

use std::path::Path;

use polars::prelude::DataFrame;

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::excel::read_excel_table;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Excel,
}

impl SourceFormat {
    /// Classifies a path by extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xls" => Ok(Self::Excel),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Reads an uploaded catalog file into a string-typed DataFrame.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    let format = SourceFormat::from_path(path)?;
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    match format {
        SourceFormat::Csv => read_csv_table(path),
        SourceFormat::Excel => read_excel_table(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_extension() {
        assert_eq!(SourceFormat::from_path(Path::new("a.CSV")).unwrap(), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_path(Path::new("a.xls")).unwrap(), SourceFormat::Excel);
        assert_eq!(SourceFormat::from_path(Path::new("a.xlsx")).unwrap(), SourceFormat::Excel);
        assert!(SourceFormat::from_path(Path::new("a.txt")).is_err());
        assert!(SourceFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_table(Path::new("/nonexistent/l1ch.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
