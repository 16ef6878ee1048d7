//! Excel workbook loading (first worksheet only).

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::csv::normalize_headers;
use crate::error::{IngestError, Result};
use crate::polars_utils::{format_numeric, string_frame};

fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(v) => Some(format_numeric(*v)),
        Data::Int(v) => Some(v.to_string()),
        Data::Bool(v) => Some(v.to_string()),
        other => Some(other.to_string()),
    }
}

/// Reads the first worksheet of an `.xlsx`/`.xls` workbook.
///
/// The first row is the header. Fully empty rows are skipped.
pub fn read_excel_table(path: &Path) -> Result<DataFrame> {
    let excel_error = |message: String| IngestError::Excel {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|e| excel_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| excel_error(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let headers = normalize_headers(
        header_row
            .iter()
            .map(|cell| cell_to_string(cell).unwrap_or_default()),
    );
    let data: Vec<Vec<Option<String>>> = rows
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
        .filter(|row| row.iter().any(Option::is_some))
        .collect();

    let df = string_frame(&headers, &data)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read excel"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_lose_trailing_zero() {
        assert_eq!(cell_to_string(&Data::Float(312345.0)), Some("312345".to_string()));
        assert_eq!(cell_to_string(&Data::Int(804)), Some("804".to_string()));
    }

    #[test]
    fn empty_cells_are_null() {
        assert_eq!(cell_to_string(&Data::Empty), None);
        assert_eq!(cell_to_string(&Data::String(String::new())), None);
    }

    #[test]
    fn missing_workbook_is_an_excel_error() {
        let err = read_excel_table(Path::new("/nonexistent/catalog.xlsx")).unwrap_err();
        assert!(matches!(err, IngestError::Excel { .. }));
    }
}
