//! CSV export of cleaned tables.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};
use crate::polars_utils::{column_names, optional_string_column};

/// Delimiter used for cleaned exports.
pub const DEFAULT_OUTPUT_DELIMITER: u8 = b';';

fn write_records<W: Write>(df: &DataFrame, sink: W, delimiter: u8) -> Result<W> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(sink);
    let write_error = |e: csv::Error| IngestError::CsvWrite {
        message: e.to_string(),
    };

    let names = column_names(df);
    writer.write_record(&names).map_err(write_error)?;

    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        columns.push(optional_string_column(df, name)?);
    }
    for idx in 0..df.height() {
        let record = columns
            .iter()
            .map(|values| values[idx].as_deref().unwrap_or(""));
        writer.write_record(record).map_err(write_error)?;
    }
    writer.into_inner().map_err(|e| IngestError::CsvWrite {
        message: e.to_string(),
    })
}

/// Writes a frame as delimited UTF-8 text with a header row.
///
/// Nulls are written as empty fields.
pub fn write_csv(df: &DataFrame, path: &Path, delimiter: u8) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let file = std::fs::File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut file = write_records(df, std::io::BufWriter::new(file), delimiter)?;
    file.flush().map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Renders a frame as delimited text in memory.
pub fn to_csv_string(df: &DataFrame, delimiter: u8) -> Result<String> {
    let bytes = write_records(df, Vec::new(), delimiter)?;
    String::from_utf8(bytes).map_err(|e| IngestError::CsvWrite {
        message: e.to_string(),
    })
}
