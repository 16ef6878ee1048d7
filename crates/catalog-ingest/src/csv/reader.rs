//! CSV loading with delimiter and encoding detection.
//!
//! Uploaded catalogs come out of spreadsheet tools in two flavours: `;`
//! separated (regional Excel exports) and `,` separated, in either UTF-8 or
//! Latin-1. The reader decodes the bytes first, sniffs the delimiter from the
//! header line, and produces a frame whose columns are all strings.

use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::polars_utils::string_frame;

use super::header::normalize_headers;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Text encoding the bytes were decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceEncoding {
    Utf8,
    /// Latin-1, decoded through its Windows-1252 superset.
    Latin1,
}

/// How a CSV source was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CsvSource {
    pub encoding: SourceEncoding,
    pub delimiter: char,
}

/// Decodes raw bytes as UTF-8, falling back to Latin-1.
pub fn decode_bytes(bytes: &[u8]) -> (String, SourceEncoding) {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(body) {
        Ok(text) => (text.to_string(), SourceEncoding::Utf8),
        Err(_) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(body);
            (text.into_owned(), SourceEncoding::Latin1)
        }
    }
}

/// Picks `;` when the header line contains one, `,` otherwise.
pub fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    if header.contains(';') { b';' } else { b',' }
}

/// Reads a CSV file into a string-typed DataFrame.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::open(path, e))?;
    let (df, source) = read_csv_bytes(&bytes, path)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        delimiter = %source.delimiter,
        encoding = ?source.encoding,
        "read csv"
    );
    Ok(df)
}

/// Reads CSV content that is already in memory (e.g. an uploaded file).
///
/// `path` is only used for error messages.
pub fn read_csv_bytes(bytes: &[u8], path: &Path) -> Result<(DataFrame, CsvSource)> {
    let (text, encoding) = decode_bytes(bytes);
    if text.trim().is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    let delimiter = detect_delimiter(&text);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let headers = normalize_headers(reader.headers().map_err(parse_error)?.iter());
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        let row = record
            .iter()
            .map(|value| {
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    let df = string_frame(&headers, &rows)?;
    Ok((
        df,
        CsvSource {
            encoding,
            delimiter: char::from(delimiter),
        },
    ))
}
