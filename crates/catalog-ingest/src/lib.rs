//! Catalog ingestion: reading uploads and reference collections, writing CSV.

pub mod csv;
pub mod discovery;
pub mod error;
pub mod excel;
pub mod polars_utils;
pub mod profile;
pub mod reference;
pub mod table;

pub use self::csv::{
    CsvSource, DEFAULT_OUTPUT_DELIMITER, SourceEncoding, decode_bytes, detect_delimiter,
    normalize_headers, read_csv_bytes, read_csv_table, to_csv_string, write_csv,
};
pub use discovery::detect_brand_from_filename;
pub use error::{IngestError, Result};
pub use excel::read_excel_table;
pub use polars_utils::{
    any_to_optional_string, any_to_string, column_names, format_numeric, optional_string_column,
    string_frame,
};
pub use profile::{ColumnProfile, TableProfile, profile_table};
pub use reference::{
    ReferenceSet, list_reference_files, load_reference_dir, load_reference_file,
    read_json_collection,
};
pub use table::{SourceFormat, read_table};
