//! CSV reading and writing.

mod header;
mod reader;
mod writer;

pub use header::normalize_headers;
pub use reader::{
    CsvSource, SourceEncoding, decode_bytes, detect_delimiter, read_csv_bytes, read_csv_table,
};
pub use writer::{DEFAULT_OUTPUT_DELIMITER, to_csv_string, write_csv};
