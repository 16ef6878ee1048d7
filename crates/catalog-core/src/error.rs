//! Errors that abort a clean invocation.

use catalog_model::BrandError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    /// Brand code outside the supported set.
    #[error("unsupported brand: {code}")]
    UnsupportedBrand { code: String },

    /// Mandatory input columns are absent.
    #[error("missing columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// A polars operation failed.
    #[error("frame operation failed: {message}")]
    Frame { message: String },
}

impl From<polars::prelude::PolarsError> for CleanError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame {
            message: err.to_string(),
        }
    }
}

impl From<BrandError> for CleanError {
    fn from(err: BrandError) -> Self {
        match err {
            BrandError::Unsupported { code } => Self::UnsupportedBrand { code },
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
