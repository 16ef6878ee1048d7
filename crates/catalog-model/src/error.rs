use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrandError {
    #[error("unsupported brand code: {code}")]
    Unsupported { code: String },
}

pub type Result<T> = std::result::Result<T, BrandError>;
