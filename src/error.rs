use thiserror::Error;

pub type DatumResult<T> = Result<T, DatumError>;

#[derive(Debug, Error)]
pub enum DatumError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unsupported datum snapshot schema version: {0}")]
    UnsupportedSchema(u32),

    #[error("json serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("i/o failure while writing datum dump: {0}")]
    Io(#[from] std::io::Error),
}
