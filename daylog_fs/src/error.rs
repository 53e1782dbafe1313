use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid file name: {0}")]
    InvalidName(String),
    #[error("missing file: {0}")]
    Missing(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
