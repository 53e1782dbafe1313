use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum LogError {
    #[error("store error: {0}")]
    Store(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid file name: {0}")]
    InvalidName(String),
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("missing file store")]
    MissingStore,
    #[error("missing date source")]
    MissingDates,
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
