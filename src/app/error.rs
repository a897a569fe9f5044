use std::io;
use thiserror::Error;

use crate::domain::DomainError;
use crate::io::IoError;
use crate::streaming::SourceError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV IO error: {0}")]
    CsvIo(#[from] IoError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
