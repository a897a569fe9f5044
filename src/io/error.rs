use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// IO-level errors for CSV catalog parsing and result output
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV async parsing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
