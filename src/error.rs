//! Error handling for the medical report scanner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Spreadsheet parse error: {0}")]
    SpreadsheetParse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, MedScanError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for MedScanError {
    fn from(err: anyhow::Error) -> Self {
        MedScanError::InvalidInput(err.to_string())
    }
}
