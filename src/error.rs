//! Error handling for the talent matcher application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalentMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Data import error: {0}")]
    DataImport(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, TalentMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for TalentMatcherError {
    fn from(err: anyhow::Error) -> Self {
        TalentMatcherError::InvalidInput(err.to_string())
    }
}
