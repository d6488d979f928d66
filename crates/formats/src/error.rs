//! Error types for COCO dataset loading

use thiserror::Error;

/// Dataset format errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid file: {0}")]
    InvalidFile(String),

    #[error("Annotation #{index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Annotation #{index} has invalid field '{field}': {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

/// Result type alias for format operations
pub type Result<T> = std::result::Result<T, Error>;
