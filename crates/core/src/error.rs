//! Error types for the filtering pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Pipeline errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("File {} does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error(transparent)]
    Format(#[from] cocofilter_formats::Error),

    #[error(transparent)]
    Filter(#[from] cocofilter_filters::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
