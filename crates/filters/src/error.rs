//! Error types for filters

use thiserror::Error;

/// Filter errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Segmentation mask has no polygon rings")]
    EmptyMask,

    #[error("Malformed polygon ring: {0}")]
    MalformedMask(String),

    #[error(transparent)]
    Format(#[from] cocofilter_formats::Error),
}

/// Result type alias for filter operations
pub type Result<T> = std::result::Result<T, Error>;
