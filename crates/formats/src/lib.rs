//! COCO dataset reading and writing
//!
//! This crate loads a COCO annotation file fully into memory, exposes
//! its annotations with typed field access, and writes the dataset back
//! with every non-annotation field passed through verbatim.

pub mod annotation;
pub mod dataset;
pub mod error;

pub use annotation::{Annotation, CategoryId};
pub use dataset::CocoDataset;
pub use error::{Error, Result};
