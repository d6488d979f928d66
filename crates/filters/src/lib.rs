//! Annotation filters for COCO datasets
//!
//! This crate provides the polygon area computation and the filter
//! stages used to clean annotation sets: visibility, per-class area
//! outliers and minimum area.

pub mod area_filter;
pub mod error;
pub mod filter;
pub mod outlier_filter;
pub mod polygon;
pub mod stats;
pub mod visibility_filter;

pub use area_filter::AreaFilter;
pub use error::{Error, Result};
pub use filter::AnnotationFilter;
pub use outlier_filter::StdOutlierFilter;
pub use polygon::{polygon_area, ring_area};
pub use stats::{class_statistics, ClassStats};
pub use visibility_filter::VisibilityFilter;
