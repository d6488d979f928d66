//! Minimum polygon-area filtering

use crate::filter::{retain_ok, AnnotationFilter};
use crate::polygon::polygon_area;
use crate::Result;
use cocofilter_formats::Annotation;
use tracing::debug;

/// Drops annotations whose polygon area is at or below the threshold
#[derive(Debug, Clone, Copy)]
pub struct AreaFilter {
    pub threshold: f64,
}

impl AreaFilter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Check if a single annotation passes
    pub fn passes(&self, ann: &Annotation) -> Result<bool> {
        let area = polygon_area(&ann.segmentation()?)?;
        Ok(area > self.threshold)
    }
}

impl AnnotationFilter for AreaFilter {
    fn name(&self) -> &'static str {
        "area"
    }

    fn apply(&self, annotations: Vec<Annotation>) -> Result<Vec<Annotation>> {
        retain_ok(annotations, |ann| {
            let keep = self.passes(ann)?;
            if !keep {
                debug!(
                    "Annotation #{} removed: polygon area <= {}",
                    ann.index, self.threshold
                );
            }
            Ok(keep)
        })
    }
}
