//! Common interface for annotation filter stages

use crate::Result;
use cocofilter_formats::Annotation;

/// A selection over an annotation sequence.
///
/// Implementations must keep the relative order of the annotations they
/// retain and must not modify them.
pub trait AnnotationFilter {
    /// Short stage name used in logs and reports
    fn name(&self) -> &'static str;

    /// Consume the working set and return the annotations that pass
    fn apply(&self, annotations: Vec<Annotation>) -> Result<Vec<Annotation>>;
}

/// Keep annotations for which `keep` returns true, stopping at the first error
pub(crate) fn retain_ok<F>(annotations: Vec<Annotation>, mut keep: F) -> Result<Vec<Annotation>>
where
    F: FnMut(&Annotation) -> Result<bool>,
{
    let mut kept = Vec::with_capacity(annotations.len());
    for ann in annotations {
        if keep(&ann)? {
            kept.push(ann);
        }
    }
    Ok(kept)
}
