//! Visible-percentage filtering

use crate::filter::{retain_ok, AnnotationFilter};
use crate::Result;
use cocofilter_formats::Annotation;
use tracing::debug;

/// Drops annotations whose visible percentage is at or below the threshold
#[derive(Debug, Clone, Copy)]
pub struct VisibilityFilter {
    pub threshold: f64,
}

impl VisibilityFilter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Check if a single annotation passes
    pub fn passes(&self, ann: &Annotation) -> Result<bool> {
        Ok(ann.visible_percentage()? > self.threshold)
    }
}

impl AnnotationFilter for VisibilityFilter {
    fn name(&self) -> &'static str {
        "visibility"
    }

    fn apply(&self, annotations: Vec<Annotation>) -> Result<Vec<Annotation>> {
        retain_ok(annotations, |ann| {
            let keep = self.passes(ann)?;
            if !keep {
                debug!(
                    "Annotation #{} removed: visible percentage <= {}",
                    ann.index, self.threshold
                );
            }
            Ok(keep)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    fn ann(index: usize, visible: f64) -> Annotation {
        Annotation::new(json!({"id": index, "visible_percentage": visible}), index)
    }

    #[test]
    fn test_strict_inequality() {
        let filter = VisibilityFilter::new(50.0);
        assert!(!filter.passes(&ann(0, 50.0)).unwrap());
        assert!(filter.passes(&ann(1, 51.0)).unwrap());
        assert!(!filter.passes(&ann(2, 10.0)).unwrap());
    }

    #[test]
    fn test_apply_keeps_order() {
        let filter = VisibilityFilter::new(30.0);
        let input = vec![ann(0, 90.0), ann(1, 20.0), ann(2, 31.0), ann(3, 30.0), ann(4, 100.0)];

        let kept = filter.apply(input).unwrap();
        let ids: Vec<_> = kept.iter().map(|a| a.index).collect();
        assert_eq!(ids, vec![0, 2, 4]);
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let filter = VisibilityFilter::new(30.0);
        let input = vec![ann(0, 90.0), Annotation::new(json!({"id": 1}), 1)];
        assert!(matches!(filter.apply(input), Err(Error::Format(_))));
    }
}
