//! Per-class statistical outlier filtering
//!
//! Statistics come from the polygon area recomputed from each mask, while
//! the comparison uses the `area` value stored on the annotation. The two
//! can disagree on real data (for example when the stored area was computed
//! from a pixel mask, or when the mask has several rings).

use crate::filter::{retain_ok, AnnotationFilter};
use crate::stats::class_statistics;
use crate::Result;
use cocofilter_formats::Annotation;
use tracing::{debug, warn};

/// Drops annotations whose area lies more than `multiplier` standard
/// deviations below their category's mean
#[derive(Debug, Clone, Copy)]
pub struct StdOutlierFilter {
    pub multiplier: f64,
}

impl StdOutlierFilter {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }
}

impl AnnotationFilter for StdOutlierFilter {
    fn name(&self) -> &'static str {
        "std-outlier"
    }

    fn apply(&self, annotations: Vec<Annotation>) -> Result<Vec<Annotation>> {
        if self.multiplier < 0.0 {
            warn!(
                "Negative std multiplier {} raises the bound above the class mean",
                self.multiplier
            );
        }

        let stats = class_statistics(&annotations)?;
        for (category, s) in &stats {
            debug!(
                "Category {}: n={} mean={:.2} std={:.2}",
                category, s.count, s.mean_area, s.std_area
            );
        }

        retain_ok(annotations, |ann| {
            let category = ann.category_id()?;
            // Every category in the working set has an entry
            let class = &stats[&category];

            // A lone annotation is its own mean and cannot be an outlier
            if class.count == 1 {
                return Ok(true);
            }

            let bound = class.lower_bound(self.multiplier);
            let keep = ann.area()? > bound;
            if !keep {
                debug!(
                    "Annotation #{} removed: area <= {:.2} (category {})",
                    ann.index, bound, category
                );
            }
            Ok(keep)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square(index: usize, category: i64, side: f64) -> Annotation {
        Annotation::new(
            json!({
                "id": index,
                "category_id": category,
                "area": side * side,
                "segmentation": [[0.0, 0.0, side, 0.0, side, side, 0.0, side]]
            }),
            index,
        )
    }

    fn ids(annotations: &[Annotation]) -> Vec<usize> {
        annotations.iter().map(|a| a.index).collect()
    }

    #[test]
    fn test_removes_small_outlier() {
        // areas 1, 100, 100, 100, 100: mean 80.2, std 39.6
        let input = vec![
            square(0, 1, 10.0),
            square(1, 1, 1.0),
            square(2, 1, 10.0),
            square(3, 1, 10.0),
            square(4, 1, 10.0),
        ];

        let kept = StdOutlierFilter::new(1.0).apply(input).unwrap();
        assert_eq!(ids(&kept), vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_single_annotation_class_always_kept() {
        for multiplier in [0.0, 0.5, 1.0, 3.0, 100.0] {
            let input = vec![square(0, 7, 3.0)];
            let kept = StdOutlierFilter::new(multiplier).apply(input).unwrap();
            assert_eq!(kept.len(), 1, "multiplier {}", multiplier);
        }
    }

    #[test]
    fn test_statistics_are_per_class() {
        // Category 2 has large objects only; the small category-1 objects
        // must not be judged against them
        let input = vec![
            square(0, 1, 2.0),
            square(1, 2, 50.0),
            square(2, 1, 2.0),
            square(3, 2, 49.0),
            square(4, 1, 3.0),
        ];

        let kept = StdOutlierFilter::new(2.0).apply(input).unwrap();
        assert_eq!(ids(&kept), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_compares_stored_area() {
        // Both masks are unit squares, so mean 1 and std 0; only the
        // stored area decides
        let input = vec![
            Annotation::new(
                json!({"category_id": 1, "area": 5.0, "segmentation": [[0, 0, 1, 0, 1, 1, 0, 1]]}),
                0,
            ),
            Annotation::new(
                json!({"category_id": 1, "area": 0.5, "segmentation": [[0, 0, 1, 0, 1, 1, 0, 1]]}),
                1,
            ),
        ];

        let kept = StdOutlierFilter::new(1.0).apply(input).unwrap();
        assert_eq!(ids(&kept), vec![0]);
    }

    #[test]
    fn test_categories_beyond_i64_not_merged() {
        // Each id is its own single-member class and must survive
        let input = vec![
            Annotation::new(
                json!({"category_id": u64::MAX, "area": 4.0,
                       "segmentation": [[0, 0, 2, 0, 2, 2, 0, 2]]}),
                0,
            ),
            Annotation::new(
                json!({"category_id": i64::MAX, "area": 4.0,
                       "segmentation": [[0, 0, 2, 0, 2, 2, 0, 2]]}),
                1,
            ),
        ];

        let kept = StdOutlierFilter::new(1.0).apply(input).unwrap();
        assert_eq!(ids(&kept), vec![0, 1]);
    }

    #[test]
    fn test_empty_input() {
        let kept = StdOutlierFilter::new(1.0).apply(Vec::new()).unwrap();
        assert!(kept.is_empty());
    }
}
