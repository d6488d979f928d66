//! Per-class area statistics

use crate::polygon::polygon_area;
use crate::Result;
use cocofilter_formats::{Annotation, CategoryId};
use std::collections::BTreeMap;

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`)
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Polygon-area statistics for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStats {
    pub count: usize,
    pub mean_area: f64,
    pub std_area: f64,
}

impl ClassStats {
    pub fn from_areas(areas: &[f64]) -> Self {
        Self {
            count: areas.len(),
            mean_area: mean(areas),
            std_area: population_std_dev(areas),
        }
    }

    /// Lower bound an annotation's area must exceed to not be an outlier
    pub fn lower_bound(&self, multiplier: f64) -> f64 {
        self.mean_area - self.std_area * multiplier
    }
}

/// Group annotations by category and compute polygon-area statistics.
///
/// Areas are recomputed from the segmentation, not read from the stored
/// `area` field.
pub fn class_statistics(
    annotations: &[Annotation],
) -> Result<BTreeMap<CategoryId, ClassStats>> {
    let mut areas_per_class: BTreeMap<CategoryId, Vec<f64>> = BTreeMap::new();

    for ann in annotations {
        let area = polygon_area(&ann.segmentation()?)?;
        areas_per_class
            .entry(ann.category_id()?)
            .or_default()
            .push(area);
    }

    Ok(areas_per_class
        .into_iter()
        .map(|(category, areas)| (category, ClassStats::from_areas(&areas)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square(category: i64, side: f64, index: usize) -> Annotation {
        Annotation::new(
            json!({
                "category_id": category,
                "area": side * side,
                "segmentation": [[0.0, 0.0, side, 0.0, side, side, 0.0, side]]
            }),
            index,
        )
    }

    #[test]
    fn test_mean_and_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(population_std_dev(&values), 2.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_single_value_has_zero_std() {
        let stats = ClassStats::from_areas(&[42.0]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean_area, 42.0);
        assert_eq!(stats.std_area, 0.0);
        assert_eq!(stats.lower_bound(3.0), 42.0);
    }

    #[test]
    fn test_class_statistics_groups_by_category() {
        let annotations = vec![
            square(1, 2.0, 0),
            square(2, 10.0, 1),
            square(1, 4.0, 2),
        ];

        let stats = class_statistics(&annotations).unwrap();
        assert_eq!(stats.len(), 2);

        let cans = stats[&1];
        assert_eq!(cans.count, 2);
        assert_eq!(cans.mean_area, 10.0);
        assert_eq!(cans.std_area, 6.0);

        let boxes = stats[&2];
        assert_eq!(boxes.count, 1);
        assert_eq!(boxes.mean_area, 100.0);
    }

    #[test]
    fn test_class_statistics_uses_polygon_area() {
        let ann = Annotation::new(
            json!({
                "category_id": 1,
                "area": 999.0,
                "segmentation": [[0, 0, 1, 0, 1, 1, 0, 1]]
            }),
            0,
        );
        let stats = class_statistics(&[ann]).unwrap();
        assert_eq!(stats[&1].mean_area, 1.0);
    }
}
