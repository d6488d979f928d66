//! Sequential annotation filtering pipeline
//!
//! Runs visibility, std-outlier and area filtering in that fixed order.
//! Each stage sees only what the previous stage kept, so per-class
//! statistics are computed on the visibility-filtered set.

use crate::config::FilterConfig;
use crate::Result;
use cocofilter_filters::{AnnotationFilter, AreaFilter, StdOutlierFilter, VisibilityFilter};
use cocofilter_formats::Annotation;
use serde::Serialize;
use tracing::info;

/// Removal counts for one stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageStats {
    pub stage: &'static str,
    pub input: usize,
    pub removed: usize,
}

/// Pipeline statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineStats {
    pub total_annotations: usize,
    pub kept_annotations: usize,
    pub stages: Vec<StageStats>,
}

impl PipelineStats {
    pub fn removed_annotations(&self) -> usize {
        self.total_annotations - self.kept_annotations
    }

    /// Removed count for a stage, 0 if it did not run
    pub fn removed_by(&self, stage: &str) -> usize {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.removed)
            .unwrap_or(0)
    }

    pub fn removal_rate(&self) -> f64 {
        if self.total_annotations > 0 {
            (self.removed_annotations() as f64 / self.total_annotations as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn retention_rate(&self) -> f64 {
        if self.total_annotations > 0 {
            (self.kept_annotations as f64 / self.total_annotations as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Annotation filtering pipeline
pub struct FilterPipeline {
    stages: Vec<Box<dyn AnnotationFilter>>,
}

impl FilterPipeline {
    /// Build the stage list for `config`; unset thresholds contribute no stage
    pub fn new(config: &FilterConfig) -> Self {
        let mut stages: Vec<Box<dyn AnnotationFilter>> = Vec::new();

        if let Some(threshold) = config.visible_percentage_threshold {
            stages.push(Box::new(VisibilityFilter::new(threshold)));
        }
        if let Some(multiplier) = config.std_threshold {
            stages.push(Box::new(StdOutlierFilter::new(multiplier)));
        }
        if let Some(threshold) = config.area_threshold {
            stages.push(Box::new(AreaFilter::new(threshold as f64)));
        }

        Self { stages }
    }

    /// Names of the stages that will run, in order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every configured stage over `annotations`
    pub fn run(&self, annotations: Vec<Annotation>) -> Result<(Vec<Annotation>, PipelineStats)> {
        let mut stats = PipelineStats {
            total_annotations: annotations.len(),
            ..Default::default()
        };

        let mut working = annotations;
        for stage in &self.stages {
            let input = working.len();
            working = stage.apply(working)?;
            let removed = input - working.len();

            info!(
                "Stage {}: removed {} of {} annotations",
                stage.name(),
                removed,
                input
            );
            stats.stages.push(StageStats {
                stage: stage.name(),
                input,
                removed,
            });
        }

        stats.kept_annotations = working.len();
        Ok((working, stats))
    }
}
