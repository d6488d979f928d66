//! COCO annotation filtering
//!
//! Loads a COCO dataset, runs the configured filter stages over its
//! annotations and writes the survivors to a new file next to the input.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use config::FilterConfig;
pub use error::{Error, Result};
pub use output::output_path;
pub use pipeline::{FilterPipeline, PipelineStats, StageStats};

use cocofilter_formats::CocoDataset;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of a filtering run
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// False on a dry run
    pub written: bool,
    pub stats: PipelineStats,
}

/// Filter `coco_file` and write the result, returning the output path
pub fn filter_coco(coco_file: &Path, config: &FilterConfig) -> Result<PathBuf> {
    filter_coco_with_report(coco_file, config, false).map(|report| report.output)
}

/// Filter `coco_file`, writing the result unless `dry_run` is set
pub fn filter_coco_with_report(
    coco_file: &Path,
    config: &FilterConfig,
    dry_run: bool,
) -> Result<FilterReport> {
    if !coco_file.is_file() {
        return Err(Error::MissingInput(coco_file.to_path_buf()));
    }

    let output = output_path(coco_file, config);

    info!("Filtering annotations");
    info!("  Input: {:?}", coco_file);
    info!("  Output: {:?}", output);
    info!("  Config: {:?}", config);

    let mut dataset = CocoDataset::open(coco_file)?;
    let annotations = std::mem::take(&mut dataset.annotations);

    let pipeline = FilterPipeline::new(config);
    let (kept, stats) = pipeline.run(annotations)?;

    info!(
        "Kept {} of {} annotations ({:.1}%)",
        stats.kept_annotations,
        stats.total_annotations,
        stats.retention_rate()
    );

    if !dry_run {
        dataset.with_annotations(kept).write_pretty(&output)?;
    }

    Ok(FilterReport {
        input: coco_file.to_path_buf(),
        output,
        written: !dry_run,
        stats,
    })
}
