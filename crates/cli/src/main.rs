//! cocofilter CLI
//!
//! Filter annotations from a COCO file by visible percentage, per-class
//! area outliers or absolute polygon area

mod config;
mod report;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use cocofilter_core::{filter_coco_with_report, FilterConfig};
use cocofilter_filters::class_statistics;
use cocofilter_formats::CocoDataset;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "cocofilter")]
#[command(version, about = "Postprocessing tool that filters COCO annotations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output the report in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter annotations from a coco file based on visible area,
    /// standard deviation distance or absolute pixel areas
    Filter {
        /// Path to the coco file, i.e. ~/shelf-detection/coco.json
        #[arg(short, long)]
        coco_file: PathBuf,

        /// Remove all annotations with visible percentage <= threshold
        #[arg(long)]
        visible_percentage_threshold: Option<f64>,

        /// Remove all annotations whose area is more than std-threshold
        /// standard deviations below the mean. Statistics are computed per class
        #[arg(long)]
        std_threshold: Option<f64>,

        /// Remove all annotations with polygon area <= area-threshold
        #[arg(long)]
        area_threshold: Option<i64>,

        /// Threshold file (YAML or TOML); flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show statistics without writing output
        #[arg(long)]
        dry_run: bool,
    },

    /// Show per-class polygon area statistics
    Stats {
        /// Path to the coco file
        #[arg(short, long)]
        coco_file: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(!cli.json)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Filter {
            coco_file,
            visible_percentage_threshold,
            std_threshold,
            area_threshold,
            config,
            dry_run,
        } => {
            ensure_coco_file(&coco_file);
            let flags = FilterConfig {
                visible_percentage_threshold,
                std_threshold,
                area_threshold,
            };
            filter_cmd(&coco_file, flags, config, dry_run, cli.json)?;
        }
        Commands::Stats { coco_file } => {
            ensure_coco_file(&coco_file);
            stats_cmd(&coco_file, cli.json)?;
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

/// Exit with status 1 if `coco_file` is not a regular file
fn ensure_coco_file(coco_file: &Path) {
    if !coco_file.is_file() {
        eprintln!("ERROR: File {} does not exist. Exiting.", coco_file.display());
        std::process::exit(1);
    }
}

fn filter_cmd(
    coco_file: &Path,
    flags: FilterConfig,
    config_path: Option<PathBuf>,
    dry_run: bool,
    json_output: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => flags.or(config::load_filter_config(&path)?),
        None => flags,
    };

    if config.is_empty() {
        info!("No thresholds set; annotations will be copied unchanged");
    }

    let report = filter_coco_with_report(coco_file, &config, dry_run)
        .with_context(|| format!("Failed to filter {}", coco_file.display()))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_summary_report(&report);
        if report.written {
            println!("Filtered coco saved at {}", report.output.display());
        }
    }

    Ok(())
}

fn stats_cmd(coco_file: &Path, json_output: bool) -> Result<()> {
    info!("Computing class statistics for: {:?}", coco_file);

    let dataset = CocoDataset::open(coco_file)
        .with_context(|| format!("Failed to load {}", coco_file.display()))?;
    let stats = class_statistics(&dataset.annotations)?;

    if json_output {
        let classes: Vec<_> = stats
            .iter()
            .map(|(category, s)| {
                serde_json::json!({
                    "category_id": category,
                    "count": s.count,
                    "mean_area": s.mean_area,
                    "std_area": s.std_area,
                })
            })
            .collect();
        let report = serde_json::json!({
            "input": coco_file.to_string_lossy().to_string(),
            "total_annotations": dataset.len(),
            "classes": classes,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_class_stats(&stats);
        println!("Total annotations: {}", dataset.len());
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_flags() {
        let cli = Cli::try_parse_from([
            "cocofilter",
            "filter",
            "-c",
            "data/coco.json",
            "--visible-percentage-threshold",
            "40",
            "--area-threshold",
            "20",
        ])
        .unwrap();

        match cli.command {
            Commands::Filter {
                coco_file,
                visible_percentage_threshold,
                std_threshold,
                area_threshold,
                config,
                dry_run,
            } => {
                assert_eq!(coco_file, PathBuf::from("data/coco.json"));
                assert_eq!(visible_percentage_threshold, Some(40.0));
                assert_eq!(std_threshold, None);
                assert_eq!(area_threshold, Some(20));
                assert!(config.is_none());
                assert!(!dry_run);
            }
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_area_threshold_must_be_integer() {
        let result = Cli::try_parse_from([
            "cocofilter",
            "filter",
            "--coco-file",
            "coco.json",
            "--area-threshold",
            "2.5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_coco_file_required() {
        assert!(Cli::try_parse_from(["cocofilter", "filter"]).is_err());
    }
}
