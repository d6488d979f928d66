//! Console summaries

use cocofilter_core::FilterReport;
use cocofilter_filters::ClassStats;
use cocofilter_formats::CategoryId;
use std::collections::BTreeMap;

/// Print a formatted summary of a filtering run
pub fn print_summary_report(report: &FilterReport) {
    let stats = &report.stats;

    println!("\n{}", "═".repeat(60));
    println!("Annotation Filtering Complete");
    println!("{}", "═".repeat(60));
    println!("Input:              {}", report.input.display());

    if report.written {
        println!("Output:             {}", report.output.display());
    } else {
        println!("Output:             (dry run - no output written)");
    }

    println!(
        "Total annotations:  {}",
        format_with_commas(stats.total_annotations)
    );

    for stage in &stats.stages {
        println!(
            "{:<20}{} ({:.1}%)",
            format!("Removed by {}:", stage.stage),
            format_with_commas(stage.removed),
            percent(stage.removed, stats.total_annotations)
        );
    }

    println!(
        "Kept annotations:   {} ({:.1}%)",
        format_with_commas(stats.kept_annotations),
        stats.retention_rate()
    );

    println!("{}", "═".repeat(60));
}

/// Print per-category polygon-area statistics as a table
pub fn print_class_stats(stats: &BTreeMap<CategoryId, ClassStats>) {
    println!("{:>10}  {:>8}  {:>14}  {:>14}", "category", "count", "mean area", "std area");
    println!("{}", "─".repeat(52));
    for (category, s) in stats {
        println!(
            "{:>10}  {:>8}  {:>14.2}  {:>14.2}",
            category,
            format_with_commas(s.count),
            s.mean_area,
            s.std_area
        );
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Format number with thousand separators
fn format_with_commas(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
