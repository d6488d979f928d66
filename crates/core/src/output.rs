//! Output file naming

use crate::config::FilterConfig;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Placeholder used in file names for an unset threshold
pub const UNSET: &str = "None";

/// Path of the filtered dataset for `coco_file` under `config`.
///
/// The file lands next to the input and its name records the thresholds:
/// `coco_vp_<vpt>_std_<st>_area_<at>.json`.
pub fn output_path(coco_file: &Path, config: &FilterConfig) -> PathBuf {
    let parent = coco_file.parent().unwrap_or_else(|| Path::new(""));
    parent.join(output_file_name(config))
}

/// File name component of [`output_path`]
pub fn output_file_name(config: &FilterConfig) -> String {
    format!(
        "coco_vp_{}_std_{}_area_{}.json",
        format_float(config.visible_percentage_threshold),
        format_float(config.std_threshold),
        format_value(config.area_threshold),
    )
}

fn format_float(value: Option<f64>) -> String {
    match value {
        Some(v) => float_repr(v),
        None => UNSET.to_string(),
    }
}

/// Shortest round-trip rendering of `v` in the style of Python's `repr`.
///
/// Fixed notation for decimal exponents in `-4..16`, always with a
/// fractional part (`50.0`, `0.0001`); scientific notation otherwise, with a
/// signed exponent of at least two digits (`1e+16`, `1.5e-05`).
pub fn float_repr(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-5`
    let sci = format!("{:e}", v);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let fixed = v.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{}.0", fixed)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

fn format_value<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => UNSET.to_string(),
    }
}
