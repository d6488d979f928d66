//! Threshold file support
//!
//! A YAML or TOML file may hold any subset of the three thresholds:
//!
//! ```yaml
//! visible_percentage_threshold: 40.0
//! std_threshold: 1.5
//! area_threshold: 100
//! ```

use anyhow::{Context, Result};
use cocofilter_core::FilterConfig;
use std::path::Path;

/// Load filter thresholds from a YAML or TOML file
pub fn load_filter_config(path: &Path) -> Result<FilterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read filter config: {}", path.display()))?;

    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    match extension {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML filter config: {}", path.display())),
        "toml" => toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML filter config: {}", path.display())),
        _ => Err(anyhow::anyhow!(
            "Unsupported config file format: {}. Use .yaml, .yml, or .toml",
            extension
        )),
    }
}
