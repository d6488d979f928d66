//! Filter thresholds

use serde::{Deserialize, Serialize};

/// Thresholds for the three filter stages; `None` skips the stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Keep annotations with visible percentage strictly above this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_percentage_threshold: Option<f64>,
    /// Keep annotations whose area exceeds `mean - std_threshold * std` of their class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_threshold: Option<f64>,
    /// Keep annotations with polygon area strictly above this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_threshold: Option<i64>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visible_percentage_threshold(mut self, threshold: f64) -> Self {
        self.visible_percentage_threshold = Some(threshold);
        self
    }

    pub fn with_std_threshold(mut self, multiplier: f64) -> Self {
        self.std_threshold = Some(multiplier);
        self
    }

    pub fn with_area_threshold(mut self, threshold: i64) -> Self {
        self.area_threshold = Some(threshold);
        self
    }

    /// Fill unset thresholds from `other`
    pub fn or(self, other: FilterConfig) -> Self {
        Self {
            visible_percentage_threshold: self
                .visible_percentage_threshold
                .or(other.visible_percentage_threshold),
            std_threshold: self.std_threshold.or(other.std_threshold),
            area_threshold: self.area_threshold.or(other.area_threshold),
        }
    }

    /// True when no stage would run
    pub fn is_empty(&self) -> bool {
        self.visible_percentage_threshold.is_none()
            && self.std_threshold.is_none()
            && self.area_threshold.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = FilterConfig::new()
            .with_visible_percentage_threshold(40.0)
            .with_area_threshold(20);

        assert_eq!(config.visible_percentage_threshold, Some(40.0));
        assert_eq!(config.std_threshold, None);
        assert_eq!(config.area_threshold, Some(20));
        assert!(!config.is_empty());
        assert!(FilterConfig::default().is_empty());
    }

    #[test]
    fn test_or_prefers_self() {
        let flags = FilterConfig::new().with_std_threshold(2.0);
        let file = FilterConfig::new()
            .with_std_threshold(1.0)
            .with_area_threshold(50);

        let merged = flags.or(file);
        assert_eq!(merged.std_threshold, Some(2.0));
        assert_eq!(merged.area_threshold, Some(50));
        assert_eq!(merged.visible_percentage_threshold, None);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: FilterConfig = serde_json::from_str(r#"{"area_threshold": 30}"#).unwrap();
        assert_eq!(config, FilterConfig::new().with_area_threshold(30));
    }
}
