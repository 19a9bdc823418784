//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the stock behavior. Hosts typically embed the config inside a page
//! level JSON island and hand the parsed value to [`crate::engine::RevealCore`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COUNTER_DURATION_MS, DEFAULT_COUNTER_STEP_MS, DEFAULT_EASING, DEFAULT_MORPH_INTERVAL_MS,
    DEFAULT_PROGRESS_DURATION_MS, DEFAULT_PROGRESS_PRE_DELAY_MS, DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_ROOT_MARGIN,
    DEFAULT_SCROLL_THROTTLE_MS, DEFAULT_SECTION_ROOT_MARGIN, DEFAULT_SECTION_THRESHOLD, DEFAULT_STAGGER_DELAY_MS,
    DEFAULT_THRESHOLD,
};

/// Error returned by [`RevealConfig::from_json`] and [`RevealConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The raw text is not valid JSON for this shape.
    #[error("failed to parse reveal config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric field is outside its accepted range.
    #[error("reveal config field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    /// Visibility ratio for animation markers.
    pub threshold: f64,
    /// Root margin for animation markers; negative bottom fires before the fold.
    pub root_margin: String,
    /// Visibility ratio for section reveals.
    pub section_threshold: f64,
    pub section_root_margin: String,
    /// Timing function used for progress bar transitions.
    pub easing: String,
    pub stagger_delay_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_step_ms: u32,
    pub progress_duration_ms: u32,
    /// Wait between setting the transition and setting the width.
    pub progress_pre_delay_ms: u32,
    pub scroll_throttle_ms: u32,
    pub resize_debounce_ms: u32,
    pub morph_interval_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_owned(),
            section_threshold: DEFAULT_SECTION_THRESHOLD,
            section_root_margin: DEFAULT_SECTION_ROOT_MARGIN.to_owned(),
            easing: DEFAULT_EASING.to_owned(),
            stagger_delay_ms: DEFAULT_STAGGER_DELAY_MS,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            counter_step_ms: DEFAULT_COUNTER_STEP_MS,
            progress_duration_ms: DEFAULT_PROGRESS_DURATION_MS,
            progress_pre_delay_ms: DEFAULT_PROGRESS_PRE_DELAY_MS,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            morph_interval_ms: DEFAULT_MORPH_INTERVAL_MS,
        }
    }
}

impl RevealConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("threshold", self.threshold)?;
        check_ratio("sectionThreshold", self.section_threshold)?;
        check_positive("counterStepMs", self.counter_step_ms)?;
        check_positive("scrollThrottleMs", self.scroll_throttle_ms)?;
        check_positive("morphIntervalMs", self.morph_interval_ms)?;
        Ok(())
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

fn check_positive(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::OutOfRange { field, value: 0.0 })
    } else {
        Ok(())
    }
}
