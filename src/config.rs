//! Timing configuration for dialog playback
//!
//! All durations are in seconds. Missing fields take their defaults, so a
//! host can override only what it needs:
//!
//! ```json
//! { "dwell_duration": 2.0, "pause_after_last_line": true }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a [`DialogConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidDuration { field: &'static str, value: f32 },
}

impl ConfigError {
    pub fn invalid_duration(field: &'static str, value: f32) -> Self {
        Self::InvalidDuration { field, value }
    }
}

/// Timing options recognized by the sequencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Bubble scale-in time
    pub show_duration: f32,
    /// Delay between two revealed graphemes
    pub reveal_tick_delay: f32,
    /// Delay before the first grapheme
    pub reveal_lead_in: f32,
    /// How long a fully revealed line stays on screen
    pub dwell_duration: f32,
    /// Bubble scale-out time
    pub hide_duration: f32,
    /// Gap between two lines
    pub inter_line_pause: f32,
    /// Also wait `inter_line_pause` after the last line before completing
    pub pause_after_last_line: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            show_duration: 0.3,
            reveal_tick_delay: 0.1,
            reveal_lead_in: 0.1,
            dwell_duration: 1.5,
            hide_duration: 0.2,
            inter_line_pause: 0.8,
            pause_after_last_line: false,
        }
    }
}

impl DialogConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject negative or non-finite durations
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.durations() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid_duration(field, value));
            }
        }
        Ok(())
    }

    /// Copy with every duration multiplied by `factor`
    ///
    /// Handy for fast-forward playback or tests; a non-positive or
    /// non-finite factor leaves the config unchanged.
    pub fn scaled(&self, factor: f32) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self.clone();
        }
        Self {
            show_duration: self.show_duration * factor,
            reveal_tick_delay: self.reveal_tick_delay * factor,
            reveal_lead_in: self.reveal_lead_in * factor,
            dwell_duration: self.dwell_duration * factor,
            hide_duration: self.hide_duration * factor,
            inter_line_pause: self.inter_line_pause * factor,
            pause_after_last_line: self.pause_after_last_line,
        }
    }

    fn durations(&self) -> [(&'static str, f32); 6] {
        [
            ("show_duration", self.show_duration),
            ("reveal_tick_delay", self.reveal_tick_delay),
            ("reveal_lead_in", self.reveal_lead_in),
            ("dwell_duration", self.dwell_duration),
            ("hide_duration", self.hide_duration),
            ("inter_line_pause", self.inter_line_pause),
        ]
    }
}
