//! Glide configuration system
//!
//! This crate provides centralized configuration for the Glide demo and
//! playback defaults, loading settings from `glide.toml` as an alternative
//! to environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for Glide.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlideConfig {
    /// Demo application settings
    pub demo: DemoConfig,
    /// Playback defaults applied by the demo's frame loop
    pub playback: PlaybackConfig,
    /// Log output settings
    pub log: LogConfig,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Scenario to run (slide, pulse, sequence)
    pub scenario: Option<String>,
    /// Number of frames to simulate before exiting
    pub frames: Option<u32>,
}

/// Playback configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Seconds of simulated time per frame (default 1/60)
    pub frame_step: Option<f32>,
    /// Container time scale; negative plays backward
    pub time_scale: Option<f32>,
}

/// Log configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive for log output (e.g. "glide_core=debug")
    pub filter: Option<String>,
}

impl GlideConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (`glide.toml` in the
    /// current directory), falling back to defaults if missing or invalid.
    pub fn load_or_default() -> Self {
        Self::load_from_file("glide.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables.
    ///
    /// Environment variables take precedence over file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(scenario) = std::env::var("GLIDE_SCENARIO") {
            self.demo.scenario = Some(scenario);
        }
        if let Ok(val) = std::env::var("GLIDE_FRAMES") {
            if let Ok(frames) = val.parse() {
                self.demo.frames = Some(frames);
            }
        }
        if let Ok(val) = std::env::var("GLIDE_FRAME_STEP") {
            if let Ok(step) = val.parse() {
                self.playback.frame_step = Some(step);
            }
        }
        if let Ok(val) = std::env::var("GLIDE_TIME_SCALE") {
            if let Ok(scale) = val.parse() {
                self.playback.time_scale = Some(scale);
            }
        }
        if let Ok(filter) = std::env::var("GLIDE_LOG") {
            self.log.filter = Some(filter);
        }
    }
}
