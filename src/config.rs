// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for a11y-audit

use crate::error::{AuditError, Result};
use crate::issue::Severity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rule thresholds used by the analyzers
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Score deduction weights
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Reject configurations the analyzers cannot work with
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        let positive = [
            ("min_contrast", t.min_contrast),
            ("large_text_contrast", t.large_text_contrast),
            ("large_text_size", t.large_text_size),
            ("min_touch_target", t.min_touch_target),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AuditError::Config(format!(
                    "thresholds.{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&t.min_opacity) {
            return Err(AuditError::Config(format!(
                "thresholds.min_opacity must be within 0..=1, got {}",
                t.min_opacity
            )));
        }
        Ok(())
    }
}

/// Thresholds applied by the per-type analyzers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Minimum contrast ratio for normal text and controls
    #[serde(default = "default_min_contrast")]
    pub min_contrast: f64,

    /// Minimum contrast ratio for large text
    #[serde(default = "default_large_text_contrast")]
    pub large_text_contrast: f64,

    /// Font size (units stripped) at which text counts as large
    #[serde(default = "default_large_text_size")]
    pub large_text_size: f64,

    /// Minimum width/height of a touch target
    #[serde(default = "default_min_touch_target")]
    pub min_touch_target: f64,

    /// Opacity below which a component is considered hard to see
    #[serde(default = "default_min_opacity")]
    pub min_opacity: f64,

    /// Lowest acceptable tabIndex
    #[serde(default = "default_min_tab_index")]
    pub min_tab_index: i64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            min_contrast: default_min_contrast(),
            large_text_contrast: default_large_text_contrast(),
            large_text_size: default_large_text_size(),
            min_touch_target: default_min_touch_target(),
            min_opacity: default_min_opacity(),
            min_tab_index: default_min_tab_index(),
        }
    }
}

fn default_min_contrast() -> f64 {
    4.5
}

fn default_large_text_contrast() -> f64 {
    3.0
}

fn default_large_text_size() -> f64 {
    18.0
}

fn default_min_touch_target() -> f64 {
    44.0
}

fn default_min_opacity() -> f64 {
    0.3
}

fn default_min_tab_index() -> i64 {
    -1
}

/// Per-severity deduction weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityWeights {
    pub error: u32,
    pub warning: u32,
    pub info: u32,
}

impl SeverityWeights {
    /// Deduction for a single issue of the given severity
    pub fn weight(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}

/// Score deduction configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Deductions applied to a single component's score
    #[serde(default = "default_component_weights")]
    pub component: SeverityWeights,

    /// Deductions averaged across components for the project score
    #[serde(default = "default_project_weights")]
    pub project: SeverityWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            component: default_component_weights(),
            project: default_project_weights(),
        }
    }
}

fn default_component_weights() -> SeverityWeights {
    SeverityWeights { error: 15, warning: 8, info: 3 }
}

fn default_project_weights() -> SeverityWeights {
    SeverityWeights { error: 10, warning: 5, info: 2 }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (pretty, compact, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|e| e == "toml").unwrap_or(false)
}

/// Load configuration from a path, falling back to defaults when absent
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = if is_toml(path) {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    config.validate()?;
    Ok(config)
}

/// Get the default config path for a project
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".a11y-audit/config.toml")
}

/// Write default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if is_toml(path) {
        toml::to_string_pretty(&config).map_err(|e| AuditError::Config(e.to_string()))?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}
