// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for the audit engine and its loaders

use thiserror::Error;

/// Main error type for a11y-audit
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{field} could not be parsed: {source}")]
    Payload {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid project file {path}: {message}")]
    Project { path: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
