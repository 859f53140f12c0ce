// SPDX-License-Identifier: PMPL-1.0-or-later
//! Project file loading for the command-line front end.
//!
//! A project file is JSON: either an array of component snapshots or an
//! object with a `components` array (other keys are ignored).

use crate::auditor::Auditor;
use crate::error::{AuditError, Result};
use crate::report::ProjectReport;
use crate::snapshot::{value_kind, ComponentSnapshot};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Directories to skip
const SKIP_DIRS: &[&str] = &["node_modules", ".git", "target", "dist", "build", "coverage"];

/// Parse project file contents.
///
/// Errors name the offending component (numbered from 1) and keep serde's
/// description of what was wrong with it.
pub fn parse_project(content: &str) -> serde_json::Result<Vec<ComponentSnapshot>> {
    let entries = match serde_json::from_str::<Value>(content)? {
        Value::Array(entries) => entries,
        Value::Object(mut project) => match project.remove("components") {
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(serde_json::Error::custom(format!(
                    "components must be an array, got {}",
                    value_kind(&other)
                )))
            }
            None => return Err(serde_json::Error::missing_field("components")),
        },
        other => {
            return Err(serde_json::Error::custom(format!(
                "expected an array of components or an object with components, got {}",
                value_kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            ComponentSnapshot::deserialize(entry)
                .map_err(|e| serde_json::Error::custom(format!("component {}: {}", idx + 1, e)))
        })
        .collect()
}

/// Load the component snapshots of one project file
pub fn load_project(path: &Path) -> Result<Vec<ComponentSnapshot>> {
    let content = std::fs::read_to_string(path)?;
    parse_project(&content).map_err(|e| AuditError::Project {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Audit a single project file
pub fn scan_file(path: &Path, auditor: &Auditor) -> Result<ProjectReport> {
    let components = load_project(path)?;
    Ok(auditor.audit_project(&components))
}

/// Audit every `.json` project file below a directory.
///
/// Files that are not valid project files are logged and skipped.
pub fn scan_directory(dir: &Path, auditor: &Auditor) -> Result<Vec<(PathBuf, ProjectReport)>> {
    let mut reports = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            if e.file_type().is_dir() && e.depth() > 0 {
                return !SKIP_DIRS.contains(&name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        match scan_file(path, auditor) {
            Ok(report) => reports.push((path.to_path_buf(), report)),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    info!("Audited {} project file(s)", reports.len());

    Ok(reports)
}
