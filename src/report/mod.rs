// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit results and report generation.
//!
//! Supports multiple output formats:
//! - Text: human-readable issues grouped by severity with WCAG references
//! - JSON: the report structure itself, for the page-builder backend
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::issue::{severity_counts, Issue, Severity};
use serde::{Deserialize, Serialize};

/// Analysis of a single component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAnalysis {
    pub component_id: String,
    pub component_type: String,
    /// 0..=100
    pub score: u8,
    pub issues: Vec<Issue>,
}

/// Aggregate audit of a whole project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    /// 0..=100, rounded
    pub score: u8,
    /// Every component's issues, concatenated in component order
    pub issues: Vec<Issue>,
    /// Deduplicated remediation suggestions
    pub suggestions: Vec<String>,
    pub component_analysis: Vec<ComponentAnalysis>,
}

impl ProjectReport {
    /// Get issues by severity
    pub fn by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.severity == severity).collect()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    /// Issues of one component
    pub fn issues_for(&self, component_id: &str) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.component_id.as_deref() == Some(component_id))
            .collect()
    }
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report in the requested format
pub fn generate_report(report: &ProjectReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(report),
        OutputFormat::Json => generate_json_report(report),
        OutputFormat::Sarif => generate_sarif_report(report),
    }
}

/// Generate human-readable text report
fn generate_text_report(report: &ProjectReport) -> String {
    let mut output = String::new();

    output.push_str("=== Accessibility Audit Report ===\n\n");
    output.push_str(&format!(
        "Score: {}/100 across {} component(s)\n\n",
        report.score,
        report.component_analysis.len()
    ));

    if report.issues.is_empty() {
        output.push_str("No accessibility issues found. All checks passed.\n");
    } else {
        let (errors, warnings, infos) = severity_counts(&report.issues);
        output.push_str(&format!(
            "Found {} issue(s): {} error(s), {} warning(s), {} info\n\n",
            report.issues.len(),
            errors,
            warnings,
            infos
        ));

        for severity in [Severity::Error, Severity::Warning, Severity::Info] {
            let issues = report.by_severity(severity);
            if issues.is_empty() {
                continue;
            }

            output.push_str(&format!("--- {} ({}) ---\n", severity, issues.len()));
            for issue in issues {
                output.push_str(&format!("[{}] {}\n", issue.kind.rule_id(), issue.message));
                output.push_str(&format!("  Location: {}\n", issue.location_string()));
                if let Some(criterion) = issue.kind.wcag_criterion() {
                    output.push_str(&format!("  WCAG: {}\n", criterion));
                }
                if let Some(ref hint) = issue.fix_hint {
                    output.push_str(&format!("  Fix: {}\n", hint));
                }
                if issue.kind.is_fixable() {
                    output.push_str("  Auto-fix available\n");
                }
                output.push('\n');
            }
        }
    }

    if !report.component_analysis.is_empty() {
        output.push_str("--- Components ---\n");
        for analysis in &report.component_analysis {
            output.push_str(&format!(
                "{} ({}): {}/100, {} issue(s)\n",
                analysis.component_id,
                analysis.component_type,
                analysis.score,
                analysis.issues.len()
            ));
        }
        output.push('\n');
    }

    if !report.suggestions.is_empty() {
        output.push_str("--- Suggestions ---\n");
        for suggestion in &report.suggestions {
            output.push_str(&format!("- {}\n", suggestion));
        }
        output.push('\n');
    }

    if report.has_errors() {
        output.push_str("RESULT: FAIL (errors found)\n");
    } else if !report.by_severity(Severity::Warning).is_empty() {
        output.push_str("RESULT: PASS WITH WARNINGS\n");
    } else {
        output.push_str("RESULT: PASS\n");
    }

    output
}

/// Generate JSON report
fn generate_json_report(report: &ProjectReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "logicalLocations")]
    logical_locations: Vec<SarifLogicalLocation>,
}

#[derive(Debug, Serialize)]
struct SarifLogicalLocation {
    name: String,
    #[serde(rename = "fullyQualifiedName")]
    fully_qualified_name: String,
    kind: String,
}

/// Generate SARIF report
fn generate_sarif_report(report: &ProjectReport) -> String {
    let results: Vec<SarifResult> = report
        .issues
        .iter()
        .map(|issue| {
            let level = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "note",
            };

            let locations = issue
                .component_id
                .iter()
                .map(|id| SarifLocation {
                    logical_locations: vec![SarifLogicalLocation {
                        name: id.clone(),
                        fully_qualified_name: issue.location_string(),
                        kind: "element".to_string(),
                    }],
                })
                .collect();

            SarifResult {
                rule_id: issue.kind.rule_id(),
                level: level.to_string(),
                message: SarifMessage { text: issue.message.clone() },
                locations,
            }
        })
        .collect();

    let sarif = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&sarif).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}
