// SPDX-License-Identifier: PMPL-1.0-or-later
//! Project auditor: runs the analyzers over components and aggregates reports.
//!
//! Components are independent, so a project is audited in parallel; results
//! are collected in input order, which keeps each component's issues grouped
//! together in the project report.

use crate::analyzers::{general, AnalyzerRegistry};
use crate::config::Config;
use crate::issue::{severity_counts, Issue, IssueKind};
use crate::report::{ComponentAnalysis, ProjectReport};
use crate::scoring::{component_score, project_score};
use crate::snapshot::ComponentSnapshot;
use crate::suggestions::generate_suggestions;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Audits components against the configured rules
pub struct Auditor {
    registry: AnalyzerRegistry,
    config: Config,
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Auditor {
    pub fn new(config: Config) -> Self {
        Self {
            registry: AnalyzerRegistry::with_defaults(&config.thresholds),
            config,
        }
    }

    /// Auditor with a caller-supplied registry
    pub fn with_registry(config: Config, registry: AnalyzerRegistry) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry_mut(&mut self) -> &mut AnalyzerRegistry {
        &mut self.registry
    }

    /// Audit a single component
    pub fn audit_component(&self, snapshot: &ComponentSnapshot) -> ComponentAnalysis {
        let mut issues = self.type_issues(snapshot);
        issues.extend(general::check(snapshot, &self.config.thresholds));

        let issues: Vec<Issue> = issues
            .into_iter()
            .map(|issue| issue.with_component(snapshot.id.clone()))
            .collect();
        let score = component_score(&issues, &self.config.scoring.component);

        debug!(
            component = %snapshot.id,
            component_type = %snapshot.component_type,
            issues = issues.len(),
            score,
            "Audited component"
        );

        ComponentAnalysis {
            component_id: snapshot.id.clone(),
            component_type: snapshot.component_type.clone(),
            score,
            issues,
        }
    }

    /// Audit every component of a project
    pub fn audit_project(&self, snapshots: &[ComponentSnapshot]) -> ProjectReport {
        let component_analysis: Vec<ComponentAnalysis> = snapshots
            .par_iter()
            .map(|snapshot| self.audit_component(snapshot))
            .collect();

        let issues: Vec<Issue> = component_analysis
            .iter()
            .flat_map(|analysis| analysis.issues.iter().cloned())
            .collect();
        let score = project_score(&issues, snapshots.len(), &self.config.scoring.project);
        let suggestions = generate_suggestions(&issues, snapshots.len());

        let (errors, warnings, infos) = severity_counts(&issues);
        info!(
            components = snapshots.len(),
            errors, warnings, infos, score, "Audited project"
        );

        ProjectReport {
            score,
            issues,
            suggestions,
            component_analysis,
        }
    }

    /// Issues from the type-specific analyzer, or the unreadable-payload issues
    /// when content or styles cannot be decoded
    fn type_issues(&self, snapshot: &ComponentSnapshot) -> Vec<Issue> {
        let (content, styles) = match (snapshot.parse_content(), snapshot.parse_styles()) {
            (Ok(content), Ok(styles)) => (content, styles),
            (content, styles) => {
                return [content.err(), styles.err()]
                    .into_iter()
                    .flatten()
                    .map(|err| {
                        warn!(component = %snapshot.id, error = %err, "Skipping type checks");
                        Issue::error(
                            IssueKind::UnreadablePayload,
                            format!("Unreadable component payload: {}", err),
                        )
                        .with_fix_hint("Re-save the component so its content and styles are valid JSON")
                    })
                    .collect();
            }
        };

        self.registry
            .analyzer_for(&snapshot.component_type)
            .analyze(snapshot, &content, &styles)
    }
}

/// Audit a project with the default configuration
pub fn audit_project(snapshots: &[ComponentSnapshot]) -> ProjectReport {
    Auditor::default().audit_project(snapshots)
}

/// Audit one component with the default configuration
pub fn audit_component(snapshot: &ComponentSnapshot) -> ComponentAnalysis {
    Auditor::default().audit_component(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Severity;
    use serde_json::json;

    #[test]
    fn test_empty_project() {
        let report = audit_project(&[]);
        assert_eq!(report.score, 100);
        assert!(report.issues.is_empty());
        assert!(report.suggestions.is_empty());
        assert!(report.component_analysis.is_empty());
    }

    #[test]
    fn test_image_without_alt() {
        let analysis = audit_component(&ComponentSnapshot::new("c1", "image"));
        assert_eq!(analysis.issues.len(), 1);
        assert_eq!(analysis.issues[0].severity, Severity::Error);
        assert!(analysis.issues[0].message.contains("alternative text"));
        assert_eq!(analysis.score, 85);
    }

    #[test]
    fn test_issues_are_component_scoped() {
        let report = audit_project(&[
            ComponentSnapshot::new("a", "image"),
            ComponentSnapshot::new("b", "button").with_role("nope"),
        ]);
        assert!(report.issues.iter().all(|i| i.component_id.is_some()));
        assert_eq!(report.issues[0].component_id.as_deref(), Some("a"));
        assert!(report.issues[1..].iter().all(|i| i.component_id.as_deref() == Some("b")));
    }

    #[test]
    fn test_order_preserved_across_components() {
        let snapshots: Vec<ComponentSnapshot> = (0..50)
            .map(|n| ComponentSnapshot::new(format!("img-{n}"), "image"))
            .collect();
        let report = audit_project(&snapshots);
        let ids: Vec<&str> = report
            .component_analysis
            .iter()
            .map(|a| a.component_id.as_str())
            .collect();
        let expected: Vec<String> = (0..50).map(|n| format!("img-{n}")).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(report.issues.len(), 50);
        assert_eq!(report.issues[49].component_id.as_deref(), Some("img-49"));
    }

    #[test]
    fn test_malformed_payload_isolated() {
        let snapshots = vec![
            ComponentSnapshot::new("bad", "button")
                .with_content(json!("{\"text\": "))
                .with_tab_index(-2),
            ComponentSnapshot::new("good", "image").with_seo_alt("Portrait"),
        ];
        let report = audit_project(&snapshots);

        let bad = &report.component_analysis[0];
        let kinds: Vec<_> = bad.issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::UnreadablePayload, IssueKind::InvalidTabIndex]);
        assert_eq!(bad.issues[0].severity, Severity::Error);

        let good = &report.component_analysis[1];
        assert!(good.issues.is_empty());
        assert_eq!(good.score, 100);
    }

    #[test]
    fn test_both_payloads_malformed() {
        let snapshot = ComponentSnapshot::new("bad", "text")
            .with_content(json!("nope"))
            .with_styles(json!("{"));
        let analysis = audit_component(&snapshot);
        assert_eq!(analysis.issues.len(), 2);
        assert!(analysis.issues[0].message.contains("content"));
        assert!(analysis.issues[1].message.contains("styles"));
    }

    #[test]
    fn test_array_payloads_are_unreadable() {
        let button = ComponentSnapshot::new("b1", "button").with_content(json!(["Buy"]));
        let image = ComponentSnapshot::new("i1", "image").with_content(json!("[null, \"logo\"]"));
        for snapshot in [button, image] {
            let kinds: Vec<_> = audit_component(&snapshot).issues.iter().map(|i| i.kind).collect();
            assert_eq!(kinds, vec![IssueKind::UnreadablePayload], "{}", snapshot.id);
        }
    }

    #[test]
    fn test_serialized_null_matches_structured_null() {
        let structured = ComponentSnapshot::new("t1", "text").with_content(json!(null));
        let serialized = ComponentSnapshot::new("t1", "text").with_content(json!("null"));
        let a = audit_component(&structured);
        let b = audit_component(&serialized);
        assert!(b.issues.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_type_uses_generic_checks() {
        let snapshot = ComponentSnapshot::new("x", "marquee-banner").with_styles(json!({"opacity": 0.1}));
        let analysis = audit_component(&snapshot);
        assert_eq!(analysis.issues.len(), 1);
        assert_eq!(analysis.issues[0].kind, IssueKind::LowOpacity);
        assert_eq!(analysis.component_type, "marquee-banner");
    }

    #[test]
    fn test_project_score_and_suggestions() {
        let report = audit_project(&[
            ComponentSnapshot::new("img", "image"),
            ComponentSnapshot::new("vid", "video").with_content(json!({"captions": true})),
        ]);
        // one error (10) over two components
        assert_eq!(report.score, 95);
        assert!(report.suggestions.iter().any(|s| s.contains("alternative text")));
        assert!(report
            .suggestions
            .iter()
            .any(|s| s == crate::suggestions::PRIORITY_SUGGESTION));
    }

    #[test]
    fn test_custom_thresholds() {
        let mut config = Config::default();
        config.thresholds.min_touch_target = 24.0;
        let auditor = Auditor::new(config);
        let snapshot = ComponentSnapshot::new("b", "button")
            .with_content(json!({"text": "Go"}))
            .with_size("30px", "30px");
        assert!(auditor.audit_component(&snapshot).issues.is_empty());
    }
}
