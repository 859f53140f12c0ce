// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text analyzer - WCAG 1.1.1 Non-text Content (Level A)
//!
//! - Every informative image needs alternative text (`seoAlt` or `content.alt`)
//! - Decorative images should carry no alternative text at all

use crate::analyzers::ComponentAnalyzer;
use crate::issue::{Issue, IssueKind};
use crate::snapshot::{ComponentSnapshot, Content, Styles};

/// Analyzer for image alt text compliance
pub struct ImageAnalyzer;

impl ComponentAnalyzer for ImageAnalyzer {
    fn name(&self) -> &str {
        "Image Analyzer"
    }

    fn component_types(&self) -> &[&str] {
        &["image"]
    }

    fn analyze(&self, snapshot: &ComponentSnapshot, content: &Content, _: &Styles) -> Vec<Issue> {
        let mut issues = Vec::new();
        let alt = snapshot.seo_alt().or(content.alt.as_deref());

        match alt {
            None => issues.push(
                Issue::error(IssueKind::MissingAltText, "Image is missing alternative text")
                    .with_element("seoAlt")
                    .with_fix_hint("Describe what the image shows in seoAlt"),
            ),
            Some(_) if content.decorative => issues.push(
                Issue::warning(
                    IssueKind::DecorativeImageWithAlt,
                    "Decorative image should not have alternative text",
                )
                .with_element("content.decorative")
                .with_fix_hint("Clear the alt text so screen readers skip the decorative image"),
            ),
            Some(_) => {}
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Severity;
    use serde_json::json;

    fn run(snapshot: &ComponentSnapshot) -> Vec<Issue> {
        let content = snapshot.parse_content().unwrap();
        ImageAnalyzer.analyze(snapshot, &content, &Styles::default())
    }

    #[test]
    fn test_missing_alt() {
        let issues = run(&ComponentSnapshot::new("c1", "image").with_content(json!({"src": "a.png"})));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].kind, IssueKind::MissingAltText);
        assert!(issues[0].message.contains("alternative text"));
    }

    #[test]
    fn test_missing_alt_hint_points_at_seo_alt() {
        let issues = run(&ComponentSnapshot::new("c1", "image").with_content(json!({"decorative": true})));
        let hint = issues[0].fix_hint.as_deref().unwrap_or_default();
        assert!(hint.contains("seoAlt"));
        assert!(!hint.contains("decorative"));
    }

    #[test]
    fn test_seo_alt_satisfies() {
        let issues = run(&ComponentSnapshot::new("c1", "image").with_seo_alt("Team photo"));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_content_alt_satisfies() {
        let issues = run(&ComponentSnapshot::new("c1", "image").with_content(json!({"alt": "Logo of Acme"})));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_decorative_with_alt() {
        let issues = run(
            &ComponentSnapshot::new("c1", "image")
                .with_content(json!({"alt": "swirl", "decorative": true})),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::DecorativeImageWithAlt);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_decorative_without_alt_still_missing_alt() {
        let issues = run(&ComponentSnapshot::new("c1", "image").with_content(json!({"decorative": true})));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingAltText);
    }
}
