// SPDX-License-Identifier: PMPL-1.0-or-later
//! Auto-fix generation.
//!
//! A fix is a field-level patch for the component record. The engine never
//! applies patches; callers merge and persist them. An empty patch means no
//! automatic remediation exists for the issue.

use crate::issue::{Issue, IssueKind};
use crate::snapshot::ComponentSnapshot;
use serde::{Deserialize, Serialize};

/// Field-level changes to a component record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i64>,
}

impl FixPatch {
    pub fn is_empty(&self) -> bool {
        self.seo_alt.is_none() && self.aria_label.is_none() && self.tab_index.is_none()
    }

    /// Fold another patch into this one; fields already set here win
    pub fn merge(&mut self, other: FixPatch) {
        self.seo_alt = self.seo_alt.take().or(other.seo_alt);
        self.aria_label = self.aria_label.take().or(other.aria_label);
        self.tab_index = self.tab_index.or(other.tab_index);
    }
}

/// Patch resolving `issue` on `snapshot`, or an empty patch when none is known
pub fn generate_fix(issue: &Issue, snapshot: &ComponentSnapshot) -> FixPatch {
    let id = &snapshot.id;
    match issue.kind {
        IssueKind::MissingAltText => FixPatch {
            seo_alt: Some(format!("Image {} (describe this image)", id)),
            ..FixPatch::default()
        },
        IssueKind::MissingButtonLabel => FixPatch {
            aria_label: Some(format!("Button {}", id)),
            ..FixPatch::default()
        },
        IssueKind::InvalidTabIndex => FixPatch {
            tab_index: Some(0),
            ..FixPatch::default()
        },
        IssueKind::MissingFormFieldLabel => FixPatch {
            aria_label: Some(format!("Form {}", id)),
            ..FixPatch::default()
        },
        _ => FixPatch::default(),
    }
}

/// Fixes for every fixable issue of a component, merged into one patch
pub fn generate_component_fix<'a>(
    issues: impl IntoIterator<Item = &'a Issue>,
    snapshot: &ComponentSnapshot,
) -> FixPatch {
    issues
        .into_iter()
        .filter(|issue| issue.kind.is_fixable())
        .fold(FixPatch::default(), |mut patch, issue| {
            patch.merge(generate_fix(issue, snapshot));
            patch
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_alt_fix_references_component() {
        let snapshot = ComponentSnapshot::new("c1", "image");
        let issue = Issue::error(IssueKind::MissingAltText, "Image is missing alternative text");
        let patch = generate_fix(&issue, &snapshot);
        let alt = patch.seo_alt.expect("seoAlt set");
        assert!(!alt.is_empty());
        assert!(alt.contains("c1"));
        assert!(patch.aria_label.is_none());
    }

    #[test]
    fn test_fix_ignores_message_wording() {
        let snapshot = ComponentSnapshot::new("c1", "image");
        let issue = Issue::error(IssueKind::MissingAltText, "Bild ohne Alternativtext");
        assert!(generate_fix(&issue, &snapshot).seo_alt.is_some());
    }

    #[test]
    fn test_button_and_form_fixes() {
        let button = ComponentSnapshot::new("b7", "button");
        let patch = generate_fix(&Issue::error(IssueKind::MissingButtonLabel, "x"), &button);
        assert_eq!(patch.aria_label.as_deref(), Some("Button b7"));

        let form = ComponentSnapshot::new("f2", "form");
        let patch = generate_fix(&Issue::error(IssueKind::MissingFormFieldLabel, "x"), &form);
        assert!(patch.aria_label.is_some());
    }

    #[test]
    fn test_tab_index_fix() {
        let snapshot = ComponentSnapshot::new("c1", "text").with_tab_index(-3);
        let patch = generate_fix(&Issue::warning(IssueKind::InvalidTabIndex, "x"), &snapshot);
        assert_eq!(patch.tab_index, Some(0));
    }

    #[test]
    fn test_unmapped_issue_returns_empty_patch() {
        let snapshot = ComponentSnapshot::new("v1", "video");
        let patch = generate_fix(&Issue::warning(IssueKind::MissingCaptions, "x"), &snapshot);
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }

    #[test]
    fn test_fixable_kinds_produce_patches() {
        let snapshot = ComponentSnapshot::new("c1", "any");
        let kinds = [
            IssueKind::MissingAltText,
            IssueKind::DecorativeImageWithAlt,
            IssueKind::MissingButtonLabel,
            IssueKind::InsufficientContrast,
            IssueKind::SmallTouchTarget,
            IssueKind::InvalidHeadingLevel,
            IssueKind::MissingFormFieldLabel,
            IssueKind::RequiredFieldNotAnnounced,
            IssueKind::MissingCaptions,
            IssueKind::AutoplayMedia,
            IssueKind::LowOpacity,
            IssueKind::InvalidTabIndex,
            IssueKind::InvalidRole,
            IssueKind::UnreadablePayload,
        ];
        for kind in kinds {
            let patch = generate_fix(&Issue::warning(kind, "x"), &snapshot);
            assert_eq!(!patch.is_empty(), kind.is_fixable(), "{kind}");
        }
    }

    #[test]
    fn test_merge_keeps_first_value() {
        let snapshot = ComponentSnapshot::new("c1", "button").with_tab_index(-4);
        let issues = vec![
            Issue::error(IssueKind::MissingButtonLabel, "x"),
            Issue::warning(IssueKind::InvalidTabIndex, "y"),
            Issue::error(IssueKind::MissingFormFieldLabel, "z"),
        ];
        let patch = generate_component_fix(&issues, &snapshot);
        assert_eq!(patch.aria_label.as_deref(), Some("Button c1"));
        assert_eq!(patch.tab_index, Some(0));
        assert!(patch.seo_alt.is_none());
    }
}
