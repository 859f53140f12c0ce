// SPDX-License-Identifier: PMPL-1.0-or-later
//! Remediation suggestions derived from a project's issue set.
//!
//! Each issue kind belongs to at most one suggestion category. A category's
//! suggestion appears once no matter how many issues fall into it.

use crate::issue::{Issue, IssueKind, Severity};

/// Group of related issues sharing one canned suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SuggestionCategory {
    AlternativeText,
    Contrast,
    Labels,
    Headings,
    Aria,
    Size,
    Media,
}

impl SuggestionCategory {
    /// Categories in the order their suggestions are emitted
    pub const ALL: [SuggestionCategory; 7] = [
        SuggestionCategory::AlternativeText,
        SuggestionCategory::Contrast,
        SuggestionCategory::Labels,
        SuggestionCategory::Headings,
        SuggestionCategory::Aria,
        SuggestionCategory::Size,
        SuggestionCategory::Media,
    ];

    /// Category an issue kind falls into, if any.
    ///
    /// Keyed by kind, not message text: a required field without
    /// `aria-required` is an ARIA attribute problem whatever its wording.
    pub fn of(kind: IssueKind) -> Option<Self> {
        match kind {
            IssueKind::MissingAltText | IssueKind::DecorativeImageWithAlt => {
                Some(SuggestionCategory::AlternativeText)
            }
            IssueKind::InsufficientContrast => Some(SuggestionCategory::Contrast),
            IssueKind::MissingButtonLabel | IssueKind::MissingFormFieldLabel => {
                Some(SuggestionCategory::Labels)
            }
            IssueKind::InvalidHeadingLevel => Some(SuggestionCategory::Headings),
            IssueKind::InvalidRole | IssueKind::RequiredFieldNotAnnounced => {
                Some(SuggestionCategory::Aria)
            }
            IssueKind::SmallTouchTarget => Some(SuggestionCategory::Size),
            IssueKind::MissingCaptions | IssueKind::AutoplayMedia => Some(SuggestionCategory::Media),
            IssueKind::LowOpacity | IssueKind::InvalidTabIndex | IssueKind::UnreadablePayload => None,
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            SuggestionCategory::AlternativeText => {
                "Add descriptive alternative text to informative images and leave decorative images without it"
            }
            SuggestionCategory::Contrast => {
                "Increase color contrast between text and background to at least 4.5:1 (3:1 for large text)"
            }
            SuggestionCategory::Labels => {
                "Give every button and form field a visible label or an aria-label"
            }
            SuggestionCategory::Headings => {
                "Use heading levels 1 through 6 and keep the page title structure in logical order"
            }
            SuggestionCategory::Aria => {
                "Use valid ARIA roles and attributes so assistive technology can announce components correctly"
            }
            SuggestionCategory::Size => {
                "Make interactive elements at least 44x44 pixels so they are easy to tap"
            }
            SuggestionCategory::Media => {
                "Provide captions for video content and avoid autoplaying media"
            }
        }
    }
}

/// Added whenever any issue is an error
pub const PRIORITY_SUGGESTION: &str =
    "Fix error-level issues first; they block access for assistive technology users";

/// Always added once at least one component was audited
pub const STANDING_SUGGESTIONS: [&str; 2] = [
    "Test keyboard navigation through every interactive component",
    "Check the page with a screen reader to confirm content is announced as expected",
];

/// Build the deduplicated suggestion list for a project
pub fn generate_suggestions(issues: &[Issue], component_count: usize) -> Vec<String> {
    if component_count == 0 {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = SuggestionCategory::ALL
        .iter()
        .filter(|category| {
            issues
                .iter()
                .any(|issue| SuggestionCategory::of(issue.kind) == Some(**category))
        })
        .map(|category| category.suggestion().to_string())
        .collect();

    if issues.iter().any(|issue| issue.severity == Severity::Error) {
        suggestions.push(PRIORITY_SUGGESTION.to_string());
    }

    suggestions.extend(STANDING_SUGGESTIONS.iter().map(|s| s.to_string()));
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_project_has_no_suggestions() {
        assert!(generate_suggestions(&[], 0).is_empty());
    }

    #[test]
    fn test_clean_project_gets_standing_suggestions_only() {
        let suggestions = generate_suggestions(&[], 3);
        assert_eq!(suggestions, STANDING_SUGGESTIONS.map(String::from).to_vec());
    }

    #[test]
    fn test_categories_deduplicated() {
        let issues = vec![
            Issue::error(IssueKind::MissingAltText, "a"),
            Issue::error(IssueKind::MissingAltText, "b"),
            Issue::warning(IssueKind::DecorativeImageWithAlt, "c"),
        ];
        let suggestions = generate_suggestions(&issues, 3);
        let unique: HashSet<&String> = suggestions.iter().collect();
        assert_eq!(unique.len(), suggestions.len());
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[0], SuggestionCategory::AlternativeText.suggestion());
        assert_eq!(suggestions[1], PRIORITY_SUGGESTION);
    }

    #[test]
    fn test_warnings_only_skip_priority() {
        let issues = vec![
            Issue::warning(IssueKind::SmallTouchTarget, "small"),
            Issue::warning(IssueKind::InsufficientContrast, "faint"),
        ];
        let suggestions = generate_suggestions(&issues, 1);
        assert!(!suggestions.iter().any(|s| s == PRIORITY_SUGGESTION));
        // category order, not discovery order
        assert_eq!(suggestions[0], SuggestionCategory::Contrast.suggestion());
        assert_eq!(suggestions[1], SuggestionCategory::Size.suggestion());
    }

    #[test]
    fn test_required_field_maps_to_aria() {
        assert_eq!(
            SuggestionCategory::of(IssueKind::RequiredFieldNotAnnounced),
            Some(SuggestionCategory::Aria)
        );
        let issues = vec![Issue::info(
            IssueKind::RequiredFieldNotAnnounced,
            "Required form field 1 should set aria-required",
        )];
        let suggestions = generate_suggestions(&issues, 1);
        assert_eq!(suggestions[0], SuggestionCategory::Aria.suggestion());
        assert_eq!(suggestions.len(), 1 + STANDING_SUGGESTIONS.len());
    }

    #[test]
    fn test_uncategorized_kinds() {
        let issues = vec![Issue::warning(IssueKind::InvalidTabIndex, "tab")];
        assert_eq!(generate_suggestions(&issues, 1).len(), STANDING_SUGGESTIONS.len());
    }
}
