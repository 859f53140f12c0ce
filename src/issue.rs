// SPDX-License-Identifier: PMPL-1.0-or-later
//! Issue types produced by the analyzers.
//!
//! Every issue carries a stable [`IssueKind`] alongside its human-readable
//! message. Auto-fix and suggestion selection key off the kind, so message
//! wording can change without breaking remediation.

use serde::{Deserialize, Serialize};

/// Severity levels for issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks access for some users
    Error,
    /// Should be addressed
    Warning,
    /// Informational
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// Stable identifier for each rule the engine checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    MissingAltText,
    DecorativeImageWithAlt,
    MissingButtonLabel,
    InsufficientContrast,
    SmallTouchTarget,
    InvalidHeadingLevel,
    MissingFormFieldLabel,
    RequiredFieldNotAnnounced,
    MissingCaptions,
    AutoplayMedia,
    LowOpacity,
    InvalidTabIndex,
    InvalidRole,
    UnreadablePayload,
}

impl IssueKind {
    /// Rule identifier used in reports (e.g. "WCAG-1.1.1-missing-alt-text")
    pub fn rule_id(&self) -> String {
        match self.wcag_criterion() {
            Some(criterion) => format!("WCAG-{}-{}", criterion, self.slug()),
            None => format!("A11Y-{}", self.slug()),
        }
    }

    /// Kebab-case name of the kind, matching its serialized form
    pub fn slug(&self) -> &'static str {
        match self {
            IssueKind::MissingAltText => "missing-alt-text",
            IssueKind::DecorativeImageWithAlt => "decorative-image-with-alt",
            IssueKind::MissingButtonLabel => "missing-button-label",
            IssueKind::InsufficientContrast => "insufficient-contrast",
            IssueKind::SmallTouchTarget => "small-touch-target",
            IssueKind::InvalidHeadingLevel => "invalid-heading-level",
            IssueKind::MissingFormFieldLabel => "missing-form-field-label",
            IssueKind::RequiredFieldNotAnnounced => "required-field-not-announced",
            IssueKind::MissingCaptions => "missing-captions",
            IssueKind::AutoplayMedia => "autoplay-media",
            IssueKind::LowOpacity => "low-opacity",
            IssueKind::InvalidTabIndex => "invalid-tab-index",
            IssueKind::InvalidRole => "invalid-role",
            IssueKind::UnreadablePayload => "unreadable-payload",
        }
    }

    /// WCAG success criterion the rule approximates
    pub fn wcag_criterion(&self) -> Option<&'static str> {
        match self {
            IssueKind::MissingAltText | IssueKind::DecorativeImageWithAlt => Some("1.1.1"),
            IssueKind::MissingButtonLabel | IssueKind::InvalidRole => Some("4.1.2"),
            IssueKind::InsufficientContrast | IssueKind::LowOpacity => Some("1.4.3"),
            IssueKind::SmallTouchTarget => Some("2.5.5"),
            IssueKind::InvalidHeadingLevel => Some("1.3.1"),
            IssueKind::MissingFormFieldLabel | IssueKind::RequiredFieldNotAnnounced => {
                Some("3.3.2")
            }
            IssueKind::MissingCaptions => Some("1.2.2"),
            IssueKind::AutoplayMedia => Some("1.4.2"),
            IssueKind::InvalidTabIndex => Some("2.4.3"),
            IssueKind::UnreadablePayload => None,
        }
    }

    /// Whether the auto-fix generator has a patch for this kind
    pub fn is_fixable(&self) -> bool {
        matches!(
            self,
            IssueKind::MissingAltText
                | IssueKind::MissingButtonLabel
                | IssueKind::InvalidTabIndex
                | IssueKind::MissingFormFieldLabel
        )
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// A single accessibility defect found on a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Stable rule identifier
    pub kind: IssueKind,
    /// Severity level
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Part of the component the issue points at (e.g. "styles.color", "fields[2]")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_locator: Option<String>,
    /// How to resolve the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_hint: Option<String>,
    /// Component the issue belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
}

impl Issue {
    /// Create a new issue
    pub fn new(kind: IssueKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            element_locator: None,
            fix_hint: None,
            component_id: None,
        }
    }

    pub fn error(kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Error, message)
    }

    pub fn warning(kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Warning, message)
    }

    pub fn info(kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Info, message)
    }

    /// Set the element locator
    pub fn with_element(mut self, locator: impl Into<String>) -> Self {
        self.element_locator = Some(locator.into());
        self
    }

    /// Set the fix hint
    pub fn with_fix_hint(mut self, hint: impl Into<String>) -> Self {
        self.fix_hint = Some(hint.into());
        self
    }

    /// Scope the issue to a component
    pub fn with_component(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Location string for display
    pub fn location_string(&self) -> String {
        match (&self.component_id, &self.element_locator) {
            (Some(id), Some(el)) => format!("{}:{}", id, el),
            (Some(id), None) => id.clone(),
            (None, Some(el)) => el.clone(),
            (None, None) => "<unknown>".to_string(),
        }
    }
}

/// Count issues of each severity as (errors, warnings, infos)
pub fn severity_counts<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> (usize, usize, usize) {
    issues
        .into_iter()
        .fold((0, 0, 0), |(e, w, i), issue| match issue.severity {
            Severity::Error => (e + 1, w, i),
            Severity::Warning => (e, w + 1, i),
            Severity::Info => (e, w, i + 1),
        })
}
