// SPDX-License-Identifier: PMPL-1.0-or-later
//! Type-agnostic checks applied to every component - WCAG 2.4.3 Focus Order, 4.1.2 Name, Role, Value
//!
//! - `tabIndex` below -1 is outside any predictable focus order
//! - `role` must be a recognized ARIA role

use crate::analyzers::aria::is_valid_role;
use crate::config::ThresholdConfig;
use crate::issue::{Issue, IssueKind};
use crate::snapshot::ComponentSnapshot;

/// Run the general pass on one component
pub fn check(snapshot: &ComponentSnapshot, thresholds: &ThresholdConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(tab_index) = snapshot.tab_index.filter(|t| *t < thresholds.min_tab_index) {
        issues.push(
            Issue::warning(
                IssueKind::InvalidTabIndex,
                format!("Invalid tabIndex {}; values below -1 break keyboard focus order", tab_index),
            )
            .with_element("tabIndex")
            .with_fix_hint("Use tabIndex 0 to follow document order, or -1 to allow only programmatic focus"),
        );
    }

    if let Some(role) = snapshot.role().filter(|r| !is_valid_role(r)) {
        issues.push(
            Issue::error(
                IssueKind::InvalidRole,
                format!("Role \"{}\" is not a recognized ARIA role", role),
            )
            .with_element("role")
            .with_fix_hint("Use a WAI-ARIA role such as button, navigation or dialog, or remove the role"),
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Severity;

    fn run(snapshot: &ComponentSnapshot) -> Vec<Issue> {
        check(snapshot, &ThresholdConfig::default())
    }

    #[test]
    fn test_tab_index_below_minus_one() {
        let issues = run(&ComponentSnapshot::new("c1", "text").with_tab_index(-2));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InvalidTabIndex);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_tab_index_accepted_values() {
        for tab_index in [-1, 0, 3] {
            assert!(run(&ComponentSnapshot::new("c1", "text").with_tab_index(tab_index)).is_empty());
        }
    }

    #[test]
    fn test_invalid_role() {
        let issues = run(&ComponentSnapshot::new("c1", "text").with_role("clickable"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InvalidRole);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.contains("ARIA"));
    }

    #[test]
    fn test_valid_and_blank_roles() {
        assert!(run(&ComponentSnapshot::new("c1", "text").with_role("navigation")).is_empty());
        assert!(run(&ComponentSnapshot::new("c1", "text").with_role(" ")).is_empty());
    }

    #[test]
    fn test_both_checks_in_order() {
        let snapshot = ComponentSnapshot::new("c1", "text").with_tab_index(-5).with_role("hero");
        let kinds: Vec<_> = run(&snapshot).iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::InvalidTabIndex, IssueKind::InvalidRole]);
    }
}
