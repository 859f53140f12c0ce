// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form accessibility analyzer - WCAG 3.3.2 Labels or Instructions (Level A)
//!
//! Checks every entry of a form component's `fields` list:
//! - Each field has a `label` or `ariaLabel`
//! - Required fields announce themselves with `ariaRequired`
//!
//! Fields are numbered from 1 in messages and element locators.

use crate::analyzers::ComponentAnalyzer;
use crate::issue::{Issue, IssueKind};
use crate::snapshot::{ComponentSnapshot, Content, FormField, Styles};

/// Form accessibility analyzer
pub struct FormAnalyzer;

impl ComponentAnalyzer for FormAnalyzer {
    fn name(&self) -> &str {
        "Form Analyzer"
    }

    fn component_types(&self) -> &[&str] {
        &["form"]
    }

    fn analyze(&self, _: &ComponentSnapshot, content: &Content, _: &Styles) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (idx, field) in content.fields.iter().enumerate() {
            check_field(idx + 1, field, &mut issues);
        }
        issues
    }
}

fn check_field(number: usize, field: &FormField, issues: &mut Vec<Issue>) {
    let locator = format!("fields[{}]", number);

    if field.label.is_none() && field.aria_label.is_none() {
        issues.push(
            Issue::error(
                IssueKind::MissingFormFieldLabel,
                format!("Form field {} is missing a label", number),
            )
            .with_element(locator.clone())
            .with_fix_hint("Give the field a visible label, or an ariaLabel when no label fits the design"),
        );
    }

    if field.required && !field.aria_required {
        issues.push(
            Issue::info(
                IssueKind::RequiredFieldNotAnnounced,
                format!("Required form field {} should set aria-required", number),
            )
            .with_element(locator)
            .with_fix_hint("Set ariaRequired so screen readers announce the field as required"),
        );
    }
}
