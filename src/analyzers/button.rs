// SPDX-License-Identifier: PMPL-1.0-or-later
//! Button analyzer - WCAG 4.1.2 Name, 1.4.3 Contrast, 2.5.5 Target Size
//!
//! - Buttons need visible text or an aria-label
//! - Text/background contrast must reach the normal-text minimum
//! - Width and height must reach the minimum touch target

use crate::analyzers::contrast::check_contrast;
use crate::analyzers::ComponentAnalyzer;
use crate::config::ThresholdConfig;
use crate::issue::{Issue, IssueKind};
use crate::snapshot::{ComponentSnapshot, Content, Styles};

/// Button accessibility analyzer
pub struct ButtonAnalyzer {
    min_contrast: f64,
    min_touch_target: f64,
}

impl ButtonAnalyzer {
    pub fn new(thresholds: &ThresholdConfig) -> Self {
        Self {
            min_contrast: thresholds.min_contrast,
            min_touch_target: thresholds.min_touch_target,
        }
    }

    fn check_touch_target(&self, snapshot: &ComponentSnapshot) -> Option<Issue> {
        let (width, height) = (snapshot.width(), snapshot.height());
        let too_small = |dim: Option<f64>| dim.map(|v| v < self.min_touch_target).unwrap_or(false);
        if !too_small(width) && !too_small(height) {
            return None;
        }

        let show = |dim: Option<f64>| dim.map(|v| v.to_string()).unwrap_or_else(|| "auto".to_string());
        let element = match (too_small(width), too_small(height)) {
            (true, false) => "width",
            (false, true) => "height",
            _ => "width,height",
        };
        Some(
            Issue::warning(
                IssueKind::SmallTouchTarget,
                format!(
                    "Button size {}x{} is below the minimum touch target of {}x{}",
                    show(width),
                    show(height),
                    self.min_touch_target,
                    self.min_touch_target
                ),
            )
            .with_element(element)
            .with_fix_hint(format!(
                "Give the button at least {}px of width and height, or add padding",
                self.min_touch_target
            )),
        )
    }
}

impl ComponentAnalyzer for ButtonAnalyzer {
    fn name(&self) -> &str {
        "Button Analyzer"
    }

    fn component_types(&self) -> &[&str] {
        &["button"]
    }

    fn analyze(&self, snapshot: &ComponentSnapshot, content: &Content, styles: &Styles) -> Vec<Issue> {
        let mut issues = Vec::new();

        if content.text.is_none() && snapshot.aria_label().is_none() {
            issues.push(
                Issue::error(
                    IssueKind::MissingButtonLabel,
                    "Button has no visible text or aria-label",
                )
                .with_element("content.text")
                .with_fix_hint("Add button text, or an ariaLabel for icon-only buttons"),
            );
        }

        issues.extend(check_contrast(styles, self.min_contrast));
        issues.extend(self.check_touch_target(snapshot));

        issues
    }
}
