// SPDX-License-Identifier: PMPL-1.0-or-later
//! Generic analyzer, used for every component type without a dedicated analyzer.

use crate::analyzers::ComponentAnalyzer;
use crate::config::ThresholdConfig;
use crate::issue::{Issue, IssueKind};
use crate::snapshot::{ComponentSnapshot, Content, Styles};

/// Fallback analyzer: only checks visibility
pub struct GenericAnalyzer {
    min_opacity: f64,
}

impl GenericAnalyzer {
    pub fn new(thresholds: &ThresholdConfig) -> Self {
        Self { min_opacity: thresholds.min_opacity }
    }
}

impl ComponentAnalyzer for GenericAnalyzer {
    fn name(&self) -> &str {
        "Generic Analyzer"
    }

    fn component_types(&self) -> &[&str] {
        &["generic"]
    }

    fn analyze(&self, _: &ComponentSnapshot, _: &Content, styles: &Styles) -> Vec<Issue> {
        match styles.opacity {
            Some(opacity) if opacity < self.min_opacity => vec![Issue::warning(
                IssueKind::LowOpacity,
                format!(
                    "Opacity {} makes the component hard to see (minimum {})",
                    opacity, self.min_opacity
                ),
            )
            .with_element("styles.opacity")
            .with_fix_hint("Raise the opacity, or hide the component from everyone if it is not meant to be seen")],
            _ => Vec::new(),
        }
    }
}
