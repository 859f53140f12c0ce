// SPDX-License-Identifier: PMPL-1.0-or-later
//! Text and heading analyzer - WCAG 1.4.3 Contrast (Minimum), 1.3.1 Info and Relationships
//!
//! Large text (font size at or above the large-text threshold) gets the
//! relaxed contrast minimum. Headings must declare a level between 1 and 6.

use crate::analyzers::contrast::check_contrast;
use crate::analyzers::ComponentAnalyzer;
use crate::config::ThresholdConfig;
use crate::issue::{Issue, IssueKind};
use crate::snapshot::{ComponentSnapshot, Content, Styles};

/// Text/heading analyzer
pub struct TextAnalyzer {
    min_contrast: f64,
    large_text_contrast: f64,
    large_text_size: f64,
}

impl TextAnalyzer {
    pub fn new(thresholds: &ThresholdConfig) -> Self {
        Self {
            min_contrast: thresholds.min_contrast,
            large_text_contrast: thresholds.large_text_contrast,
            large_text_size: thresholds.large_text_size,
        }
    }

    /// Contrast minimum for the given font size
    pub fn required_contrast(&self, font_size: Option<f64>) -> f64 {
        match font_size {
            Some(size) if size >= self.large_text_size => self.large_text_contrast,
            _ => self.min_contrast,
        }
    }
}

fn is_valid_heading_level(level: f64) -> bool {
    level.fract() == 0.0 && (1.0..=6.0).contains(&level)
}

impl ComponentAnalyzer for TextAnalyzer {
    fn name(&self) -> &str {
        "Text Analyzer"
    }

    fn component_types(&self) -> &[&str] {
        &["text", "header"]
    }

    fn analyze(&self, snapshot: &ComponentSnapshot, content: &Content, styles: &Styles) -> Vec<Issue> {
        let mut issues = Vec::new();

        issues.extend(check_contrast(styles, self.required_contrast(styles.font_size)));

        if snapshot.component_type.eq_ignore_ascii_case("header") {
            if let Some(level) = content.level.filter(|l| !is_valid_heading_level(*l)) {
                issues.push(
                    Issue::error(
                        IssueKind::InvalidHeadingLevel,
                        format!("Heading level {} is outside the valid range 1-6", level),
                    )
                    .with_element("content.level")
                    .with_fix_hint("Use a heading level from 1 to 6"),
                );
            }
        }

        issues
    }
}
