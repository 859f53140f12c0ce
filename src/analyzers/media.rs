// SPDX-License-Identifier: PMPL-1.0-or-later
//! Media accessibility analyzer - WCAG 1.2.2 Captions (Level A), 1.4.2 Audio Control (Level A)
//!
//! Checks video components:
//! - Video has captions or subtitles
//! - Video does not start playing on its own

use crate::analyzers::ComponentAnalyzer;
use crate::issue::{Issue, IssueKind};
use crate::snapshot::{ComponentSnapshot, Content, Styles};

/// Video accessibility analyzer
pub struct VideoAnalyzer;

impl ComponentAnalyzer for VideoAnalyzer {
    fn name(&self) -> &str {
        "Video Analyzer"
    }

    fn component_types(&self) -> &[&str] {
        &["video"]
    }

    fn analyze(&self, _: &ComponentSnapshot, content: &Content, _: &Styles) -> Vec<Issue> {
        let mut issues = Vec::new();

        if !content.captions && !content.subtitles {
            issues.push(
                Issue::warning(IssueKind::MissingCaptions, "Video has no captions or subtitles")
                    .with_element("content.captions")
                    .with_fix_hint("Attach a captions or subtitles track for deaf and hard-of-hearing users"),
            );
        }

        if content.autoplay {
            issues.push(
                Issue::warning(
                    IssueKind::AutoplayMedia,
                    "Video plays automatically; users must be able to pause or stop it",
                )
                .with_element("content.autoplay")
                .with_fix_hint("Turn off autoplay, or show controls so playback can be paused"),
            );
        }

        issues
    }
}
