// SPDX-License-Identifier: PMPL-1.0-or-later
//! Score calculation.
//!
//! Component scores start at 100 and lose a fixed deduction per issue.
//! Project scores average the (differently weighted) deductions over the
//! number of components. Both are clamped to 0..=100.

use crate::config::SeverityWeights;
use crate::issue::Issue;

/// Highest possible score
pub const MAX_SCORE: u8 = 100;

fn total_deduction<'a>(issues: impl IntoIterator<Item = &'a Issue>, weights: &SeverityWeights) -> u64 {
    issues
        .into_iter()
        .map(|issue| u64::from(weights.weight(issue.severity)))
        .sum()
}

/// Score for a single component's issues
pub fn component_score<'a>(issues: impl IntoIterator<Item = &'a Issue>, weights: &SeverityWeights) -> u8 {
    let deduction = total_deduction(issues, weights);
    u64::from(MAX_SCORE).saturating_sub(deduction) as u8
}

/// Project score from all issues and the number of audited components
pub fn project_score<'a>(
    issues: impl IntoIterator<Item = &'a Issue>,
    component_count: usize,
    weights: &SeverityWeights,
) -> u8 {
    if component_count == 0 {
        return MAX_SCORE;
    }
    let average = total_deduction(issues, weights) as f64 / component_count as f64;
    (f64::from(MAX_SCORE) - average).max(0.0).round() as u8
}
