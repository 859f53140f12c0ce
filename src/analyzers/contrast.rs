// SPDX-License-Identifier: PMPL-1.0-or-later
//! Contrast estimator - WCAG 1.4.3 Contrast (Minimum)
//!
//! Converts color tokens to relative luminance and color pairs to contrast
//! ratios. Tokens that cannot be parsed get a mid-grey luminance of 0.5 so
//! that comparing a token with itself still yields exactly 1:1.

use crate::issue::{Issue, IssueKind};
use crate::snapshot::Styles;
use regex::Regex;
use std::sync::LazyLock;

/// Luminance assumed for tokens that cannot be parsed
pub const UNKNOWN_LUMINANCE: f64 = 0.5;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})").expect("valid regex")
});

/// Parse a CSS hex color (#rgb, #rrggbb, #rrggbbaa) into (r, g, b) components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 | 8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Parse an rgb() or rgba() color into (r, g, b)
pub fn parse_rgb_color(value: &str) -> Option<(u8, u8, u8)> {
    let caps = RGB_RE.captures(value)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some((r, g, b))
}

/// Parse a named CSS color
pub fn parse_named_color(name: &str) -> Option<(u8, u8, u8)> {
    match name {
        "white" => Some((255, 255, 255)),
        "black" => Some((0, 0, 0)),
        "red" => Some((255, 0, 0)),
        "green" => Some((0, 128, 0)),
        "blue" => Some((0, 0, 255)),
        "yellow" => Some((255, 255, 0)),
        "gray" | "grey" => Some((128, 128, 128)),
        "darkgray" | "darkgrey" => Some((169, 169, 169)),
        "lightgray" | "lightgrey" => Some((211, 211, 211)),
        "silver" => Some((192, 192, 192)),
        "maroon" => Some((128, 0, 0)),
        "olive" => Some((128, 128, 0)),
        "lime" => Some((0, 255, 0)),
        "aqua" | "cyan" => Some((0, 255, 255)),
        "teal" => Some((0, 128, 128)),
        "navy" => Some((0, 0, 128)),
        "fuchsia" | "magenta" => Some((255, 0, 255)),
        "purple" => Some((128, 0, 128)),
        "orange" => Some((255, 165, 0)),
        _ => None,
    }
}

/// Parse any supported CSS color token into (r, g, b)
pub fn parse_color(value: &str) -> Option<(u8, u8, u8)> {
    let trimmed = value.trim().to_lowercase();
    if trimmed.starts_with('#') {
        parse_hex_color(&trimmed)
    } else if trimmed.starts_with("rgb") {
        parse_rgb_color(&trimmed)
    } else {
        parse_named_color(&trimmed)
    }
}

/// Calculate relative luminance per WCAG 2.x
/// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    match (r, g, b) {
        (255, 255, 255) => return 1.0,
        (0, 0, 0) => return 0.0,
        _ => {}
    }
    let srgb = [r, g, b].map(|c| {
        let v = c as f64 / 255.0;
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * srgb[0] + 0.7152 * srgb[1] + 0.0722 * srgb[2]
}

/// Luminance of a color token: 1 for white, 0 for black, 0.5 when unparseable
pub fn luminance(color: &str) -> f64 {
    parse_color(color)
        .map(|(r, g, b)| relative_luminance(r, g, b))
        .unwrap_or(UNKNOWN_LUMINANCE)
}

/// Contrast ratio between two color tokens, always >= 1.0
pub fn contrast_ratio(first: &str, second: &str) -> f64 {
    let l1 = luminance(first);
    let l2 = luminance(second);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Warn when text and background colors are both set and their ratio is below `minimum`
pub fn check_contrast(styles: &Styles, minimum: f64) -> Option<Issue> {
    let (color, background) = (styles.color.as_deref()?, styles.background_color.as_deref()?);
    let ratio = contrast_ratio(color, background);
    if ratio >= minimum {
        return None;
    }
    Some(
        Issue::warning(
            IssueKind::InsufficientContrast,
            format!(
                "Insufficient color contrast ratio {:.2}:1 between {} and {} (minimum {}:1)",
                ratio, color, background, minimum
            ),
        )
        .with_element("styles.color")
        .with_fix_hint(format!(
            "Darken the text or lighten the background until the ratio reaches {}:1",
            minimum
        )),
    )
}
