// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA role validator - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! The recognized roles are a closed set taken from WAI-ARIA 1.2, grouped
//! by category. Abstract roles (`widget`, `landmark`, `structure`, ...) are
//! deliberately absent: authors must not use them.

use serde::Serialize;

/// Landmark roles
pub const LANDMARK_ROLES: &[&str] = &[
    "banner",
    "complementary",
    "contentinfo",
    "form",
    "main",
    "navigation",
    "region",
    "search",
];

/// Widget roles, standalone and composite
pub const WIDGET_ROLES: &[&str] = &[
    "button",
    "checkbox",
    "combobox",
    "grid",
    "gridcell",
    "link",
    "listbox",
    "menu",
    "menubar",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "option",
    "progressbar",
    "radio",
    "radiogroup",
    "scrollbar",
    "searchbox",
    "slider",
    "spinbutton",
    "switch",
    "tab",
    "tablist",
    "tabpanel",
    "textbox",
    "tree",
    "treegrid",
    "treeitem",
];

/// Document structure roles
pub const DOCUMENT_STRUCTURE_ROLES: &[&str] = &[
    "application",
    "article",
    "blockquote",
    "caption",
    "cell",
    "columnheader",
    "definition",
    "directory",
    "document",
    "feed",
    "figure",
    "group",
    "heading",
    "img",
    "list",
    "listitem",
    "math",
    "meter",
    "none",
    "note",
    "paragraph",
    "presentation",
    "row",
    "rowgroup",
    "rowheader",
    "separator",
    "table",
    "term",
    "toolbar",
    "tooltip",
];

/// Live region roles
pub const LIVE_REGION_ROLES: &[&str] = &["alert", "log", "marquee", "status", "timer"];

/// Window roles
pub const WINDOW_ROLES: &[&str] = &["alertdialog", "dialog"];

/// Category a recognized role belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleCategory {
    Landmark,
    Widget,
    DocumentStructure,
    LiveRegion,
    Window,
}

const CATEGORIES: &[(RoleCategory, &[&str])] = &[
    (RoleCategory::Landmark, LANDMARK_ROLES),
    (RoleCategory::Widget, WIDGET_ROLES),
    (RoleCategory::DocumentStructure, DOCUMENT_STRUCTURE_ROLES),
    (RoleCategory::LiveRegion, LIVE_REGION_ROLES),
    (RoleCategory::Window, WINDOW_ROLES),
];

/// Category of a role token, or `None` when the token is not a recognized role
pub fn role_category(token: &str) -> Option<RoleCategory> {
    CATEGORIES
        .iter()
        .find(|(_, roles)| roles.contains(&token))
        .map(|(category, _)| *category)
}

/// Whether the token is a recognized ARIA role
pub fn is_valid_role(token: &str) -> bool {
    role_category(token).is_some()
}

/// Every recognized role, in category order
pub fn all_roles() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().flat_map(|(_, roles)| roles.iter().copied())
}
