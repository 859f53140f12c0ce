// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-audit - Accessibility audit engine for page-builder components
//!
//! Inspects snapshots of user-authored UI components and produces a
//! structured accessibility report: issues, a 0-100 score, remediation
//! suggestions, and candidate field-level auto-fixes. The engine is pure:
//! it never reads or writes storage and never mutates its input.
//!
//! ## Analyzers
//!
//! - **Image** (1.1.1): alternative text, decorative images
//! - **Button** (4.1.2/1.4.3/2.5.5): accessible name, contrast, touch target
//! - **Text/Header** (1.4.3/1.3.1): contrast with large-text relief, heading levels
//! - **Form** (3.3.2): field labels, required-field announcement
//! - **Video** (1.2.2/1.4.2): captions, autoplay
//! - **Generic** (1.4.3): opacity, for every other component type
//! - **General** (2.4.3/4.1.2): tabIndex and ARIA role on every component

pub mod analyzers;
pub mod auditor;
pub mod config;
pub mod error;
pub mod fixes;
pub mod issue;
pub mod report;
pub mod scanner;
pub mod scoring;
pub mod snapshot;
pub mod suggestions;

pub use analyzers::{AnalyzerRegistry, ComponentAnalyzer};
pub use auditor::{audit_component, audit_project, Auditor};
pub use config::Config;
pub use error::{AuditError, Result};
pub use fixes::{generate_fix, FixPatch};
pub use issue::{Issue, IssueKind, Severity};
pub use report::{ComponentAnalysis, ProjectReport};
pub use snapshot::{ComponentSnapshot, Content, Payload, Styles};
