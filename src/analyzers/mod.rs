// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility analyzers for page-builder components.
//!
//! Each analyzer handles one or more component types and inspects a single
//! component's normalized content and styles. The [`AnalyzerRegistry`] maps
//! component types to analyzers; unknown types fall back to the generic
//! analyzer. The type-agnostic checks in [`general`] run on every component.
//!
//! Heading levels are validated per component only. Whether headings form a
//! logically ordered outline across a page needs sibling ordering that a
//! single-component analyzer never sees, so that check is not performed.

pub mod aria;
pub mod button;
pub mod contrast;
pub mod forms;
pub mod general;
pub mod generic;
pub mod image;
pub mod media;
pub mod text;

use crate::config::ThresholdConfig;
use crate::issue::Issue;
use crate::snapshot::{ComponentSnapshot, Content, Styles};
use std::collections::HashMap;
use std::sync::Arc;

/// Trait implemented by all per-type analyzers
pub trait ComponentAnalyzer: Send + Sync {
    /// Human-readable name of this analyzer
    fn name(&self) -> &str;

    /// Component types this analyzer handles
    fn component_types(&self) -> &[&str];

    /// Analyze one component and return the issues found, in discovery order
    fn analyze(&self, snapshot: &ComponentSnapshot, content: &Content, styles: &Styles)
        -> Vec<Issue>;
}

/// Maps component types to their analyzers
pub struct AnalyzerRegistry {
    analyzers: HashMap<String, Arc<dyn ComponentAnalyzer>>,
    fallback: Arc<dyn ComponentAnalyzer>,
}

impl AnalyzerRegistry {
    /// Empty registry that sends every component to `fallback`
    pub fn new(fallback: impl ComponentAnalyzer + 'static) -> Self {
        Self {
            analyzers: HashMap::new(),
            fallback: Arc::new(fallback),
        }
    }

    /// Registry with the built-in analyzers
    pub fn with_defaults(thresholds: &ThresholdConfig) -> Self {
        let mut registry = Self::new(generic::GenericAnalyzer::new(thresholds));
        registry.register(image::ImageAnalyzer);
        registry.register(button::ButtonAnalyzer::new(thresholds));
        registry.register(text::TextAnalyzer::new(thresholds));
        registry.register(forms::FormAnalyzer);
        registry.register(media::VideoAnalyzer);
        registry
    }

    /// Register an analyzer under every type it handles, replacing earlier ones
    pub fn register(&mut self, analyzer: impl ComponentAnalyzer + 'static) {
        let analyzer: Arc<dyn ComponentAnalyzer> = Arc::new(analyzer);
        for component_type in analyzer.component_types() {
            self.analyzers
                .insert(component_type.to_ascii_lowercase(), Arc::clone(&analyzer));
        }
    }

    /// Whether a dedicated analyzer exists for the type
    pub fn is_registered(&self, component_type: &str) -> bool {
        self.analyzers
            .contains_key(&component_type.to_ascii_lowercase())
    }

    /// Analyzer for a component type, or the fallback
    pub fn analyzer_for(&self, component_type: &str) -> &dyn ComponentAnalyzer {
        self.analyzers
            .get(&component_type.to_ascii_lowercase())
            .unwrap_or(&self.fallback)
            .as_ref()
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::with_defaults(&ThresholdConfig::default())
    }
}
