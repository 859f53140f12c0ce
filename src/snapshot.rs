// SPDX-License-Identifier: PMPL-1.0-or-later
//! Component snapshots and payload normalization.
//!
//! A snapshot is the engine's sole unit of input. The `content` and `styles`
//! payloads arrive either as structured JSON or as serialized JSON text; both
//! are normalized exactly once into the typed [`Content`] and [`Styles`]
//! structures before any analyzer sees them.

use crate::error::{AuditError, Result};
use regex::Regex;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))").expect("valid regex")
});

/// Parse the leading number of a CSS-like value ("30px" -> 30, "1.5em" -> 1.5)
pub fn parse_numeric_prefix(value: &str) -> Option<f64> {
    NUMERIC_PREFIX
        .captures(value)
        .and_then(|caps| caps[1].parse().ok())
}

/// Structured-or-serialized payload as stored by the page builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// JSON text that still needs one parse step
    Serialized(String),
    /// Already-parsed JSON
    Structured(Value),
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Structured(Value::Null)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Payload::Serialized(s),
            other => Payload::Structured(other),
        }
    }
}

impl Payload {
    /// Decode into a typed structure.
    ///
    /// Serialized text is parsed once and then treated like the structured
    /// form. Only JSON objects decode; `null` and blank text mean "empty" and
    /// decode to the default, every other shape is an error.
    pub fn decode<T: DeserializeOwned + Default>(&self, field: &'static str) -> Result<T> {
        let to_error = |source: serde_json::Error| AuditError::Payload { field, source };

        let parsed;
        let value = match self {
            Payload::Serialized(text) if text.trim().is_empty() => return Ok(T::default()),
            Payload::Serialized(text) => {
                parsed = serde_json::from_str::<Value>(text).map_err(to_error)?;
                &parsed
            }
            Payload::Structured(value) => value,
        };

        match value {
            Value::Null => Ok(T::default()),
            Value::Object(_) => T::deserialize(value).map_err(to_error),
            other => Err(to_error(serde_json::Error::custom(format!(
                "expected an object, got {}",
                value_kind(other)
            )))),
        }
    }
}

/// Name of a JSON value's shape, for error messages
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A width/height value, either numeric or a CSS length string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl Dimension {
    /// Numeric value with units stripped
    pub fn value(&self) -> Option<f64> {
        match self {
            Dimension::Number(n) => Some(*n),
            Dimension::Text(s) => parse_numeric_prefix(s),
        }
    }
}

impl From<f64> for Dimension {
    fn from(n: f64) -> Self {
        Dimension::Number(n)
    }
}

impl From<&str> for Dimension {
    fn from(s: &str) -> Self {
        Dimension::Text(s.to_string())
    }
}

/// One UI component as handed over by the storage layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSnapshot {
    #[serde(deserialize_with = "lenient::identifier")]
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub content: Payload,
    #[serde(default)]
    pub styles: Payload,
    #[serde(default, deserialize_with = "lenient::dimension", skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, deserialize_with = "lenient::dimension", skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub seo_alt: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer", skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i64>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl ComponentSnapshot {
    pub fn new(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            content: Payload::default(),
            styles: Payload::default(),
            width: None,
            height: None,
            seo_alt: None,
            aria_label: None,
            role: None,
            tab_index: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<Payload>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_styles(mut self, styles: impl Into<Payload>) -> Self {
        self.styles = styles.into();
        self
    }

    pub fn with_size(mut self, width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }

    pub fn with_seo_alt(mut self, alt: impl Into<String>) -> Self {
        self.seo_alt = Some(alt.into());
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_tab_index(mut self, tab_index: i64) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// SEO alt text, ignoring blank values
    pub fn seo_alt(&self) -> Option<&str> {
        non_blank(self.seo_alt.as_ref())
    }

    /// ARIA label, ignoring blank values
    pub fn aria_label(&self) -> Option<&str> {
        non_blank(self.aria_label.as_ref())
    }

    /// Declared role, ignoring blank values
    pub fn role(&self) -> Option<&str> {
        non_blank(self.role.as_ref())
    }

    pub fn width(&self) -> Option<f64> {
        self.width.as_ref().and_then(Dimension::value)
    }

    pub fn height(&self) -> Option<f64> {
        self.height.as_ref().and_then(Dimension::value)
    }

    /// Decode the content payload
    pub fn parse_content(&self) -> Result<Content> {
        self.content.decode("content")
    }

    /// Decode the styles payload
    pub fn parse_styles(&self) -> Result<Styles> {
        self.styles.decode("styles")
    }
}

/// Typed view of a component's content payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub alt: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub decorative: bool,
    #[serde(deserialize_with = "lenient::number")]
    pub level: Option<f64>,
    #[serde(deserialize_with = "lenient::objects")]
    pub fields: Vec<FormField>,
    #[serde(deserialize_with = "lenient::present")]
    pub captions: bool,
    #[serde(deserialize_with = "lenient::present")]
    pub subtitles: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub autoplay: bool,
}

/// One entry of a form component's `fields` list
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormField {
    #[serde(deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub aria_label: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub required: bool,
    #[serde(deserialize_with = "lenient::present")]
    pub aria_required: bool,
}

/// Typed view of a component's styles payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Styles {
    #[serde(deserialize_with = "lenient::text")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub font_size: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub opacity: Option<f64>,
}

/// Forgiving field decoders for page-builder payloads, which mix numbers,
/// numeric strings and booleans freely.
mod lenient {
    use super::{parse_numeric_prefix, value_kind, Dimension};
    use serde::de::{DeserializeOwned, Error};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Non-blank string (numbers are stringified)
    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Number or numeric-prefixed string
    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => parse_numeric_prefix(&s),
            _ => None,
        })
    }

    /// Explicitly true: `true` or the string "true"
    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        })
    }

    /// Set to anything meaningful (a track URL counts, `false`/""/0 do not)
    pub fn present<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => {
                let s = s.trim();
                !s.is_empty() && !s.eq_ignore_ascii_case("false")
            }
            Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        })
    }

    /// Whole number, integral float or integer string; anything else is absent
    pub fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|v| v.fract() == 0.0).map(|v| v as i64)),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// Width/height as a number or CSS length; other shapes are absent
    pub fn dimension<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Dimension>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n.as_f64().map(Dimension::Number),
            Some(Value::String(s)) => Some(Dimension::Text(s)),
            _ => None,
        })
    }

    /// Sequence of objects where `null` means empty; non-object entries are errors
    pub fn objects<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Option::<Vec<Value>>::deserialize(d)?
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| match entry {
                Value::Object(_) => T::deserialize(entry).map_err(D::Error::custom),
                other => Err(D::Error::custom(format!(
                    "entry {} must be an object, got {}",
                    idx + 1,
                    value_kind(&other)
                ))),
            })
            .collect()
    }

    /// Component id given as string or number
    pub fn identifier<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        match Value::deserialize(d)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "component id must be a string or number, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(parse_numeric_prefix("30px"), Some(30.0));
        assert_eq!(parse_numeric_prefix(" 1.5em"), Some(1.5));
        assert_eq!(parse_numeric_prefix(".25"), Some(0.25));
        assert_eq!(parse_numeric_prefix("-2"), Some(-2.0));
        assert_eq!(parse_numeric_prefix("auto"), None);
    }

    #[test]
    fn test_structured_and_serialized_content_agree() {
        let structured = ComponentSnapshot::new("c1", "button")
            .with_content(json!({"text": "Buy", "level": "2"}));
        let serialized = ComponentSnapshot::new("c1", "button")
            .with_content(json!(r#"{"text": "Buy", "level": 2}"#));

        let a = structured.parse_content().unwrap();
        let b = serialized.parse_content().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.text.as_deref(), Some("Buy"));
        assert_eq!(a.level, Some(2.0));
    }

    #[test]
    fn test_empty_payloads_decode_to_default() {
        let snapshot = ComponentSnapshot::new("c1", "text").with_styles(json!(""));
        assert_eq!(snapshot.parse_content().unwrap(), Content::default());
        assert_eq!(snapshot.parse_styles().unwrap(), Styles::default());
    }

    #[test]
    fn test_malformed_serialized_payload_is_an_error() {
        let snapshot = ComponentSnapshot::new("c1", "text").with_content(json!("{not json"));
        let err = snapshot.parse_content().unwrap_err();
        assert!(matches!(err, AuditError::Payload { field: "content", .. }));
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let snapshot = ComponentSnapshot::new("c1", "form").with_content(json!([1, 2, 3]));
        assert!(snapshot.parse_content().is_err());
    }

    #[test]
    fn test_arrays_are_not_read_positionally() {
        for content in [json!(["Buy"]), json!("[null, \"logo\"]"), json!(7), json!("\"text\"")] {
            let snapshot = ComponentSnapshot::new("c1", "image").with_content(content.clone());
            let err = snapshot.parse_content().unwrap_err();
            assert!(err.to_string().contains("expected an object"), "{content}: {err}");
        }

        let snapshot = ComponentSnapshot::new("c1", "button").with_styles(json!(["#000", "#fff"]));
        assert!(snapshot.parse_styles().is_err());
    }

    #[test]
    fn test_null_is_empty_in_both_forms() {
        let structured = ComponentSnapshot::new("c1", "text").with_content(json!(null));
        let serialized = ComponentSnapshot::new("c1", "text").with_content(json!("null"));
        assert_eq!(structured.parse_content().unwrap(), Content::default());
        assert_eq!(serialized.parse_content().unwrap(), Content::default());
        assert_eq!(serialized.parse_styles().unwrap(), Styles::default());
    }

    #[test]
    fn test_form_fields_must_be_objects() {
        let snapshot =
            ComponentSnapshot::new("f1", "form").with_content(json!({"fields": [{"label": "Name"}, ["Email"]]}));
        let err = snapshot.parse_content().unwrap_err();
        assert!(err.to_string().contains("entry 2"), "{err}");
    }

    #[test]
    fn test_mistyped_snapshot_fields_are_tolerated() {
        let snapshot: ComponentSnapshot = serde_json::from_value(json!({
            "id": "b",
            "type": "button",
            "tabIndex": "0",
            "seoAlt": 42,
            "ariaLabel": false,
            "role": null,
            "width": {"value": 30},
            "height": "48px"
        }))
        .unwrap();
        assert_eq!(snapshot.tab_index, Some(0));
        assert_eq!(snapshot.seo_alt(), Some("42"));
        assert!(snapshot.aria_label().is_none());
        assert!(snapshot.role().is_none());
        assert!(snapshot.width.is_none());
        assert_eq!(snapshot.height(), Some(48.0));

        let fractional: ComponentSnapshot =
            serde_json::from_value(json!({"id": "c", "type": "text", "tabIndex": 1.5})).unwrap();
        assert!(fractional.tab_index.is_none());
    }

    #[test]
    fn test_lenient_flags() {
        let content: Content = serde_json::from_value(json!({
            "decorative": "true",
            "autoplay": 1,
            "captions": "captions.vtt",
            "subtitles": false
        }))
        .unwrap();
        assert!(content.decorative);
        assert!(!content.autoplay);
        assert!(content.captions);
        assert!(!content.subtitles);
    }

    #[test]
    fn test_blank_strings_are_absent() {
        let content: Content = serde_json::from_value(json!({"text": "  ", "alt": null})).unwrap();
        assert!(content.text.is_none());
        assert!(content.alt.is_none());

        let snapshot = ComponentSnapshot::new("c1", "image").with_seo_alt("   ");
        assert!(snapshot.seo_alt().is_none());
    }

    #[test]
    fn test_styles_strip_units() {
        let styles: Styles = serde_json::from_value(json!({
            "color": "#000",
            "backgroundColor": "#fff",
            "fontSize": "24px",
            "opacity": "0.2"
        }))
        .unwrap();
        assert_eq!(styles.font_size, Some(24.0));
        assert_eq!(styles.opacity, Some(0.2));
        assert_eq!(styles.background_color.as_deref(), Some("#fff"));
    }

    #[test]
    fn test_snapshot_from_storage_json() {
        let snapshot: ComponentSnapshot = serde_json::from_value(json!({
            "id": 42,
            "type": "button",
            "content": "{\"text\":\"Go\"}",
            "styles": {"color": "white"},
            "width": "30px",
            "height": 48,
            "ariaLabel": "Go",
            "tabIndex": 0
        }))
        .unwrap();
        assert_eq!(snapshot.id, "42");
        assert_eq!(snapshot.width(), Some(30.0));
        assert_eq!(snapshot.height(), Some(48.0));
        assert_eq!(snapshot.aria_label(), Some("Go"));
        assert_eq!(snapshot.tab_index, Some(0));
        assert!(matches!(snapshot.content, Payload::Serialized(_)));
    }
}
