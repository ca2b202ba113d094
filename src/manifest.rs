//! # Manifest Access
//!
//! Typed accessors over an untyped YAML document.
//!
//! A manifest is kept as a `serde_yaml::Value` so that fields the transformer
//! does not know about (metadata, annotations, custom fields) survive
//! re-encoding untouched. The helpers here replace ad-hoc casts with lookups
//! that fail with a structural [`TransformError`].

use crate::error::TransformError;
use serde_yaml::{Mapping, Value};

/// Structural view over a manifest mapping
pub trait ManifestExt {
    /// Look up a field by name
    fn field(&self, name: &str) -> Option<&Value>;

    /// Required string field
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    fn require_str(&self, name: &str) -> Result<&str, TransformError> {
        match self.field(name) {
            None | Some(Value::Null) => Err(TransformError::missing_field(name)),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(TransformError::field_type(name, "a string")),
        }
    }

    /// Optional mapping field; `null` counts as absent
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    fn optional_mapping(&self, name: &str) -> Result<Option<&Mapping>, TransformError> {
        match self.field(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Mapping(m)) => Ok(Some(m)),
            Some(_) => Err(TransformError::field_type(name, "a mapping")),
        }
    }
}

impl ManifestExt for Mapping {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Borrow a document as a mapping, the only shape a manifest can take
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn as_manifest(doc: &Value) -> Result<&Mapping, TransformError> {
    doc.as_mapping()
        .ok_or_else(|| TransformError::field_type("<document>", "a mapping"))
}

/// Render a scalar as plain text; mappings and sequences have no text form
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Convenience for building field keys
pub(crate) fn key(name: &str) -> Value {
    Value::String(name.to_string())
}
