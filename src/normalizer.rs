//! # Secret Normalization
//!
//! Merges a Secret's `stringData` and base64 `data` maps into one plaintext map.
//!
//! `stringData` is taken verbatim, then every `data` entry is base64-decoded
//! and added, overwriting a `stringData` entry with the same name. An entry
//! that cannot be decoded is logged and skipped; the remaining entries are
//! still normalized.

use crate::error::TransformError;
use crate::manifest::{scalar_text, ManifestExt};
use base64::{engine::general_purpose, Engine as _};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Field name to plaintext value; `None` preserves an explicit YAML null
pub type SecretDataMap = BTreeMap<String, Option<String>>;

/// Normalize the `data` and `stringData` fields of a Secret manifest
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn normalize_secret_data(manifest: &Mapping) -> Result<SecretDataMap, TransformError> {
    let mut data = SecretDataMap::new();

    if let Some(string_data) = manifest.optional_mapping("stringData")? {
        for (key, value) in string_data {
            let Some(name) = scalar_text(key) else {
                warn!("Skipping stringData entry with non-scalar key");
                continue;
            };
            match value {
                Value::Null => {
                    data.insert(name, None);
                }
                Value::Sequence(_) | Value::Mapping(_) => {
                    warn!("Skipping stringData entry {} with non-scalar value", name);
                }
                other => {
                    data.insert(name, scalar_text(other));
                }
            }
        }
    }

    if let Some(encoded) = manifest.optional_mapping("data")? {
        for (key, value) in encoded {
            let Some(name) = scalar_text(key) else {
                warn!("Skipping data entry with non-scalar key");
                continue;
            };
            if let Some(decoded) = decode_entry(&name, value) {
                data.insert(name, Some(decoded));
            }
        }
    }

    Ok(data)
}

/// Decode one base64 `data` value; failures are reported and yield `None`
fn decode_entry(name: &str, value: &Value) -> Option<String> {
    let Value::String(encoded) = value else {
        warn!("Skipping data entry {}: value is not a base64 string", name);
        return None;
    };

    // Wrapped values (block scalars) carry line breaks between base64 groups
    let unwrapped: String = encoded.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();

    match general_purpose::STANDARD.decode(unwrapped) {
        Ok(decoded) => match String::from_utf8(decoded) {
            Ok(plaintext) => Some(plaintext),
            Err(e) => {
                warn!("Failed to decode secret value for {} as UTF-8: {}", name, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to decode base64 secret value for {}: {}", name, e);
            None
        }
    }
}
