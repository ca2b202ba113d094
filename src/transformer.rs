//! # Manifest Transformer
//!
//! Replaces vault-referencing `Secret` manifests with `ExternalSecret` manifests.
//!
//! ## Rules
//!
//! - `v1/Secret` with at least one `{{ .Key }}` reference in its values is
//!   converted; a Secret without references passes through
//! - `config.kubernetes.io/v1/ResourceList` has every item transformed in place
//! - every other kind passes through unchanged
//!
//! Converted manifests keep all fields except `data`, `stringData` and `type`;
//! `kind` and `apiVersion` are rewritten and `spec` is added.

use crate::config::StoreConfig;
use crate::constants::{
    EXTERNAL_SECRET_API_VERSION, EXTERNAL_SECRET_KIND, RESOURCE_LIST_API_VERSION,
    RESOURCE_LIST_KIND, SECRET_API_VERSION, SECRET_KIND,
};
use crate::error::TransformError;
use crate::external_secret::ExternalSecretSpec;
use crate::manifest::{as_manifest, key, ManifestExt};
use crate::normalizer::normalize_secret_data;
use crate::placeholder::extract_from_optional;
use serde_yaml::{Mapping, Value};
use tracing::{debug, info};

/// What a manifest is, as far as the transformer cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestClass {
    Secret,
    ResourceList,
    Other,
}

fn classify(manifest: &Mapping) -> Result<ManifestClass, TransformError> {
    let kind = manifest.require_str("kind")?;
    let api_version = manifest.require_str("apiVersion")?;

    Ok(match (api_version, kind) {
        (SECRET_API_VERSION, SECRET_KIND) => ManifestClass::Secret,
        (RESOURCE_LIST_API_VERSION, RESOURCE_LIST_KIND) => ManifestClass::ResourceList,
        _ => ManifestClass::Other,
    })
}

/// Transforms single manifests using a fixed store configuration
#[derive(Debug, Clone)]
pub struct ManifestTransformer {
    config: StoreConfig,
}

impl ManifestTransformer {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Transform one decoded document, returning the document to emit in its place
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub fn transform(&self, doc: Value) -> Result<Value, TransformError> {
        let class = classify(as_manifest(&doc)?)?;

        match (class, doc) {
            (ManifestClass::Secret, Value::Mapping(manifest)) => {
                self.transform_secret(manifest).map(Value::Mapping)
            }
            (ManifestClass::ResourceList, Value::Mapping(manifest)) => {
                self.transform_resource_list(manifest).map(Value::Mapping)
            }
            (_, doc) => Ok(doc),
        }
    }

    fn transform_secret(&self, mut manifest: Mapping) -> Result<Mapping, TransformError> {
        let data = normalize_secret_data(&manifest)?;

        let references: Vec<String> = data
            .values()
            .flat_map(|value| extract_from_optional(value.as_deref()))
            .collect();

        if references.is_empty() {
            debug!(
                "Secret {} has no vault references, passing through",
                secret_name(&manifest)
            );
            return Ok(manifest);
        }

        let spec = ExternalSecretSpec::build(&self.config, data, &references)?;
        info!(
            "Converting Secret {} to ExternalSecret with {} remote references",
            secret_name(&manifest),
            spec.data.len()
        );

        manifest.insert(key("kind"), Value::from(EXTERNAL_SECRET_KIND));
        manifest.insert(key("apiVersion"), Value::from(EXTERNAL_SECRET_API_VERSION));
        manifest.shift_remove("data");
        manifest.shift_remove("stringData");
        manifest.shift_remove("type");
        manifest.insert(key("spec"), serde_yaml::to_value(&spec)?);

        Ok(manifest)
    }

    fn transform_resource_list(&self, mut manifest: Mapping) -> Result<Mapping, TransformError> {
        match manifest.get_mut("items") {
            None | Some(Value::Null) => {}
            Some(Value::Sequence(items)) => {
                debug!("Transforming ResourceList with {} items", items.len());

                let transformed = std::mem::take(items)
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        if item.is_mapping() {
                            self.transform(item)
                        } else {
                            Err(TransformError::ItemNotMapping { index })
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                *items = transformed;
            }
            Some(_) => return Err(TransformError::field_type("items", "a sequence")),
        }

        Ok(manifest)
    }
}

/// `metadata.name` for log messages
fn secret_name(manifest: &Mapping) -> &str {
    manifest
        .get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
}
