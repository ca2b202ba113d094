//! # ExternalSecret Model
//!
//! Typed `spec` of the External Secrets Operator `ExternalSecret` resource.
//!
//! Only the fields this tool emits are modelled. Field declaration order is
//! the order in which they are encoded.

use crate::config::StoreConfig;
use crate::error::TransformError;
use crate::normalizer::SecretDataMap;
use crate::placeholder::strip_sigil;
use serde::Serialize;

/// Reference to the (Cluster)SecretStore that talks to the vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretStoreRef {
    pub name: String,
    pub kind: String,
}

/// Template rendered by the operator into the resulting Secret
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub data: SecretDataMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub template: Template,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRef {
    pub key: String,
}

/// One vault key fetched into the template context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretData {
    pub secret_key: String,
    pub remote_ref: RemoteRef,
}

impl SecretData {
    pub fn for_key(key: &str) -> Self {
        Self {
            secret_key: key.to_string(),
            remote_ref: RemoteRef {
                key: key.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSecretSpec {
    pub refresh_interval: String,
    pub secret_store_ref: SecretStoreRef,
    pub target: Target,
    pub data: Vec<SecretData>,
}

impl ExternalSecretSpec {
    /// Build the spec for a secret's normalized data and its vault references.
    ///
    /// Every reference must carry the `.` sigil. Repeated references produce
    /// repeated `data` entries; entries are sorted by key.
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub fn build(
        config: &StoreConfig,
        template_data: SecretDataMap,
        references: &[String],
    ) -> Result<Self, TransformError> {
        let secret_store_ref = config.store_ref()?;

        let mut data = references
            .iter()
            .map(|reference| {
                strip_sigil(reference)
                    .map(SecretData::for_key)
                    .ok_or_else(|| TransformError::MissingSigil {
                        reference: reference.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        data.sort_by(|a, b| a.secret_key.cmp(&b.secret_key));

        Ok(Self {
            refresh_interval: config.refresh_interval.clone(),
            secret_store_ref,
            target: Target {
                template: Template {
                    data: template_data,
                },
            },
            data,
        })
    }
}
