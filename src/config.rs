//! # Store Configuration
//!
//! Secret store settings stamped into every generated `ExternalSecret`.
//!
//! Values come from CLI flags or the `STORE_NAME`, `STORE_KIND` and
//! `REFRESH_INTERVAL` environment variables. Store name and kind are only
//! required once a secret actually needs converting, so streams without
//! vault references run without any store configuration.

use crate::constants::{
    DEFAULT_REFRESH_INTERVAL, REFRESH_INTERVAL_ENV, STORE_KIND_ENV, STORE_NAME_ENV,
};
use crate::error::ConfigError;
use crate::external_secret::SecretStoreRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub refresh_interval: String,
    pub store_name: Option<String>,
    pub store_kind: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL.to_string(),
            store_name: None,
            store_kind: None,
        }
    }
}

/// Treat empty values as unset
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl StoreConfig {
    /// Build from already-resolved values (CLI flags with env fallback)
    pub fn new(
        store_name: Option<String>,
        store_kind: Option<String>,
        refresh_interval: Option<String>,
    ) -> Self {
        Self {
            refresh_interval: non_empty(refresh_interval)
                .unwrap_or_else(|| DEFAULT_REFRESH_INTERVAL.to_string()),
            store_name: non_empty(store_name),
            store_kind: non_empty(store_kind),
        }
    }

    /// Build from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(
            lookup(STORE_NAME_ENV),
            lookup(STORE_KIND_ENV),
            lookup(REFRESH_INTERVAL_ENV),
        )
    }

    /// Resolve the store reference, failing if name or kind is unset
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub fn store_ref(&self) -> Result<SecretStoreRef, ConfigError> {
        let name = self
            .store_name
            .clone()
            .ok_or(ConfigError::MissingVariable {
                name: STORE_NAME_ENV,
            })?;
        let kind = self
            .store_kind
            .clone()
            .ok_or(ConfigError::MissingVariable {
                name: STORE_KIND_ENV,
            })?;
        Ok(SecretStoreRef { name, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_refresh_interval_defaults_to_one_hour() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("STORE_NAME", "my-test-store"),
            ("STORE_KIND", "ClusterSecretStore"),
        ]));
        assert_eq!(config.refresh_interval, "1h");

        let store_ref = config.store_ref().unwrap();
        assert_eq!(store_ref.name, "my-test-store");
        assert_eq!(store_ref.kind, "ClusterSecretStore");
    }

    #[test]
    fn test_refresh_interval_override() {
        let config = StoreConfig::from_lookup(lookup_from(&[("REFRESH_INTERVAL", "15m")]));
        assert_eq!(config.refresh_interval, "15m");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("STORE_NAME", ""),
            ("STORE_KIND", "SecretStore"),
            ("REFRESH_INTERVAL", ""),
        ]));
        assert_eq!(config.refresh_interval, "1h");
        assert_eq!(config.store_name, None);
        assert_eq!(
            config.store_ref(),
            Err(ConfigError::MissingVariable { name: "STORE_NAME" })
        );
    }

    #[test]
    fn test_missing_store_kind() {
        let config = StoreConfig::new(Some("vault".to_string()), None, None);
        assert_eq!(
            config.store_ref(),
            Err(ConfigError::MissingVariable { name: "STORE_KIND" })
        );
    }

    #[test]
    fn test_default_has_no_store() {
        let config = StoreConfig::default();
        assert_eq!(config.refresh_interval, "1h");
        assert!(config.store_ref().is_err());
    }
}
