//! Common test utilities for stream transformation tests
//!
//! Fixture loading, a configured transformer, and output parsing.

#![allow(dead_code, reason = "Not every test binary uses every helper")]

use external_secret_transformer::{ManifestTransformer, StoreConfig};
use serde::Deserialize;
use serde_yaml::{Deserializer, Value};
use std::collections::HashMap;
use std::path::PathBuf;

/// Read a file from `tests/fixtures`
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", path.display(), e))
}

/// Store configuration as it would come from the environment
pub fn test_config(vars: &[(&str, &str)]) -> StoreConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    StoreConfig::from_lookup(|name| vars.get(name).cloned())
}

/// Transformer configured with `my-test-store` / `ClusterSecretStore`
pub fn test_transformer() -> ManifestTransformer {
    ManifestTransformer::new(test_config(&[
        ("STORE_NAME", "my-test-store"),
        ("STORE_KIND", "ClusterSecretStore"),
    ]))
}

/// Parse every non-null document of a stream
pub fn parse_documents(stream: &str) -> Vec<Value> {
    Deserializer::from_str(stream)
        .map(|doc| Value::deserialize(doc).expect("output stream should be valid YAML"))
        .filter(|doc| !doc.is_null())
        .collect()
}

/// `spec.data[*].secretKey` in emitted order
pub fn secret_keys(doc: &Value) -> Vec<String> {
    doc["spec"]["data"]
        .as_sequence()
        .expect("spec.data should be a sequence")
        .iter()
        .map(|entry| {
            entry["secretKey"]
                .as_str()
                .expect("secretKey should be a string")
                .to_string()
        })
        .collect()
}
