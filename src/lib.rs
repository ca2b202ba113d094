//! External Secret Transformer Library
//!
//! Rewrites Kubernetes `Secret` manifests whose values reference vault keys
//! (`{{ .Name }}`) into External Secrets Operator `ExternalSecret` manifests.
//! Plain manifest streams and kustomize `ResourceList` wrappers are supported.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use external_secret_transformer::{transform_stream, ManifestTransformer, StoreConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transformer = ManifestTransformer::new(StoreConfig::from_env());
//! let output = transform_stream(&transformer, "apiVersion: v1\nkind: ConfigMap\n")?;
//! print!("{output}");
//! # Ok(())
//! # }
//! ```
//!
//! Tests are included in the module files.

pub mod config;
pub mod constants;
pub mod error;
pub mod external_secret;
pub mod manifest;
pub mod normalizer;
pub mod placeholder;
pub mod stream;
pub mod transformer;

// Re-export public API
pub use config::StoreConfig;
pub use error::{ConfigError, TransformError};
pub use external_secret::ExternalSecretSpec;
pub use stream::{read_manifest_source, transform_stream};
pub use transformer::ManifestTransformer;
