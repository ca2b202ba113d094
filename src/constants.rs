//! # Constants
//!
//! Shared constants used throughout the transformer.
//!
//! API versions and kinds follow the External Secrets Operator and the
//! kustomize KRM function conventions.

/// Kind of the core Kubernetes Secret resource
pub const SECRET_KIND: &str = "Secret";

/// API version of the core Kubernetes Secret resource
pub const SECRET_API_VERSION: &str = "v1";

/// Kind of the kustomize function wrapper
pub const RESOURCE_LIST_KIND: &str = "ResourceList";

/// API version of the kustomize function wrapper
pub const RESOURCE_LIST_API_VERSION: &str = "config.kubernetes.io/v1";

/// Kind emitted in place of a converted Secret
pub const EXTERNAL_SECRET_KIND: &str = "ExternalSecret";

/// API version emitted in place of a converted Secret
pub const EXTERNAL_SECRET_API_VERSION: &str = "external-secrets.io/v1beta1";

/// Default `spec.refreshInterval` when `REFRESH_INTERVAL` is unset
pub const DEFAULT_REFRESH_INTERVAL: &str = "1h";

/// Environment variable holding the secret store name (required for conversion)
pub const STORE_NAME_ENV: &str = "STORE_NAME";

/// Environment variable holding the secret store kind (required for conversion)
pub const STORE_KIND_ENV: &str = "STORE_KIND";

/// Environment variable overriding the refresh interval
pub const REFRESH_INTERVAL_ENV: &str = "REFRESH_INTERVAL";

/// Leading character of a vault key reference inside `{{ }}`
pub const REFERENCE_SIGIL: char = '.';

/// Separator appended after every emitted document
pub const DOCUMENT_SEPARATOR: &str = "---\n";
