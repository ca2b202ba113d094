//! # Errors
//!
//! Fatal error kinds raised while transforming a manifest stream.
//!
//! Recoverable problems with a single `data` entry (bad base64, non UTF-8
//! payload) are not represented here: they are logged and the entry is skipped.

use thiserror::Error;

/// Configuration required to build an `ExternalSecret` is missing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Environment variable '${name}' is not set")]
    MissingVariable { name: &'static str },
}

/// Error type for manifest transformation
/// Every variant aborts the run
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Manifest is missing required field '{field}'")]
    MissingField { field: String },

    #[error("Manifest field '{field}' must be {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    #[error("ResourceList item {index} is not a mapping")]
    ItemNotMapping { index: usize },

    #[error("Key is missing '.' prefix '{reference}'")]
    MissingSigil { reference: String },

    #[error("Failed to encode manifest: {0}")]
    Encode(#[from] serde_yaml::Error),
}

/// Broad classification used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing store configuration
    Configuration,
    /// Input the transformer refuses to guess about
    Structural,
    /// Broken internal invariant
    Internal,
    /// YAML encoder failure
    Encoding,
}

impl TransformError {
    /// Check if this error stems from missing configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, TransformError::Config(_))
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TransformError::Config(_) => ErrorCategory::Configuration,
            TransformError::MissingField { .. }
            | TransformError::FieldType { .. }
            | TransformError::ItemNotMapping { .. } => ErrorCategory::Structural,
            TransformError::MissingSigil { .. } => ErrorCategory::Internal,
            TransformError::Encode(_) => ErrorCategory::Encoding,
        }
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        TransformError::MissingField {
            field: field.to_string(),
        }
    }

    pub(crate) fn field_type(field: &str, expected: &'static str) -> Self {
        TransformError::FieldType {
            field: field.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_names_variable() {
        let err = TransformError::from(ConfigError::MissingVariable { name: "STORE_NAME" });
        assert!(err.is_config_error());
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.to_string(),
            "Configuration error: Environment variable '$STORE_NAME' is not set"
        );
    }

    #[test]
    fn test_structural_errors_are_classified() {
        let errors = vec![
            TransformError::missing_field("kind"),
            TransformError::field_type("apiVersion", "a string"),
            TransformError::ItemNotMapping { index: 2 },
        ];

        for err in errors {
            assert_eq!(
                err.category(),
                ErrorCategory::Structural,
                "Error '{}' should be structural",
                err
            );
            assert!(!err.is_config_error());
        }
    }

    #[test]
    fn test_missing_sigil_is_internal() {
        let err = TransformError::MissingSigil {
            reference: "VALUE".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.to_string(), "Key is missing '.' prefix 'VALUE'");
    }
}
