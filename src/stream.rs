//! # Stream Driver
//!
//! Runs the transformer over a multi-document YAML stream.
//!
//! Documents are decoded one at a time and strictly in order. Every non-null
//! document is transformed, re-encoded and followed by a `---` line, including
//! the last one. A decode error ends the stream quietly; a transform error
//! aborts the whole run.

use crate::constants::DOCUMENT_SEPARATOR;
use crate::error::TransformError;
use crate::transformer::ManifestTransformer;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::{Deserializer, Value};
use std::io::Read;
use std::path::Path;
use tracing::{debug, field, info, info_span};

/// Transform every document of `input` and assemble the output stream
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn transform_stream(
    transformer: &ManifestTransformer,
    input: &str,
) -> Result<String, TransformError> {
    let span = info_span!("transform.stream", documents.count = field::Empty);
    let _guard = span.enter();

    let mut output = String::new();
    let mut count: u64 = 0;

    for document in Deserializer::from_str(input) {
        let doc = match Value::deserialize(document) {
            Ok(doc) => doc,
            Err(e) => {
                debug!("Stopping at undecodable document: {}", e);
                break;
            }
        };

        if doc.is_null() {
            continue;
        }

        let doc = transformer.transform(doc)?;
        output.push_str(&serde_yaml::to_string(&doc)?);
        output.push_str(DOCUMENT_SEPARATOR);
        count += 1;
    }

    span.record("documents.count", count);
    info!("Transformed {} documents", count);
    Ok(output)
}

/// Read the manifest stream from a file, or stdin when no path (or `-`) is given
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn read_manifest_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .context(format!("Could not read manifest stream from {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Could not read manifest stream from STDIN")?;
            Ok(buffer)
        }
    }
}
