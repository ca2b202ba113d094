//! # External Secret Transformer
//!
//! Kustomize KRM function that converts vault-referencing Secrets into ExternalSecrets.
//!
//! ## Overview
//!
//! Reads a manifest stream (or a `ResourceList`) from stdin, replaces every
//! `v1/Secret` whose values contain `{{ .Key }}` references with an
//! `external-secrets.io/v1beta1/ExternalSecret`, and writes the stream to stdout.
//!
//! ## Configuration
//!
//! - `STORE_NAME` / `--store-name`: secret store name (required to convert)
//! - `STORE_KIND` / `--store-kind`: `SecretStore` or `ClusterSecretStore` (required to convert)
//! - `REFRESH_INTERVAL` / `--refresh-interval`: defaults to `1h`
//!
//! Logs go to stderr and are controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use external_secret_transformer::{
    read_manifest_source, transform_stream, ManifestTransformer, StoreConfig,
};
use std::path::PathBuf;
use tracing::{debug, error};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    ", built ",
    env!("BUILD_DATETIME"),
    ")"
);

/// Convert vault-referencing Kubernetes Secrets into ExternalSecrets
#[derive(Debug, Parser)]
#[command(name = "external-secret-transformer")]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Manifest stream to read (defaults to stdin, `-` also means stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Name of the SecretStore referenced by generated ExternalSecrets
    #[arg(long, env = "STORE_NAME")]
    store_name: Option<String>,

    /// Kind of the secret store (SecretStore or ClusterSecretStore)
    #[arg(long, env = "STORE_KIND")]
    store_kind: Option<String>,

    /// Refresh interval for generated ExternalSecrets
    #[arg(long, env = "REFRESH_INTERVAL")]
    refresh_interval: Option<String>,
}

fn main() -> Result<()> {
    // stdout carries the manifest stream, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "external_secret_transformer=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = StoreConfig::new(cli.store_name, cli.store_kind, cli.refresh_interval);
    debug!(
        "Store configuration: name={:?}, kind={:?}, refresh={}",
        config.store_name, config.store_kind, config.refresh_interval
    );

    let input = read_manifest_source(cli.input.as_deref())?;

    let transformer = ManifestTransformer::new(config);
    let manifest = match transform_stream(&transformer, &input) {
        Ok(manifest) => manifest,
        Err(e) => {
            error!(category = ?e.category(), "Transformation aborted: {}", e);
            return Err(e).context("Failed to transform manifest stream");
        }
    };

    println!("{manifest}");
    Ok(())
}
