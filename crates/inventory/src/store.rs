//! JSON-file persistence for the stock mapping.
//!
//! Two layers per operation: a `try_` variant that surfaces a [`StoreError`],
//! and a recovering wrapper (`load`/`save`) that logs the failure and falls
//! back to a safe default. The recovering wrappers preserve the original
//! swallow-and-default contract; callers that need the failure reason use the
//! `try_` variants.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::stock::Stock;

/// Default path of the persisted stock file.
pub const DEFAULT_STOCK_FILE: &str = "inventory.json";

/// Persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stock file does not exist yet.
    #[error("stock file '{path}' not found")]
    Missing { path: String },

    /// The file exists but does not hold a valid stock mapping.
    #[error("could not decode stock from '{path}': {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    /// The stock could not be serialized.
    #[error("could not encode stock for '{path}': {source}")]
    Encode {
        path: String,
        source: serde_json::Error,
    },

    /// Reading or writing the file failed.
    #[error("i/o error on stock file '{path}': {source}")]
    Io { path: String, source: io::Error },
}

/// Read and decode the stock file at `path`.
///
/// The decode target is `name → u64`, so a file whose values are negative,
/// fractional, or non-numeric is rejected as [`StoreError::Decode`].
pub fn try_load(path: impl AsRef<Path>) -> Result<Stock, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::Missing {
                path: path.display().to_string(),
            }
        } else {
            StoreError::Io {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
        path: path.display().to_string(),
        source,
    })
}

/// Load the stock file, recovering to an empty stock on any failure.
///
/// A missing file is expected on first run and logged as a warning; decode
/// and I/O failures are logged as errors. Never fails.
pub fn load(path: impl AsRef<Path>) -> Stock {
    match try_load(path) {
        Ok(stock) => stock,
        Err(err @ StoreError::Missing { .. }) => {
            tracing::warn!("{err}. Starting with an empty inventory.");
            Stock::new()
        }
        Err(err) => {
            tracing::error!("{err}. Starting with an empty inventory.");
            Stock::new()
        }
    }
}

/// Encode `stock` as 4-space-indented JSON and overwrite `path` in full.
pub fn try_save(stock: &Stock, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    stock
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Encode {
            path: path.display().to_string(),
            source,
        })?;

    fs::write(path, buf).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Save the stock file, logging and swallowing any failure.
///
/// A failed save is indistinguishable from a successful one except via the
/// log stream; use [`try_save`] to observe the failure directly.
pub fn save(stock: &Stock, path: impl AsRef<Path>) {
    if let Err(err) = try_save(stock, path) {
        tracing::error!("{err}");
    }
}
