// ABOUTME: JSON file loading for the CLI
// ABOUTME: Maps missing files and malformed documents onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use judo_core::errors::{AppError, AppResult, ErrorCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Read and deserialize one JSON document
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file, `StorageError` for other
/// read failures, and `InvalidFormat` when the document does not match `T`
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        let error = if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("file {}", path.display()))
        } else {
            AppError::storage(format!("Cannot read {}", path.display()))
        };
        error.with_source(e)
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{} is not valid input: {e}", path.display()),
        )
        .with_details(json!({ "path": path.display().to_string(), "line": e.line() }))
        .with_source(e)
    })
}

/// Read an optional JSON document
///
/// # Errors
///
/// Same as [`read_json`] when a path is given
pub async fn read_optional_json<T: DeserializeOwned>(path: Option<&Path>) -> AppResult<Option<T>> {
    match path {
        Some(path) => read_json(path).await.map(Some),
        None => Ok(None),
    }
}
