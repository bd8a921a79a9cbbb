// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! I/O operations for benchmark output and results.
//!
//! This module reads raw tool output from the filesystem and writes
//! assembled results as JSON.

use crate::error::{ExtractError, Result};
use crate::result::BenchmarkResult;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read raw tool output from a file.
pub fn read_output(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let output = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = output.len(), "read benchmark output");
    Ok(output)
}

/// Serialize a result as pretty-printed JSON.
pub fn result_to_json(result: &BenchmarkResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(ExtractError::Serialize)
}

/// Write a result to a JSON file, creating parent directories as needed.
pub fn write_result_json(result: &BenchmarkResult, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result_to_json(result)?)?;
    debug!(path = %path.display(), "wrote benchmark result");
    Ok(())
}

/// Read a result back from a JSON file.
pub fn read_result_json(path: impl AsRef<Path>) -> Result<BenchmarkResult> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(ExtractError::Serialize)
}
