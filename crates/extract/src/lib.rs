// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark output extraction for benchtrack.
//!
//! This crate turns the raw output of a benchmark tool into the canonical
//! [`BenchmarkResult`] envelope.
//!
//! # Quick Start
//!
//! ```
//! use benchtrack_extract::{extract_benches, Tool};
//!
//! let output = "test bench_fib_20 ... bench:      37,174 ns/iter (+/- 7,527)";
//! let benches = extract_benches(Tool::Cargo, output).unwrap();
//!
//! assert_eq!(benches[0].name, "bench_fib_20");
//! assert_eq!(benches[0].value, 37174.0);
//! assert_eq!(benches[0].range.as_deref(), Some("± 7527"));
//! ```
//!
//! # Modules
//!
//! - [`parsers`] - One parser per supported tool
//! - [`units`] - Scaling of raw seconds into a readable unit
//! - [`result`] - The canonical `BenchmarkResult` struct
//! - [`io`] - Reading tool output and writing results
//! - [`markdown`] - Markdown summary generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod io;
pub mod markdown;
pub mod parsers;
pub mod result;
pub mod units;

pub use benchtrack_core::{BenchmarkEntry, Commit, CommitUser, Tool};
pub use error::{ExtractError, Result};
pub use result::BenchmarkResult;

use tracing::debug;

/// Parse `output` with the parser for `tool`.
///
/// Fails with [`ExtractError::NoBenchmarks`] when the output is well formed
/// but contains no benchmark at all.
pub fn extract_benches(tool: Tool, output: &str) -> Result<Vec<BenchmarkEntry>> {
    let benches = match tool {
        Tool::Cargo => parsers::cargo::parse(output)?,
        Tool::Go => parsers::go::parse(output)?,
        Tool::BenchmarkJs => parsers::benchmarkjs::parse(output)?,
        Tool::Pytest => parsers::pytest::parse(output)?,
        Tool::GoogleCpp => parsers::googlecpp::parse(output)?,
        Tool::Catch2 => parsers::catch2::parse(output)?,
    };

    if benches.is_empty() {
        return Err(ExtractError::NoBenchmarks {
            tool,
            output: output.to_string(),
        });
    }

    debug!(%tool, count = benches.len(), "extracted benchmarks");
    Ok(benches)
}

/// Parse `output` and assemble the result envelope for `commit`.
///
/// This is the canonical entrypoint. The envelope's `date` is the time of
/// this call.
pub fn extract(tool: Tool, output: &str, commit: Commit) -> Result<BenchmarkResult> {
    let benches = extract_benches(tool, output)?;
    Ok(BenchmarkResult::new(commit, tool, benches))
}

/// Like [`extract`], but takes the tool as its wire tag.
pub fn extract_tagged(tool: &str, output: &str, commit: Commit) -> Result<BenchmarkResult> {
    extract(tool.parse()?, output, commit)
}

#[cfg(test)]
pub(crate) mod test_support {
    use benchtrack_core::{Commit, CommitUser};
    use serde_json::Map;

    pub fn commit() -> Commit {
        Commit {
            author: Some(CommitUser::from_login("dev")),
            committer: Some(CommitUser::from_login("dev")),
            id: Some("0123456789abcdef".to_string()),
            message: Some("Speed up fib".to_string()),
            timestamp: Some("2025-01-02T03:04:05Z".to_string()),
            url: Some("https://github.com/owner/repo/commit/0123456789abcdef".to_string()),
            other: Map::new(),
        }
    }
}
