// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark result envelope.
//!
//! This module provides the canonical `BenchmarkResult` struct that downstream
//! consumers store and compare across commits.

use benchtrack_core::{BenchmarkEntry, Commit, Tool};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical benchmark result structure.
///
/// `date` is serialized as milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Commit the benchmarks were run against.
    pub commit: Commit,
    /// Time the result was assembled.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// Tool whose output was parsed.
    pub tool: Tool,
    /// Parsed entries in order of appearance.
    pub benches: Vec<BenchmarkEntry>,
}

impl BenchmarkResult {
    /// Create a new BenchmarkResult stamped with the current time.
    pub fn new(commit: Commit, tool: Tool, benches: Vec<BenchmarkEntry>) -> Self {
        Self {
            commit,
            date: Utc::now(),
            tool,
            benches,
        }
    }
}
