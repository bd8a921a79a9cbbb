// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Supported benchmark tools.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a tool tag is not one of the supported identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("FATAL: Unexpected tool: '{0}'")]
pub struct ParseToolError(pub String);

/// Benchmark tool whose output format is understood.
///
/// The serialized form is the lowercase wire tag (`cargo`, `go`, ...), which is
/// also what configuration files and the CLI accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// `cargo bench` output from the libtest harness.
    Cargo,
    /// `go test -bench` output.
    Go,
    /// Benchmark.js console output.
    #[serde(rename = "benchmarkjs")]
    BenchmarkJs,
    /// pytest-benchmark JSON produced with `--benchmark-json`.
    Pytest,
    /// Google Benchmark JSON produced with `--benchmark_format=json`.
    #[serde(rename = "googlecpp")]
    GoogleCpp,
    /// Catch2 `BENCHMARK` console report.
    Catch2,
}

impl Tool {
    /// Every supported tool, in declaration order.
    pub const ALL: [Tool; 6] = [
        Tool::Cargo,
        Tool::Go,
        Tool::BenchmarkJs,
        Tool::Pytest,
        Tool::GoogleCpp,
        Tool::Catch2,
    ];

    /// The wire tag for this tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cargo => "cargo",
            Self::Go => "go",
            Self::BenchmarkJs => "benchmarkjs",
            Self::Pytest => "pytest",
            Self::GoogleCpp => "googlecpp",
            Self::Catch2 => "catch2",
        }
    }

    /// Human-readable description of the tool, used by `benchtrack tools`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Cargo => "cargo bench (libtest harness)",
            Self::Go => "go test -bench",
            Self::BenchmarkJs => "Benchmark.js",
            Self::Pytest => "pytest-benchmark (--benchmark-json)",
            Self::GoogleCpp => "Google Benchmark (--benchmark_format=json)",
            Self::Catch2 => "Catch2 BENCHMARK console report",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ParseToolError(s.to_string()))
    }
}
