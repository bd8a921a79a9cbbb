// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Extraction errors.

use benchtrack_core::{ParseToolError, Tool};
use thiserror::Error;

/// Errors that can occur while extracting benchmark results.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Tool tag is not one of the supported identifiers
    #[error("FATAL: Unexpected tool: '{0}'")]
    UnknownTool(String),

    /// JSON-based output could not be parsed into the expected shape
    #[error("Output file for '{tool}' must be JSON file generated by {flag} option: {source}")]
    InvalidJson {
        /// Tool whose output was being parsed
        tool: Tool,
        /// Command-line option that makes the tool emit JSON
        flag: &'static str,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Catch2 section header without a dashed separator line after it
    #[error("Separator '------' does not appear after benchmark suite at line {line}")]
    MissingSeparator {
        /// Line number where the input ended
        line: usize,
    },

    /// Catch2 mean line did not match
    #[error("Mean values cannot be retrieved for benchmark '{name}' on parsing input '{content}' at line {line}")]
    MissingMean {
        /// Benchmark the block belongs to
        name: String,
        /// Offending line, or `EOF`
        content: String,
        /// Line number of the mean line
        line: usize,
    },

    /// Catch2 standard deviation line did not match
    #[error("Std-dev values cannot be retrieved for benchmark '{name}' on parsing '{content}' at line {line}")]
    MissingStdDev {
        /// Benchmark the block belongs to
        name: String,
        /// Offending line, or `EOF`
        content: String,
        /// Line number of the std dev line
        line: usize,
    },

    /// Catch2 block not terminated by a blank line
    #[error("Empty line is not following after 'std dev' line of benchmark '{name}' at line {line}")]
    MissingBlankLine {
        /// Benchmark the block belongs to
        name: String,
        /// Line number where the blank line was expected
        line: usize,
    },

    /// Catch2 section with a separator but no benchmark blocks
    #[error("No benchmark found for bench suite. Possibly mangled output from Catch2:\n\n{output}")]
    EmptySection {
        /// Full tool output
        output: String,
    },

    /// Well-formed output that contained no benchmark at all
    #[error("No benchmark result was found in '{tool}' output. Benchmark output was '{output}'")]
    NoBenchmarks {
        /// Tool whose output was parsed
        tool: Tool,
        /// Full tool output
        output: String,
    },

    /// I/O failure reading output or writing results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Result serialization failure
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<ParseToolError> for ExtractError {
    fn from(err: ParseToolError) -> Self {
        ExtractError::UnknownTool(err.0)
    }
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
