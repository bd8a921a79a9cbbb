// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark entry type.

use serde::{Deserialize, Serialize};

/// One measured benchmark case.
///
/// `range` and `extra` are only present when the tool reports them; they are
/// omitted from the serialized form otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    /// Benchmark case name as printed by the tool.
    pub name: String,
    /// Measured value. Its meaning depends on the tool (time per iteration, ops/sec, ...).
    pub value: f64,
    /// Unit label for `value`, e.g. `ns/iter` or `ops/sec`.
    pub unit: String,
    /// Measurement spread, e.g. `± 1234` or `stddev: 0.003`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Tool-specific context such as sample or iteration counts, one fact per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl BenchmarkEntry {
    /// Create an entry with no range or extra information.
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            range: None,
            extra: None,
        }
    }

    /// Attach a measurement spread.
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Attach auxiliary tool-specific context.
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }
}
