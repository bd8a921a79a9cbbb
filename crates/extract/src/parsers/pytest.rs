// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! pytest-benchmark JSON output (`--benchmark-json`).

use crate::error::{ExtractError, Result};
use crate::units::human_readable;
use benchtrack_core::{BenchmarkEntry, Tool};
use serde::Deserialize;

/// Option that makes pytest-benchmark write the expected JSON.
pub const GENERATION_FLAG: &str = "--benchmark-json";

#[derive(Debug, Deserialize)]
struct Report {
    benchmarks: Vec<Benchmark>,
}

#[derive(Debug, Deserialize)]
struct Benchmark {
    fullname: String,
    stats: Stats,
}

#[derive(Debug, Deserialize)]
struct Stats {
    ops: f64,
    stddev: f64,
    /// Mean time per round in seconds.
    mean: f64,
    rounds: u64,
}

/// Parse pytest-benchmark JSON output.
pub fn parse(output: &str) -> Result<Vec<BenchmarkEntry>> {
    let report: Report = serde_json::from_str(output).map_err(|source| ExtractError::InvalidJson {
        tool: Tool::Pytest,
        flag: GENERATION_FLAG,
        source,
    })?;

    Ok(report
        .benchmarks
        .into_iter()
        .map(|bench| {
            let stats = bench.stats;
            let (mean, unit) = human_readable(stats.mean);
            BenchmarkEntry::new(bench.fullname, stats.ops, "iter/sec")
                .with_range(format!("stddev: {}", stats.stddev))
                .with_extra(format!("mean: {} {}\nrounds: {}", mean, unit, stats.rounds))
        })
        .collect())
}
