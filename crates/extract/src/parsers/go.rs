// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! `go test -bench` output.
//!
//! ```text
//! BenchmarkFib20-8           30000             41653 ns/op
//! BenchmarkDoWithConfigurer1-8            30000000                42.3 ns/op
//! ```

use super::split_lines;
use crate::error::Result;
use benchtrack_core::BenchmarkEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static BENCH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Benchmark\w+)(-\d+)?\s+(\d+)\s+([0-9.]+)\s+(.+)$")
        .expect("go bench pattern is valid")
});

/// Parse `go test -bench` output.
///
/// The unit is everything after the value, so extra metrics reported with
/// `b.ReportMetric` or `-benchmem` stay attached to it.
pub fn parse(output: &str) -> Result<Vec<BenchmarkEntry>> {
    let mut benches = Vec::new();

    for line in split_lines(output) {
        let Some(caps) = BENCH_LINE.captures(line) else {
            continue;
        };

        let Ok(value) = caps[4].parse::<f64>() else {
            trace!(line, "skipping go bench line with unparsable value");
            continue;
        };

        let mut extra = format!("{} times", &caps[3]);
        if let Some(procs) = caps.get(2) {
            extra.push_str(&format!("\n{} procs", &procs.as_str()[1..]));
        }

        benches.push(BenchmarkEntry::new(&caps[1], value, &caps[5]).with_extra(extra));
    }

    Ok(benches)
}
