// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark.js console output.
//!
//! ```text
//! fib(20) x 11,465 ops/sec ±1.12% (91 runs sampled)
//! createObjectBuffer with 200 comments x 81.61 ops/sec ±1.70% (69 runs sampled)
//! ```

use super::{split_lines, strip_commas};
use crate::error::Result;
use benchtrack_core::BenchmarkEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

const SEPARATOR: &str = " x ";

/// Matches the part of the line starting at the name separator.
static MEASUREMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ x ([0-9,.]+)\s+(\S+)\s+((?:±|\+-)[^%]+%) \((\d+) runs sampled\)$")
        .expect("benchmark.js pattern is valid")
});

/// Parse Benchmark.js output.
///
/// The name is everything before the last `" x "` on the line, so names that
/// themselves contain `" x "` are kept whole.
pub fn parse(output: &str) -> Result<Vec<BenchmarkEntry>> {
    let mut benches = Vec::new();

    for line in split_lines(output) {
        let Some(idx) = line.rfind(SEPARATOR) else {
            continue;
        };
        let (name, rest) = line.split_at(idx);

        let Some(caps) = MEASUREMENT.captures(rest) else {
            trace!(line, "skipping benchmark.js line without a measurement");
            continue;
        };

        let Ok(value) = strip_commas(&caps[1]).parse::<f64>() else {
            trace!(line, "skipping benchmark.js line with unparsable value");
            continue;
        };

        benches.push(
            BenchmarkEntry::new(name, value, &caps[2])
                .with_range(&caps[3])
                .with_extra(format!("{} samples", &caps[4])),
        );
    }

    Ok(benches)
}
