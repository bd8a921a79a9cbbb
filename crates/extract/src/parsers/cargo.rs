// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! `cargo bench` (libtest harness) output.
//!
//! ```text
//! test bench_fib_20 ... bench:      37,174 ns/iter (+/- 7,527)
//! ```

use super::{split_lines, strip_commas};
use crate::error::Result;
use benchtrack_core::BenchmarkEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static BENCH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^test (\S+)\s+\.\.\. bench:\s+([0-9,]+) ns/iter \(\+/- ([0-9,]+)\)$")
        .expect("cargo bench pattern is valid")
});

/// Parse `cargo bench` output.
pub fn parse(output: &str) -> Result<Vec<BenchmarkEntry>> {
    let mut benches = Vec::new();

    for line in split_lines(output) {
        let Some(caps) = BENCH_LINE.captures(line) else {
            continue;
        };

        let Ok(value) = strip_commas(&caps[2]).parse::<f64>() else {
            trace!(line, "skipping cargo bench line with unparsable value");
            continue;
        };
        let range = strip_commas(&caps[3]);

        benches.push(
            BenchmarkEntry::new(&caps[1], value, "ns/iter").with_range(format!("± {}", range)),
        );
    }

    Ok(benches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_line() {
        let benches =
            parse("test bench_fib_20 ... bench:      37,174 ns/iter (+/- 7,527)").unwrap();
        assert_eq!(
            benches,
            vec![BenchmarkEntry::new("bench_fib_20", 37174.0, "ns/iter").with_range("± 7527")]
        );
        assert!(benches[0].extra.is_none());
    }

    #[test]
    fn test_skips_noise_lines() {
        let output = "\
running 3 tests
test bench_fib_10 ... bench:         135 ns/iter (+/- 24)
test tests::it_works ... ignored
test bench_fib_20 ... bench:      18,149 ns/iter (+/- 755)

test result: ok. 0 passed; 0 failed; 1 ignored; 2 measured; 0 filtered out
";
        let benches = parse(output).unwrap();
        assert_eq!(benches.len(), 2);
        assert_eq!(benches[0].name, "bench_fib_10");
        assert_eq!(benches[0].value, 135.0);
        assert_eq!(benches[0].range.as_deref(), Some("± 24"));
        assert_eq!(benches[1].name, "bench_fib_20");
        assert_eq!(benches[1].value, 18149.0);
    }

    #[test]
    fn test_accepts_crlf_line_endings() {
        let benches = parse("test a ... bench: 1 ns/iter (+/- 0)\r\n").unwrap();
        assert_eq!(benches.len(), 1);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        assert!(parse("nothing to see here").unwrap().is_empty());
    }
}
