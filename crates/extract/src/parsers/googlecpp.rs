// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Google Benchmark JSON output (`--benchmark_format=json`).

use crate::error::{ExtractError, Result};
use benchtrack_core::{BenchmarkEntry, Tool};
use serde::Deserialize;

/// Option that makes Google Benchmark write the expected JSON.
pub const GENERATION_FLAG: &str = "--benchmark_format=json";

#[derive(Debug, Deserialize)]
struct Report {
    benchmarks: Vec<Benchmark>,
}

#[derive(Debug, Deserialize)]
struct Benchmark {
    name: String,
    real_time: f64,
    time_unit: String,
    iterations: u64,
    cpu_time: f64,
    threads: u64,
}

/// Parse Google Benchmark JSON output.
pub fn parse(output: &str) -> Result<Vec<BenchmarkEntry>> {
    let report: Report = serde_json::from_str(output).map_err(|source| ExtractError::InvalidJson {
        tool: Tool::GoogleCpp,
        flag: GENERATION_FLAG,
        source,
    })?;

    Ok(report
        .benchmarks
        .into_iter()
        .map(|b| {
            let extra = format!(
                "iterations: {}\ncpu: {} {}\nthreads: {}",
                b.iterations, b.cpu_time, b.time_unit, b.threads
            );
            BenchmarkEntry::new(b.name, b.real_time, format!("{}/iter", b.time_unit))
                .with_extra(extra)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
      "context": {
        "date": "2025-01-01 00:00:00",
        "num_cpus": 8,
        "library_build_type": "release"
      },
      "benchmarks": [
        {
          "name": "fib_10",
          "run_name": "fib_10",
          "run_type": "iteration",
          "iterations": 3748197,
          "real_time": 186.4,
          "cpu_time": 186.3,
          "time_unit": "ns",
          "threads": 1
        },
        {
          "name": "fib_20/threads:4",
          "iterations": 1000,
          "real_time": 23.5,
          "cpu_time": 90,
          "time_unit": "us",
          "threads": 4
        }
      ]
    }"#;

    #[test]
    fn test_parse_report() {
        let benches = parse(REPORT).unwrap();
        assert_eq!(benches.len(), 2);

        assert_eq!(benches[0].name, "fib_10");
        assert_eq!(benches[0].value, 186.4);
        assert_eq!(benches[0].unit, "ns/iter");
        assert!(benches[0].range.is_none());
        assert_eq!(
            benches[0].extra.as_deref(),
            Some("iterations: 3748197\ncpu: 186.3 ns\nthreads: 1")
        );

        assert_eq!(benches[1].unit, "us/iter");
        assert_eq!(
            benches[1].extra.as_deref(),
            Some("iterations: 1000\ncpu: 90 us\nthreads: 4")
        );
    }

    #[test]
    fn test_console_output_is_rejected() {
        let err = parse("Benchmark      Time     CPU   Iterations\nfib_10   186 ns  186 ns  3748197").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidJson { tool: Tool::GoogleCpp, .. }));
        assert!(err
            .to_string()
            .starts_with("Output file for 'googlecpp' must be JSON file generated by --benchmark_format=json option"));
    }
}
