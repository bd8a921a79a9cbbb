// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end extraction over captured tool output.

use benchtrack_extract::{
    extract, extract_benches, BenchmarkEntry, Commit, CommitUser, ExtractError, Tool,
};
use serde_json::Map;

const CARGO: &str = include_str!("fixtures/cargo_output.txt");
const GO: &str = include_str!("fixtures/go_output.txt");
const BENCHMARKJS: &str = include_str!("fixtures/benchmarkjs_output.txt");
const PYTEST: &str = include_str!("fixtures/pytest_output.json");
const GOOGLECPP: &str = include_str!("fixtures/googlecpp_output.json");
const CATCH2: &str = include_str!("fixtures/catch2_output.txt");

fn commit() -> Commit {
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

fn names(benches: &[BenchmarkEntry]) -> Vec<&str> {
    benches.iter().map(|b| b.name.as_str()).collect()
}

#[test]
fn test_cargo_output() {
    let benches = extract_benches(Tool::Cargo, CARGO).unwrap();
    assert_eq!(names(&benches), ["bench_fib_10", "bench_fib_20", "bench_fib_30"]);
    assert_eq!(
        benches[1],
        BenchmarkEntry::new("bench_fib_20", 37174.0, "ns/iter").with_range("± 7527")
    );
    assert_eq!(benches[2].value, 4612093.0);
    assert_eq!(benches[2].range.as_deref(), Some("± 101211"));
}

#[test]
fn test_go_output() {
    let benches = extract_benches(Tool::Go, GO).unwrap();
    assert_eq!(names(&benches), ["BenchmarkFib10", "BenchmarkFib20", "BenchmarkAllocs"]);
    assert_eq!(benches[0].extra.as_deref(), Some("5000000 times\n8 procs"));
    assert_eq!(benches[1].value, 40537.123);
    assert_eq!(benches[1].extra.as_deref(), Some("30000 times"));
    assert!(benches[2].unit.starts_with("ns/op"));
    assert!(benches[2].unit.ends_with("3 allocs/op"));
    assert_eq!(benches[2].extra.as_deref(), Some("1000000 times\n16 procs"));
}

#[test]
fn test_benchmarkjs_output() {
    let benches = extract_benches(Tool::BenchmarkJs, BENCHMARKJS).unwrap();
    assert_eq!(
        names(&benches),
        ["fib(10)", "fib(20)", "createObjectBuffer with 200 comments"]
    );
    assert_eq!(benches[0].value, 1431759.0);
    assert_eq!(benches[1].range.as_deref(), Some("±0.32%"));
    assert_eq!(benches[2].extra.as_deref(), Some("69 samples"));
}

#[test]
fn test_pytest_output() {
    let benches = extract_benches(Tool::Pytest, PYTEST).unwrap();
    assert_eq!(names(&benches), ["bench.py::test_fib_10", "bench.py::test_fib_20"]);
    assert_eq!(benches[0].value, 41666.666);
    assert_eq!(benches[0].unit, "iter/sec");
    assert_eq!(benches[0].range.as_deref(), Some("stddev: 0.000003"));
    assert!(benches[0]
        .extra
        .as_deref()
        .unwrap()
        .ends_with(" usec\nrounds: 38225"));
    assert!(benches[1]
        .extra
        .as_deref()
        .unwrap()
        .ends_with(" msec\nrounds: 318"));
}

#[test]
fn test_googlecpp_output() {
    let benches = extract_benches(Tool::GoogleCpp, GOOGLECPP).unwrap();
    assert_eq!(names(&benches), ["fib_10", "fib_20"]);
    assert_eq!(benches[1].value, 22.95);
    assert_eq!(benches[1].unit, "us/iter");
    assert_eq!(
        benches[1].extra.as_deref(),
        Some("iterations: 30475\ncpu: 22.94 us\nthreads: 1")
    );
}

#[test]
fn test_catch2_output_with_two_sections() {
    let benches = extract_benches(Tool::Catch2, CATCH2).unwrap();
    assert_eq!(
        names(&benches),
        ["Fibonacci 10", "Fibonacci 20", "Fibonacci~ 5!", "Fibonacci-15_bench"]
    );
    assert_eq!(
        benches[1],
        BenchmarkEntry::new("Fibonacci 20", 41.731, "us")
            .with_range("± 3.0755")
            .with_extra("100 samples\n2 iterations")
    );
    assert_eq!(benches[3].value, 3.6815);
    assert_eq!(benches[3].range.as_deref(), Some("± 182"));
}

#[test]
fn test_wrong_tool_for_output() {
    // catch2 output holds no cargo bench lines
    let err = extract(Tool::Cargo, CATCH2, commit()).unwrap_err();
    assert!(matches!(err, ExtractError::NoBenchmarks { tool: Tool::Cargo, .. }));

    let err = extract(Tool::Pytest, GO, commit()).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidJson { tool: Tool::Pytest, .. }));
}

#[test]
fn test_envelope_serializes_canonical_shape() {
    let result = extract(Tool::Catch2, CATCH2, commit()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["benches", "commit", "date", "tool"]);
    assert_eq!(json["tool"], "catch2");
    assert_eq!(json["benches"].as_array().unwrap().len(), 4);
    assert_eq!(json["commit"]["author"]["username"], "dev");
}
