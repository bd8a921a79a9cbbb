// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown output generation for benchmark results.

use crate::result::BenchmarkResult;
use std::fmt::Write;

/// Generate a markdown summary of one result.
pub fn generate_summary(result: &BenchmarkResult) -> String {
    let mut output = String::new();

    writeln!(output, "# Benchmark Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Commit: [{}]({}) {}",
        short_id(result.commit.id_or_unknown()),
        result.commit.url.as_deref().unwrap_or_default(),
        first_line(result.commit.message.as_deref().unwrap_or_default())
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Tool: `{}`", result.tool).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Captured: {}", result.date.to_rfc3339()).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Benchmark | Value | Unit | Range | Extra |").unwrap();
    writeln!(output, "|-----------|-------|------|-------|-------|").unwrap();

    for bench in &result.benches {
        writeln!(
            output,
            "| {} | {} | {} | {} | {} |",
            escape_cell(&bench.name),
            bench.value,
            escape_cell(&bench.unit),
            bench.range.as_deref().map(escape_cell).unwrap_or_default(),
            bench.extra.as_deref().map(escape_cell).unwrap_or_default(),
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(output, "Total benchmarks: {}", result.benches.len()).unwrap();

    output
}

fn short_id(id: &str) -> &str {
    id.get(..7).unwrap_or(id)
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}
