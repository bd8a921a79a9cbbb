// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Catch2 `BENCHMARK` console report.
//!
//! The report is made of sections. Each section starts with a three-line
//! header, a dashed separator, and then one block per benchmark:
//!
//! ```text
//! benchmark name                       samples       iterations    estimated
//!                                      mean          low mean      high mean
//!                                      std dev       low std dev   high std dev
//! -------------------------------------------------------------------------------
//! Fibonacci 20                                   100             2     8.4318 ms
//!                                         43.186 us     41.402 us     46.246 us
//!                                         11.719 us      7.847 us     17.747 us
//!
//! ```
//!
//! A block is the start line (name, samples, iterations, estimate), the mean
//! line, the standard deviation line and a blank line. Any deviation from that
//! shape inside a section is an error carrying the 1-based line number.

use super::split_lines;
use crate::error::{ExtractError, Result};
use benchtrack_core::BenchmarkEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^benchmark name\s+samples\s+iterations\s+estimated")
        .expect("catch2 header pattern is valid")
});

static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-+$").expect("catch2 separator pattern is valid"));

static BENCHMARK_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+) +(\d+) +(?:\d+(?:\.\d+)?) (?:ns|us|ms|s)\s*$")
        .expect("catch2 start pattern is valid")
});

static BENCHMARK_VALUES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^ +(\d+(?:\.\d+)?) (ns|us|ms|s) +(?:\d+(?:\.\d+)?) (?:ns|us|ms|s) +(?:\d+(?:\.\d+)?) (?:ns|us|ms|s)",
    )
    .expect("catch2 values pattern is valid")
});

static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*$").expect("catch2 blank pattern is valid"));

/// Forward-only cursor over the report lines.
///
/// Line numbers are 1-based. Reading past the end returns `None` along with
/// the number the next line would have had.
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(output: &'a str) -> Self {
        Self {
            lines: split_lines(output),
            pos: 0,
        }
    }

    /// Line number of the line [`advance`](Self::advance) would return.
    fn line_number(&self) -> usize {
        self.pos + 1
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) -> (Option<&'a str>, usize) {
        let num = self.line_number();
        let line = self.peek();
        self.pos += 1;
        (line, num)
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }
}

/// Parse a Catch2 console report.
pub fn parse(output: &str) -> Result<Vec<BenchmarkEntry>> {
    let mut cursor = LineCursor::new(output);
    let mut benches = Vec::new();

    while !cursor.is_exhausted() {
        let (Some(line), num) = cursor.advance() else {
            break;
        };
        if !SECTION_HEADER.is_match(line) {
            continue;
        }
        debug!(line = num, "found catch2 benchmark section");

        seek_separator(&mut cursor)?;

        let before = benches.len();
        while let Some(bench) = parse_block(&mut cursor)? {
            benches.push(bench);
        }
        if benches.len() == before {
            return Err(ExtractError::EmptySection {
                output: output.to_string(),
            });
        }
    }

    Ok(benches)
}

fn seek_separator(cursor: &mut LineCursor<'_>) -> Result<()> {
    loop {
        match cursor.advance() {
            (None, line) => return Err(ExtractError::MissingSeparator { line }),
            (Some(line), _) if SEPARATOR.is_match(line) => return Ok(()),
            _ => {}
        }
    }
}

/// Parse one benchmark block.
///
/// Returns `Ok(None)` without consuming anything when the next line does not
/// start a block, which ends the current section.
fn parse_block(cursor: &mut LineCursor<'_>) -> Result<Option<BenchmarkEntry>> {
    let Some(start_line) = cursor.peek() else {
        return Ok(None);
    };
    let Some(start) = BENCHMARK_START.captures(start_line) else {
        return Ok(None);
    };
    cursor.advance();

    let name = start_line[..start.get(0).map_or(0, |m| m.start())]
        .trim()
        .to_string();
    let extra = format!("{} samples\n{} iterations", &start[1], &start[2]);

    let (mean_line, line) = cursor.advance();
    let mean = mean_line
        .and_then(|l| BENCHMARK_VALUES.captures(l))
        .and_then(|caps| Some((caps[1].parse::<f64>().ok()?, caps[2].to_string())));
    let Some((value, unit)) = mean else {
        return Err(ExtractError::MissingMean {
            name,
            content: mean_line.unwrap_or("EOF").to_string(),
            line,
        });
    };

    let (std_dev_line, line) = cursor.advance();
    let Some(std_dev) = std_dev_line.and_then(|l| BENCHMARK_VALUES.captures(l)) else {
        return Err(ExtractError::MissingStdDev {
            name,
            content: std_dev_line.unwrap_or("EOF").to_string(),
            line,
        });
    };
    let range = format!("± {}", std_dev[1].trim());

    match cursor.advance() {
        (Some(blank), _) if BLANK_LINE.is_match(blank) => {}
        (_, line) => return Err(ExtractError::MissingBlankLine { name, line }),
    }

    Ok(Some(
        BenchmarkEntry::new(name, value, unit)
            .with_range(range)
            .with_extra(extra),
    ))
}
