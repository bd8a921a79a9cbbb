// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-tool output parsers.
//!
//! Each parser turns the complete output of one tool into benchmark entries in
//! order of appearance. The line-oriented parsers skip lines they do not
//! recognize; the JSON parsers reject the whole input if it does not have the
//! expected shape.

pub mod benchmarkjs;
pub mod cargo;
pub mod catch2;
pub mod go;
pub mod googlecpp;
pub mod pytest;

/// Split output into lines on `\n`, dropping a trailing `\r` from each.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line, which
/// the Catch2 parser relies on to accept a report ending in `...\n`.
pub(crate) fn split_lines(output: &str) -> Vec<&str> {
    output
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Remove thousands separators from a numeric string.
pub(crate) fn strip_commas(number: &str) -> String {
    number.replace(',', "")
}
