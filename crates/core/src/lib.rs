// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core types for benchtrack.
//!
//! This crate holds the data model shared by every other benchtrack crate:
//!
//! - [`Tool`] - the closed set of benchmark tools whose output can be parsed
//! - [`BenchmarkEntry`] - one measured benchmark case
//! - [`Commit`] - commit metadata carried through to the final result
//!
//! Nothing in here performs I/O. Parsing lives in `benchtrack-extract`,
//! commit resolution in `benchtrack-adapters`.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod commit;
pub mod entry;
pub mod tool;

pub use commit::{Commit, CommitUser};
pub use entry::BenchmarkEntry;
pub use tool::{ParseToolError, Tool};
