// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Commit resolution errors.

use thiserror::Error;

/// Errors that can occur while resolving commit metadata.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The event payload has no commit and no API token was configured
    #[error("No commit information is found in payload: {payload} and 'github-token' input is not set")]
    NoCommitInfo {
        /// Pretty-printed event payload
        payload: String,
    },

    /// The event payload has no commit and the API cannot be queried because
    /// no repository was configured
    #[error("No commit information is found in payload and 'repository' is not set, so the head commit cannot be fetched")]
    MissingRepository,

    /// The event payload has a commit object of the wrong shape
    #[error("Invalid event payload: {0}")]
    InvalidPayload(String),

    /// Event payload file could not be read
    #[error("Failed to read event payload: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status other than 200
    #[error("Could not fetch the head commit. Received code: {0}")]
    UnexpectedStatus(u16),

    /// Repository is not in `owner/name` form
    #[error("Invalid repository '{0}': expected 'owner/name'")]
    InvalidRepository(String),
}

/// Result type for commit resolution.
pub type Result<T> = std::result::Result<T, AdapterError>;
