// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Commit metadata attached to a benchmark result.
//!
//! The metadata is supplied by the caller (usually from a CI event payload or
//! a source-hosting API) and is passed through untouched. No field is
//! required: absent fields stay absent, and fields beyond the ones modeled
//! here are kept in `other` so that nothing is lost on the way through.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Author or committer of a commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitUser {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account name on the hosting service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// E-mail address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Any other fields present in the source object.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl CommitUser {
    /// A user whose name and username are the same account login.
    pub fn from_login(login: impl Into<String>) -> Self {
        let login = login.into();
        Self {
            name: Some(login.clone()),
            username: Some(login),
            ..Default::default()
        }
    }
}

/// Commit metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<CommitUser>,
    /// Commit committer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer: Option<CommitUser>,
    /// Commit SHA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Commit message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Commit timestamp as reported by the source (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// URL of the commit on the hosting service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Any other fields present in the source object.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Commit {
    /// The commit SHA, or `"unknown"` when the source did not provide one.
    pub fn id_or_unknown(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }
}
