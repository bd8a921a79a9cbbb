// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Commit metadata sources for benchtrack.
//!
//! This crate resolves the [`Commit`] a benchmark run belongs to:
//!
//! - **Event payload**: the CI event that triggered the run ([`event`])
//! - **GitHub REST API**: the head commit of the current ref ([`github`])
//!
//! [`resolve_commit`] tries the payload first and only falls back to a
//! [`CommitSource`] when the payload has nothing to offer.
//!
//! # Example
//!
//! ```ignore
//! use benchtrack_adapters::{event, github::{self, GitHubClient}, resolve_commit};
//!
//! let payload = event::read_event(std::env::var("GITHUB_EVENT_PATH")?)?;
//! let client = GitHubClient::new(github::DEFAULT_API_URL, "owner/repo", "refs/heads/main", token)?;
//! let commit = resolve_commit(&payload, Some(&client)).await?;
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod event;
pub mod github;

pub use error::{AdapterError, Result};

use async_trait::async_trait;
use benchtrack_core::Commit;
use serde_json::Value;
use tracing::warn;

/// A source of head commit metadata outside the event payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Fetch the head commit.
    async fn head_commit(&self) -> Result<Commit>;
}

/// Resolve the commit for a benchmark run.
///
/// Looks in the event payload first (see [`event::commit_from_payload`]). If
/// the payload has no commit, `fallback` is queried; without a fallback the
/// call fails with [`AdapterError::NoCommitInfo`].
pub async fn resolve_commit(
    payload: &Value,
    fallback: Option<&dyn CommitSource>,
) -> Result<Commit> {
    if let Some(commit) = event::commit_from_payload(payload)? {
        return Ok(commit);
    }

    match fallback {
        Some(source) => {
            warn!("no commit in event payload, querying head commit");
            source.head_commit().await
        }
        None => Err(AdapterError::NoCommitInfo {
            payload: serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtrack_core::CommitUser;
    use serde_json::{json, Map};

    fn api_commit() -> Commit {
        Commit {
            author: Some(CommitUser::from_login("Dev")),
            committer: Some(CommitUser::from_login("Dev")),
            id: Some("from-api".to_string()),
            message: Some("Nightly run".to_string()),
            timestamp: Some("2025-01-02T03:04:05Z".to_string()),
            url: Some("https://github.com/owner/repo/commit/from-api".to_string()),
            other: Map::new(),
        }
    }

    #[tokio::test]
    async fn test_payload_commit_skips_fallback() {
        let mut source = MockCommitSource::new();
        source.expect_head_commit().never();

        let payload = json!({"pull_request": {
            "title": "Make fib faster",
            "html_url": "https://github.com/owner/repo/pull/7",
            "head": {"sha": "def456", "user": {"login": "c"}, "repo": {"updated_at": "t"}}
        }});
        let commit = resolve_commit(&payload, Some(&source)).await.unwrap();
        assert_eq!(commit.id.as_deref(), Some("def456"));
    }

    #[tokio::test]
    async fn test_falls_back_to_source() {
        let mut source = MockCommitSource::new();
        source
            .expect_head_commit()
            .times(1)
            .returning(|| Ok(api_commit()));

        let commit = resolve_commit(&json!({"schedule": "0 0 * * *"}), Some(&source))
            .await
            .unwrap();
        assert_eq!(commit.id.as_deref(), Some("from-api"));
    }

    #[tokio::test]
    async fn test_fallback_error_propagates() {
        let mut source = MockCommitSource::new();
        source
            .expect_head_commit()
            .returning(|| Err(AdapterError::UnexpectedStatus(500)));

        let err = resolve_commit(&json!({}), Some(&source)).await.unwrap_err();
        assert!(matches!(err, AdapterError::UnexpectedStatus(500)));
    }

    #[tokio::test]
    async fn test_no_commit_and_no_fallback() {
        let err = resolve_commit(&json!({"workflow": "bench"}), None)
            .await
            .unwrap_err();
        match err {
            AdapterError::NoCommitInfo { payload } => assert!(payload.contains("\"workflow\": \"bench\"")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
