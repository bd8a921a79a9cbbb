// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Commit metadata from a CI event payload.
//!
//! GitHub Actions writes the triggering event as JSON to `GITHUB_EVENT_PATH`.
//! Depending on the event, the head commit is found in different places:
//!
//! - `repository_dispatch`: `client_payload.head_commit`
//! - `push`: `head_commit`
//! - `pull_request`: not present; it is rebuilt from `pull_request.head`
//!
//! Scheduled and manually dispatched workflows carry none of these.

use crate::error::{AdapterError, Result};
use benchtrack_core::{Commit, CommitUser};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PullRequest {
    title: String,
    html_url: String,
    head: PullRequestHead,
}

#[derive(Debug, Deserialize)]
struct PullRequestHead {
    sha: String,
    user: Login,
    repo: HeadRepo,
}

#[derive(Debug, Deserialize)]
struct Login {
    login: String,
}

#[derive(Debug, Deserialize)]
struct HeadRepo {
    updated_at: String,
}

impl From<PullRequest> for Commit {
    fn from(pr: PullRequest) -> Self {
        let id = pr.head.sha;
        let user = CommitUser::from_login(pr.head.user.login);
        Commit {
            author: Some(user.clone()),
            committer: Some(user),
            url: Some(format!("{}/commits/{}", pr.html_url, id)),
            id: Some(id),
            message: Some(pr.title),
            timestamp: Some(pr.head.repo.updated_at),
            other: Map::new(),
        }
    }
}

/// Read an event payload file.
pub fn read_event(path: impl AsRef<Path>) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| AdapterError::InvalidPayload(e.to_string()))
}

/// Find the head commit in an event payload.
///
/// Returns `Ok(None)` when the payload carries no commit at all, and an error
/// when it carries one that cannot be read.
pub fn commit_from_payload(payload: &Value) -> Result<Option<Commit>> {
    if let Some(head_commit) = non_null(payload.pointer("/client_payload/head_commit")) {
        debug!("using head commit from client payload");
        return parse(head_commit).map(Some);
    }

    if let Some(head_commit) = non_null(payload.get("head_commit")) {
        debug!("using head commit from event payload");
        return parse(head_commit).map(Some);
    }

    if let Some(pr) = non_null(payload.get("pull_request")) {
        debug!("building commit from pull request head");
        let pr: PullRequest = serde_json::from_value(pr.clone())
            .map_err(|e| AdapterError::InvalidPayload(format!("pull_request: {}", e)))?;
        return Ok(Some(pr.into()));
    }

    Ok(None)
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn parse(head_commit: &Value) -> Result<Commit> {
    serde_json::from_value(head_commit.clone())
        .map_err(|e| AdapterError::InvalidPayload(format!("head_commit: {}", e)))
}
