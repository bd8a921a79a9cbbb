// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! GitHub REST API commit source.
//!
//! Used when the event payload carries no commit, e.g. for scheduled or
//! manually dispatched workflows.
//!
//! # Example
//!
//! ```ignore
//! use benchtrack_adapters::github::GitHubClient;
//!
//! let client = GitHubClient::new("https://api.github.com", "owner/repo", "refs/heads/main", token)?;
//! let commit = client.head_commit().await?;
//! ```

use crate::error::{AdapterError, Result};
use crate::CommitSource;
use async_trait::async_trait;
use benchtrack_core::{Commit, CommitUser};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Map;
use std::time::Duration;
use tracing::{debug, info};

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct CommitResponse {
    sha: String,
    html_url: String,
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
    author: GitIdentity,
    committer: GitIdentity,
}

#[derive(Debug, Deserialize)]
struct GitIdentity {
    name: String,
    #[serde(default)]
    date: Option<String>,
}

impl From<GitIdentity> for CommitUser {
    fn from(identity: GitIdentity) -> Self {
        CommitUser {
            username: Some(identity.name.clone()),
            name: Some(identity.name),
            ..Default::default()
        }
    }
}

impl From<CommitResponse> for Commit {
    fn from(data: CommitResponse) -> Self {
        let detail = data.commit;
        Commit {
            timestamp: detail.author.date.clone(),
            author: Some(detail.author.into()),
            committer: Some(detail.committer.into()),
            id: Some(data.sha),
            message: Some(detail.message),
            url: Some(data.html_url),
            other: Map::new(),
        }
    }
}

/// Client fetching the head commit of a ref from the GitHub REST API.
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    owner: String,
    repo: String,
    git_ref: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `repository` (in `owner/name` form) at `git_ref`.
    pub fn new(
        api_url: impl Into<String>,
        repository: &str,
        git_ref: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let (owner, repo) = repository
            .split_once('/')
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
            .ok_or_else(|| AdapterError::InvalidRepository(repository.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("benchtrack/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            git_ref: git_ref.into(),
            token: token.into(),
        })
    }

    fn commit_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/commits/{}",
            self.api_url, self.owner, self.repo, self.git_ref
        )
    }
}

#[async_trait]
impl CommitSource for GitHubClient {
    async fn head_commit(&self) -> Result<Commit> {
        let url = self.commit_url();
        info!(%url, "fetching head commit from GitHub API");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        // a 304 carries no body to read the commit from
        if status != StatusCode::OK {
            return Err(AdapterError::UnexpectedStatus(status.as_u16()));
        }

        let data: CommitResponse = response.json().await?;
        debug!(sha = %data.sha, "fetched head commit");
        Ok(data.into())
    }
}
