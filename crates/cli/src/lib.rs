// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for benchtrack.
//!
//! This crate provides the `benchtrack` command-line interface, including the
//! `extract` subcommand that turns benchmark tool output into a canonical
//! result for the current commit.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;

use anyhow::Context;
use benchtrack_adapters::github::GitHubClient;
use benchtrack_adapters::{event, resolve_commit, AdapterError, CommitSource};
use benchtrack_core::{Commit, Tool};
use benchtrack_extract::{extract_benches, io, markdown, BenchmarkResult};
use clap::{Args, Parser, Subcommand};
use crate::config::{LogFormat, Overrides, Settings};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// benchtrack CLI.
#[derive(Parser, Debug)]
#[command(name = "benchtrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (TOML). Defaults to `benchtrack.toml` if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value = "pretty", env = "BENCHTRACK_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse benchmark output and write the result for the current commit.
    ///
    /// The result JSON goes to --result-file, or stdout when it is not set.
    Extract(ExtractArgs),

    /// Parse benchmark output and print the entries, without commit metadata.
    Parse {
        /// Tool that produced the output.
        #[arg(short, long)]
        tool: String,

        /// File holding the tool output.
        #[arg(short, long)]
        output_file: PathBuf,
    },

    /// List the supported tools.
    Tools,
}

/// Arguments of the `extract` command.
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Tool that produced the output.
    #[arg(short, long)]
    pub tool: Option<String>,

    /// File holding the tool output.
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// CI event payload file.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// API token, used when the event payload carries no commit.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Repository in `owner/name` form.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Ref whose head commit is fetched from the API.
    #[arg(long, env = "GITHUB_REF")]
    pub git_ref: Option<String>,

    /// GitHub API base URL.
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Where to write the result JSON.
    #[arg(long)]
    pub result_file: Option<PathBuf>,

    /// Where to write a Markdown summary.
    #[arg(long)]
    pub summary_file: Option<PathBuf>,
}

impl From<ExtractArgs> for Overrides {
    fn from(args: ExtractArgs) -> Self {
        Overrides {
            tool: args.tool,
            output_file: args.output_file,
            event_path: args.event_path,
            github_token: args.github_token,
            repository: args.repository,
            git_ref: args.git_ref,
            api_url: args.api_url,
            result_file: args.result_file,
            summary_file: args.summary_file,
        }
    }
}

/// Install the global tracing subscriber. Logs go to stderr.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match cli.command {
        Commands::Extract(args) => {
            let settings = Settings::load(cli.config.as_deref(), &args.into())
                .context("failed to load settings")?;
            run_extract(&settings).await.map(|_| ())
        }
        Commands::Parse { tool, output_file } => {
            let tool: Tool = tool.parse()?;
            let output = io::read_output(&output_file)
                .with_context(|| format!("failed to read {}", output_file.display()))?;
            let benches = extract_benches(tool, &output)?;
            println!("{}", serde_json::to_string_pretty(&benches)?);
            Ok(())
        }
        Commands::Tools => {
            for tool in Tool::ALL {
                println!("{:<12} {}", tool.as_str(), tool.description());
            }
            Ok(())
        }
    }
}

/// Parse the configured output, resolve the commit and write the result.
pub async fn run_extract(settings: &Settings) -> anyhow::Result<BenchmarkResult> {
    let tool = settings.tool()?;
    let output_file = settings.output_file()?;

    let output = io::read_output(output_file)
        .with_context(|| format!("failed to read {}", output_file.display()))?;
    // parse before resolving the commit so malformed output never costs an API call
    let benches = extract_benches(tool, &output)?;
    info!(%tool, count = benches.len(), "parsed benchmark output");

    let commit = commit_for(settings).await?;
    let result = BenchmarkResult::new(commit, tool, benches);

    match &settings.result_file {
        Some(path) => {
            io::write_result_json(&result, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote benchmark result");
        }
        None => println!("{}", io::result_to_json(&result)?),
    }

    if let Some(path) = &settings.summary_file {
        fs::write(path, markdown::generate_summary(&result))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote benchmark summary");
    }

    Ok(result)
}

async fn commit_for(settings: &Settings) -> anyhow::Result<Commit> {
    let payload = match &settings.event_path {
        Some(path) => event::read_event(path)
            .with_context(|| format!("failed to read event payload {}", path.display()))?,
        None => Value::Object(Default::default()),
    };

    let client = match (&settings.github_token, &settings.repository) {
        (Some(token), Some(repository)) => Some(GitHubClient::new(
            settings.api_url.as_str(),
            repository,
            settings.git_ref.as_deref().unwrap_or("HEAD"),
            token.as_str(),
        )?),
        (Some(_), None) => {
            warn!("github token is set but no repository is configured, API fallback disabled");
            None
        }
        _ => None,
    };

    let fallback = client.as_ref().map(|c| c as &dyn CommitSource);
    let commit = match resolve_commit(&payload, fallback).await {
        Err(AdapterError::NoCommitInfo { .. })
            if settings.github_token.is_some() && settings.repository.is_none() =>
        {
            return Err(AdapterError::MissingRepository.into());
        }
        result => result?,
    };
    info!(id = commit.id_or_unknown(), "resolved commit");
    Ok(commit)
}
