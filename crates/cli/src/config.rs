// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Layered settings for the `extract` command.
//!
//! Sources, lowest priority first:
//!
//! 1. built-in defaults
//! 2. a TOML file (`--config`, or `benchtrack.toml` in the working directory if present)
//! 3. `BENCHTRACK_*` environment variables
//! 4. command-line flags (including their GitHub Actions environment fallbacks)

use benchtrack_adapters::github::DEFAULT_API_URL;
use benchtrack_core::Tool;
use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Settings for one extraction run.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Tool tag, e.g. `cargo`.
    pub tool: Option<String>,
    /// File holding the raw tool output.
    pub output_file: Option<PathBuf>,
    /// CI event payload file.
    pub event_path: Option<PathBuf>,
    /// API token used when the payload has no commit.
    pub github_token: Option<String>,
    /// Repository in `owner/name` form.
    pub repository: Option<String>,
    /// Ref whose head commit is fetched from the API.
    pub git_ref: Option<String>,
    /// GitHub API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Where to write the result JSON. Stdout when unset.
    pub result_file: Option<PathBuf>,
    /// Where to write a Markdown summary.
    pub summary_file: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Values given on the command line. `None` leaves lower layers in effect.
#[derive(Debug, Clone, Default)]
#[allow(missing_docs)]
pub struct Overrides {
    pub tool: Option<String>,
    pub output_file: Option<PathBuf>,
    pub event_path: Option<PathBuf>,
    pub github_token: Option<String>,
    pub repository: Option<String>,
    pub git_ref: Option<String>,
    pub api_url: Option<String>,
    pub result_file: Option<PathBuf>,
    pub summary_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from all layers.
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::load_with_env(config_file, overrides, Environment::with_prefix("BENCHTRACK"))
    }

    fn load_with_env(
        config_file: Option<&Path>,
        overrides: &Overrides,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name("benchtrack").required(false),
        };

        Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .add_source(file)
            .add_source(env)
            .set_override_option("tool", overrides.tool.clone())?
            .set_override_option("output_file", path_value(&overrides.output_file))?
            .set_override_option("event_path", path_value(&overrides.event_path))?
            .set_override_option("github_token", overrides.github_token.clone())?
            .set_override_option("repository", overrides.repository.clone())?
            .set_override_option("git_ref", overrides.git_ref.clone())?
            .set_override_option("api_url", overrides.api_url.clone())?
            .set_override_option("result_file", path_value(&overrides.result_file))?
            .set_override_option("summary_file", path_value(&overrides.summary_file))?
            .build()?
            .try_deserialize()
    }

    /// The configured tool. Unknown tags are a fatal configuration error.
    pub fn tool(&self) -> anyhow::Result<Tool> {
        let tag = self
            .tool
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no benchmark tool configured (use --tool)"))?;
        Ok(tag.parse()?)
    }

    /// The configured output file.
    pub fn output_file(&self) -> anyhow::Result<&Path> {
        self.output_file
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no output file configured (use --output-file)"))
    }
}

fn path_value(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(|p| p.to_string_lossy().into_owned())
}
