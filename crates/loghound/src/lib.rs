//! loghound library
//!
//! This module exports the command-line pieces of loghound for use in
//! integration tests and as a library.

pub mod config;
pub mod output;

use anyhow::Context;
use loghound_git::HistoryFetcher;
use tracing::debug;

use crate::config::Config;

/// Fetch history as described by `config` and render it
///
/// # Errors
///
/// Returns an error if the configuration is invalid, git cannot be run, or
/// the output cannot be rendered.
pub async fn run(config: &Config) -> anyhow::Result<String> {
    config.validate()?;
    let repo = config
        .repo_path()
        .context("No repository given and the current directory is unavailable")?;
    debug!(repo = %repo.display(), remote = config.remote_name(), "Resolved repository");

    let fetcher = HistoryFetcher::for_repository(&repo, config.remote_name());
    let commits = fetcher
        .fetch_history(&config.query())
        .await
        .with_context(|| format!("Failed to read history of {}", repo.display()))?;

    Ok(output::render(&commits, config.format)?)
}
