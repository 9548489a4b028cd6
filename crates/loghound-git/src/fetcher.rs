// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit history fetching
//!
//! [`HistoryFetcher`] runs the log query and resolves the remote URL, then
//! decodes every record into a [`Commit`]. It holds no per-call state, so
//! one fetcher can serve any number of concurrent fetches.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::commit::Commit;
use crate::error::GitError;
use crate::query::LogQuery;
use crate::record::decode_log_output;
use crate::remote::{GitRemoteResolver, RemoteResolver};
use crate::runner::{CommandRunner, GitCommandRunner};

/// Fetches and decodes commit history
#[derive(Debug, Clone)]
pub struct HistoryFetcher<R, V> {
    runner: R,
    resolver: V,
}

impl HistoryFetcher<GitCommandRunner, GitRemoteResolver> {
    /// Fetcher for the repository at `repo`, using the git executable and
    /// the named remote
    #[must_use]
    pub fn for_repository(repo: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        let repo = repo.into();
        Self::new(
            GitCommandRunner::new(repo.clone()),
            GitRemoteResolver::new(repo, remote),
        )
    }
}

impl<R, V> HistoryFetcher<R, V>
where
    R: CommandRunner,
    V: RemoteResolver,
{
    /// Build a fetcher from its two collaborators
    #[must_use]
    pub fn new(runner: R, resolver: V) -> Self {
        Self { runner, resolver }
    }

    /// Fetch commits matching `query`, in the order git emits them
    ///
    /// Records that are damaged or incomplete still produce a commit; only a
    /// failure to run git or read the remote is an error.
    ///
    /// # Errors
    ///
    /// Returns the `GitError` from the command runner or remote resolver.
    pub async fn fetch_history(&self, query: &LogQuery) -> Result<Vec<Commit>, GitError> {
        let args = query.to_args();
        debug!(command = %query.command_line(), "Fetching history");

        let (output, remote_url) =
            tokio::try_join!(self.runner.run(&args), self.resolver.remote_url())?;

        let commits = decode_log_output(&output, remote_url.as_deref());
        info!(
            count = commits.len(),
            branch = query.branch.as_deref().unwrap_or("HEAD"),
            "Fetched commit history"
        );
        Ok(commits)
    }

    /// The command runner in use
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The remote resolver in use
    pub fn resolver(&self) -> &V {
        &self.resolver
    }
}
