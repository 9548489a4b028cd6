// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Remote URL resolution

use std::path::PathBuf;

use async_trait::async_trait;
use git2::{ErrorCode, Repository};
use tracing::debug;

use crate::error::GitError;

/// Resolves the URL of the repository's remote
#[async_trait]
pub trait RemoteResolver: Send + Sync {
    /// The remote URL, or `None` when no such remote is configured
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the repository cannot be read.
    async fn remote_url(&self) -> Result<Option<String>, GitError>;
}

/// [`RemoteResolver`] that reads the remote from the repository config
#[derive(Debug, Clone)]
pub struct GitRemoteResolver {
    repo: PathBuf,
    remote: String,
}

impl GitRemoteResolver {
    /// Resolve `remote` for the repository containing `repo`
    #[must_use]
    pub fn new(repo: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            remote: remote.into(),
        }
    }

    /// Resolve `origin`
    #[must_use]
    pub fn origin(repo: impl Into<PathBuf>) -> Self {
        Self::new(repo, "origin")
    }

    fn lookup(&self) -> Result<Option<String>, GitError> {
        let repo = Repository::discover(&self.repo).map_err(|_| GitError::RepositoryNotFound {
            path: self.repo.display().to_string(),
        })?;

        match repo.find_remote(&self.remote) {
            Ok(remote) => Ok(remote.url().map(str::to_string)),
            Err(err) if err.code() == ErrorCode::NotFound => {
                debug!(remote = %self.remote, "Remote not configured");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl RemoteResolver for GitRemoteResolver {
    async fn remote_url(&self) -> Result<Option<String>, GitError> {
        let resolver = self.clone();
        tokio::task::spawn_blocking(move || resolver.lookup()).await?
    }
}
