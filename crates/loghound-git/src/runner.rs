// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Running the git executable

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::GitError;

/// Runs a git subcommand and returns its standard output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run git with `args` and capture stdout.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Launch` if the process cannot be started and
    /// `GitError::CommandFailed` if it exits unsuccessfully.
    async fn run(&self, args: &[OsString]) -> Result<String, GitError>;
}

/// [`CommandRunner`] that spawns `git -C <repo>`
#[derive(Debug, Clone)]
pub struct GitCommandRunner {
    repo: PathBuf,
    program: PathBuf,
}

impl GitCommandRunner {
    /// Run `git` from PATH against the repository at `repo`
    #[must_use]
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            program: PathBuf::from("git"),
        }
    }

    /// Use a specific git executable
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// The repository path commands run against
    #[must_use]
    pub fn repo(&self) -> &Path {
        &self.repo
    }
}

#[async_trait]
impl CommandRunner for GitCommandRunner {
    async fn run(&self, args: &[OsString]) -> Result<String, GitError> {
        debug!(repo = %self.repo.display(), ?args, "Running git");

        // Dropping the future kills the child, so cancelling a fetch stops git.
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.repo)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| GitError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        match String::from_utf8(output.stdout) {
            Ok(stdout) => Ok(stdout),
            Err(err) => {
                warn!("git output is not valid UTF-8, replacing invalid bytes");
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }
}
