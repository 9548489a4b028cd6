// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for loghound-git
//!
//! Only transport failures are errors. Anything wrong with the *content* of
//! the log output is absorbed by the decoder and never shows up here.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while fetching commit history
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started
    #[error("Failed to launch {program}: {source}. Is git installed and in PATH?")]
    Launch {
        /// The program that was invoked
        program: String,
        /// Underlying I/O error from the spawn
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully
    #[error("git command failed ({status}): {stderr}")]
    CommandFailed {
        /// Exit status reported by the process
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// A blocking lookup task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
