//! Configuration for the loghound command line
//!
//! This module provides the command-line configuration: which repository to
//! read, which slice of history to fetch, how to print it, and how loud the
//! logs are.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use loghound_git::LogQuery;

/// Loghound - decoded git commit history
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "loghound")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the git repository
    ///
    /// Defaults to the current working directory.
    #[arg(short = 'C', long, env = "LOGHOUND_REPO")]
    pub repo: Option<PathBuf>,

    /// Branch or revision to start from (defaults to HEAD)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Maximum number of commits to print
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_count: Option<u64>,

    /// Only show commits touching this path
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Include merge commits
    #[arg(long, default_value = "false")]
    pub merges: bool,

    /// Remote whose URL is attached to each commit
    #[arg(long, env = "LOGHOUND_REMOTE", default_value = "origin")]
    pub remote: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How commits are printed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One line per commit
    Text,
}

impl Config {
    /// Get the repository path, using current directory as default
    ///
    /// Returns `None` if no repository is specified and the current
    /// directory cannot be determined.
    #[must_use]
    pub fn repo_path(&self) -> Option<PathBuf> {
        self.repo.clone().or_else(|| std::env::current_dir().ok())
    }

    /// The remote name, `origin` when unset
    #[must_use]
    pub fn remote_name(&self) -> &str {
        if self.remote.is_empty() {
            "origin"
        } else {
            &self.remote
        }
    }

    /// The history query described by the flags
    #[must_use]
    pub fn query(&self) -> LogQuery {
        LogQuery {
            branch: self.branch.clone(),
            max_count: self
                .max_count
                .map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
            path: self.path.clone(),
            include_merges: self.merges,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path is specified but doesn't
    /// exist or is not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepoNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepoNotDirectory(repo.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoNotDirectory(PathBuf),
}
