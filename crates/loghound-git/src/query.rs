// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Log query construction
//!
//! A [`LogQuery`] becomes a discrete argument list for `git log`. Branch and
//! path are never spliced into a command string, so values containing
//! spaces, quotes or leading dashes reach git unchanged.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::record::FIELD_SEP;

/// Placeholders for the ten positional fields, in record order
const FORMAT_FIELDS: [&str; 10] = ["%h", "%H", "%s", "%aN", "%ae", "%cn", "%ce", "%aD", "%b", "%D"];

/// Configuration for one history query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    /// Revision to start from (defaults to HEAD)
    pub branch: Option<String>,
    /// Maximum number of commits to retrieve
    pub max_count: Option<usize>,
    /// Only include commits touching this path
    pub path: Option<PathBuf>,
    /// Include merge commits
    pub include_merges: bool,
}

impl LogQuery {
    /// Create a query for the N most recent commits
    #[must_use]
    pub fn latest(n: usize) -> Self {
        Self {
            max_count: Some(n),
            ..Default::default()
        }
    }

    /// Set the starting branch or revision
    #[must_use]
    pub fn on_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Restrict history to one file or directory
    #[must_use]
    pub fn for_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Include merge commits in the output
    #[must_use]
    pub fn with_merges(mut self) -> Self {
        self.include_merges = true;
        self
    }

    /// The `--pretty` argument: every field followed by the separator
    #[must_use]
    pub fn pretty_format() -> String {
        let mut format = String::from("--pretty=format:");
        for field in FORMAT_FIELDS {
            format.push_str(field);
            format.push_str(FIELD_SEP);
        }
        format
    }

    /// Build the argument list passed to git
    #[must_use]
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["log".into()];
        if !self.include_merges {
            args.push("--no-merges".into());
        }
        args.push("-z".into());
        args.push(Self::pretty_format().into());
        if let Some(n) = self.max_count {
            args.push(format!("--max-count={n}").into());
        }
        if let Some(ref branch) = self.branch {
            args.push("--end-of-options".into());
            args.push(branch.into());
        }
        args.push("--".into());
        if let Some(ref path) = self.path {
            args.push(path.into());
        }
        args
    }

    /// Human-readable rendering of the arguments, for logs
    #[must_use]
    pub fn command_line(&self) -> String {
        let args: Vec<String> = self
            .to_args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        format!("git {}", args.join(" "))
    }
}
