// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! loghound-git: commit history retrieval over the git CLI
//!
//! This library crate runs `git log` with a fixed machine-readable format and
//! decodes its output into typed [`Commit`] values. Damaged records are
//! decoded with defaults instead of failing the query.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use loghound_git::{HistoryFetcher, LogQuery};
//!
//! # async fn example() -> Result<(), loghound_git::GitError> {
//! let fetcher = HistoryFetcher::for_repository(".", "origin");
//! let commits = fetcher
//!     .fetch_history(&LogQuery::latest(10).on_branch("main"))
//!     .await?;
//!
//! for c in commits {
//!     println!("{} - {}", c.short_hash, c.subject);
//! }
//! # Ok(())
//! # }
//! ```

pub mod commit;
pub mod date;
pub mod decoration;
pub mod error;
pub mod fetcher;
pub mod query;
pub mod record;
pub mod remote;
pub mod runner;

pub use commit::Commit;
pub use date::CommitDate;
pub use decoration::Decoration;
pub use error::GitError;
pub use fetcher::HistoryFetcher;
pub use query::LogQuery;
pub use record::{RawRecord, decode_log_output, parse_log_output};
pub use remote::{GitRemoteResolver, RemoteResolver};
pub use runner::{CommandRunner, GitCommandRunner};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::date::CommitDate;
    pub use crate::decoration::Decoration;
    pub use crate::error::GitError;
    pub use crate::fetcher::HistoryFetcher;
    pub use crate::query::LogQuery;
    pub use crate::remote::RemoteResolver;
    pub use crate::runner::CommandRunner;
}
