// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Rendering commits for the terminal

use loghound_git::{Commit, Decoration};

use crate::config::OutputFormat;

/// Render commits in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(commits: &[Commit], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(commits),
        OutputFormat::Text => Ok(render_text(commits)),
    }
}

/// One line per commit: hash, date, decoration, subject
///
/// A date that could not be read from git is marked with `?`.
#[must_use]
pub fn render_text(commits: &[Commit]) -> String {
    let mut out = String::new();
    for commit in commits {
        let date = commit.date.timestamp().format("%Y-%m-%d %H:%M");
        let marker = if commit.date.is_fallback() { "?" } else { "" };
        out.push_str(&format!("{} {date}{marker}", commit.short_hash));
        match &commit.decoration {
            Decoration::None => {}
            Decoration::Tag(name) => out.push_str(&format!(" (tag: {name})")),
            Decoration::References(refs) => out.push_str(&format!(" ({})", refs.join(", "))),
        }
        out.push(' ');
        out.push_str(&commit.subject);
        out.push('\n');
    }
    out
}
