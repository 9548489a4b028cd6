// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Decoration (`%D`) classification
//!
//! git packs two different things into one field: a tag pointing at the
//! commit, or the list of live references (branches, remote branches, HEAD)
//! pointing at it. [`Decoration`] keeps the two apart so a commit can never
//! carry both.

use serde::{Deserialize, Serialize};

const TAG_MARKER: &str = "tag:";
const HEAD_POINTER: &str = "HEAD -> ";
const REMOTE_HEAD_SUFFIX: &str = "/HEAD";

/// What a commit's decoration field says about it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Decoration {
    /// No tag and no references
    #[default]
    None,
    /// The commit is directly tagged
    Tag(String),
    /// References pointing at the commit, in git's order (never empty)
    References(Vec<String>),
}

impl Decoration {
    /// Classify a raw `%D` field
    ///
    /// A field mentioning `tag:` is a tag: the first tag name wins and any
    /// references alongside it are discarded. Otherwise every comma-separated
    /// entry becomes a reference, except `<remote>/HEAD` which is dropped,
    /// and `HEAD -> branch` which is reduced to `branch`.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if let Some((_, after)) = raw.split_once(TAG_MARKER) {
            let name = after.split(',').next().unwrap_or("").trim();
            return if name.is_empty() {
                Self::None
            } else {
                Self::Tag(name.to_string())
            };
        }

        let refs: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !is_remote_head(entry))
            .map(|entry| entry.strip_prefix(HEAD_POINTER).unwrap_or(entry).trim())
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        if refs.is_empty() {
            Self::None
        } else {
            Self::References(refs)
        }
    }

    /// The tag name, if the commit is tagged
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Tag(name) => Some(name),
            _ => None,
        }
    }

    /// References pointing at the commit; empty for tagged or bare commits
    #[must_use]
    pub fn refs(&self) -> &[String] {
        match self {
            Self::References(refs) => refs,
            _ => &[],
        }
    }

    /// True when there is neither a tag nor any reference
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// `origin/HEAD`, or `origin/HEAD -> origin/main` when git spells out the target
fn is_remote_head(entry: &str) -> bool {
    let name = entry.split(" -> ").next().unwrap_or(entry);
    name.len() > REMOTE_HEAD_SUFFIX.len() && name.ends_with(REMOTE_HEAD_SUFFIX)
}
