// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Author date decoding
//!
//! git renders `%aD` as RFC 2822 (`Thu, 7 Apr 2005 22:13:13 +0200`). The
//! weekday and month abbreviations are always English regardless of the
//! user's locale, so chrono's fixed-name parser is used directly.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A decoded author date.
///
/// A commit is never dropped because its date could not be read. Instead the
/// decode time is substituted and recorded as a [`CommitDate::Fallback`], so
/// callers can tell a real date from a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "timestamp", rename_all = "snake_case")]
pub enum CommitDate {
    /// The date as written by git, with the author's UTC offset
    Parsed(DateTime<FixedOffset>),
    /// The raw field was unparseable; this is the time of decoding
    Fallback(DateTime<FixedOffset>),
}

impl CommitDate {
    /// Decode a `%aD` field, falling back to now when it cannot be parsed
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        let trimmed = raw.trim();
        match DateTime::parse_from_rfc2822(trimmed) {
            Ok(timestamp) => Self::Parsed(timestamp),
            Err(err) => {
                warn!(raw = %trimmed, error = %err, "Unparseable author date, using current time");
                Self::Fallback(Utc::now().fixed_offset())
            }
        }
    }

    /// The timestamp, whether parsed or substituted
    #[must_use]
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        match self {
            Self::Parsed(ts) | Self::Fallback(ts) => *ts,
        }
    }

    /// The timestamp converted to UTC
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.timestamp().with_timezone(&Utc)
    }

    /// True when the raw field could not be parsed
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
