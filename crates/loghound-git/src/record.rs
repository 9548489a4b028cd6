// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Log output parsing
//!
//! The output of the log query is a flat stream: records are terminated by a
//! NUL byte and fields within a record are separated by `¦`. Records are
//! split first, so newlines inside a commit body never start a new record.
//!
//! Parsing never fails. A record with missing fields decodes with empty
//! strings in their place, so one damaged record cannot take down a fetch.

use tracing::debug;

use crate::commit::Commit;
use crate::date::CommitDate;
use crate::decoration::Decoration;

/// Separator between positional fields within one record
pub const FIELD_SEP: &str = "¦";

/// Separator between records (`git log -z`)
pub const RECORD_SEP: char = '\0';

/// Number of positional fields the log format emits per record
pub const FIELD_COUNT: usize = 10;

/// One record split into its positional fields, borrowed from the output.
///
/// Every field is defaulted to `""` when the record was too short, so the
/// missing-field policy lives here and nowhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// `%h`
    pub short_hash: &'a str,
    /// `%H`
    pub hash: &'a str,
    /// `%s`
    pub subject: &'a str,
    /// `%aN`
    pub author_name: &'a str,
    /// `%ae`
    pub author_email: &'a str,
    /// `%cn`
    pub committer_name: &'a str,
    /// `%ce`
    pub committer_email: &'a str,
    /// `%aD`
    pub date: &'a str,
    /// `%b`
    pub body: &'a str,
    /// `%D`
    pub decoration: &'a str,
}

impl<'a> RawRecord<'a> {
    /// Split one record chunk into its fields
    ///
    /// The format ends every record with a trailing separator, so a
    /// well-formed chunk has one empty part after the decoration. When a
    /// chunk has more parts than that, the extra separators came from the
    /// commit body; the body is then the span between the date and the
    /// decoration.
    #[must_use]
    pub fn from_chunk(chunk: &'a str) -> Self {
        let parts: Vec<&'a str> = chunk.split(FIELD_SEP).collect();
        if parts.len() < FIELD_COUNT {
            debug!(fields = parts.len(), "Short log record, missing fields left empty");
        }
        let field = |i: usize| parts.get(i).copied().unwrap_or("");

        let (body, decoration) = match parts.last() {
            Some(last) if last.is_empty() && parts.len() > FIELD_COUNT + 1 => {
                let decoration_idx = parts.len() - 2;
                let start = field_offset(&parts, 8);
                let end = field_offset(&parts, decoration_idx) - FIELD_SEP.len();
                (&chunk[start..end], parts[decoration_idx])
            }
            _ => (field(8), field(9)),
        };

        Self {
            short_hash: field(0).trim(),
            hash: field(1).trim(),
            subject: field(2),
            author_name: field(3),
            author_email: field(4),
            committer_name: field(5),
            committer_email: field(6),
            date: field(7),
            body,
            decoration,
        }
    }

    /// Build the commit value for this record
    #[must_use]
    pub fn decode(&self, remote_url: Option<&str>) -> Commit {
        Commit {
            short_hash: self.short_hash.to_string(),
            hash: self.hash.to_string(),
            subject: self.subject.to_string(),
            author_name: self.author_name.to_string(),
            author_email: self.author_email.to_string(),
            committer_name: self.committer_name.to_string(),
            committer_email: self.committer_email.to_string(),
            body: self.body.to_string(),
            date: CommitDate::decode(self.date),
            decoration: Decoration::classify(self.decoration),
            remote_url: remote_url.map(str::to_string),
        }
    }
}

/// Byte offset of part `idx` within `chunk`
fn field_offset(parts: &[&str], idx: usize) -> usize {
    parts[..idx].iter().map(|p| p.len() + FIELD_SEP.len()).sum()
}

/// Split raw log output into records, in the order git emitted them
pub fn parse_log_output(output: &str) -> impl Iterator<Item = RawRecord<'_>> {
    output
        .split(RECORD_SEP)
        .filter(|chunk| !chunk.is_empty())
        .map(RawRecord::from_chunk)
}

/// Parse and decode every record, attaching `remote_url` to each commit
#[must_use]
pub fn decode_log_output(output: &str, remote_url: Option<&str>) -> Vec<Commit> {
    let commits: Vec<Commit> = parse_log_output(output)
        .map(|record| record.decode(remote_url))
        .collect();
    debug!(count = commits.len(), "Decoded log records");
    commits
}
