//! Git commit types

use serde::{Deserialize, Serialize};

use crate::date::CommitDate;
use crate::decoration::Decoration;

/// A commit decoded from one log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Abbreviated commit hash
    pub short_hash: String,
    /// Full commit hash
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
    /// Author name (mailmap applied)
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Committer name
    pub committer_name: String,
    /// Committer email
    pub committer_email: String,
    /// Message body after the subject, verbatim
    pub body: String,
    /// Author date
    pub date: CommitDate,
    /// Tag or references pointing at this commit
    pub decoration: Decoration,
    /// URL of the repository's remote, shared by every commit of a fetch
    pub remote_url: Option<String>,
}

impl Commit {
    /// Validate that a hash is a full SHA-1 (40) or SHA-256 (64) hex string
    #[must_use]
    pub fn is_full_hash(hash: &str) -> bool {
        (hash.len() == 40 || hash.len() == 64) && hash.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// The tag pointing at this commit, if any
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.decoration.tag()
    }

    /// References pointing at this commit, empty when tagged or undecorated
    #[must_use]
    pub fn refs(&self) -> &[String] {
        self.decoration.refs()
    }

    /// Check if this commit is tagged
    #[must_use]
    pub fn is_tagged(&self) -> bool {
        self.tag().is_some()
    }

    /// Subject and body joined back into the full message
    #[must_use]
    pub fn message(&self) -> String {
        let body = self.body.trim_end();
        if body.is_empty() {
            self.subject.clone()
        } else {
            format!("{}\n\n{}", self.subject, body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use similar_asserts::assert_eq;

    fn sample_commit() -> Commit {
        Commit {
            short_hash: "1945ab9".to_string(),
            hash: "1945ab9c752534e733c38ba0109dc3b741f0a6eb".to_string(),
            subject: "feat(skills): add milestone-creator".to_string(),
            author_name: "Test Author".to_string(),
            author_email: "test@example.com".to_string(),
            committer_name: "Test Author".to_string(),
            committer_email: "test@example.com".to_string(),
            body: "Detailed description here.\n".to_string(),
            date: CommitDate::Parsed(
                Utc.with_ymd_and_hms(2026, 1, 17, 2, 33, 6)
                    .unwrap()
                    .fixed_offset(),
            ),
            decoration: Decoration::References(vec!["main".to_string()]),
            remote_url: Some("https://github.com/Rbfinch/loghound.git".to_string()),
        }
    }

    #[test]
    fn test_commit_serialization_roundtrip() {
        let commit = sample_commit();
        let json = serde_json::to_string(&commit).expect("serialize");
        let deserialized: Commit = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(commit, deserialized);
    }

    #[test]
    fn test_commit_json_format() {
        let commit = sample_commit();
        let json = serde_json::to_string_pretty(&commit).expect("serialize");
        assert!(json.contains("\"hash\":"));
        assert!(json.contains("1945ab9c752534e733c38ba0109dc3b741f0a6eb"));
        assert!(json.contains("\"date\":"));
        assert!(json.contains("2026-01-17"));
        assert!(json.contains("\"remote_url\":"));
    }

    #[test]
    fn test_is_full_hash_valid() {
        assert!(Commit::is_full_hash(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eb"
        ));
        assert!(Commit::is_full_hash(
            "ABCDEF1234567890abcdef1234567890abcdef12"
        ));
        assert!(Commit::is_full_hash(&"a".repeat(64)));
    }

    #[test]
    fn test_is_full_hash_invalid() {
        // Abbreviated
        assert!(!Commit::is_full_hash("1945ab9"));
        // Between lengths
        assert!(!Commit::is_full_hash(&"a".repeat(41)));
        // Invalid characters
        assert!(!Commit::is_full_hash(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eg"
        ));
        assert!(!Commit::is_full_hash(""));
    }

    #[test]
    fn test_refs_and_tag_accessors() {
        let mut commit = sample_commit();
        assert_eq!(commit.refs(), &["main".to_string()][..]);
        assert!(!commit.is_tagged());

        commit.decoration = Decoration::Tag("v1.0.0".to_string());
        assert_eq!(commit.tag(), Some("v1.0.0"));
        assert!(commit.refs().is_empty());
        assert!(commit.is_tagged());
    }

    #[test]
    fn test_message_joins_subject_and_body() {
        let commit = sample_commit();
        assert_eq!(
            commit.message(),
            "feat(skills): add milestone-creator\n\nDetailed description here."
        );
    }

    #[test]
    fn test_message_without_body() {
        let mut commit = sample_commit();
        commit.body = "\n".to_string();
        assert_eq!(commit.message(), "feat(skills): add milestone-creator");
    }
}
