// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests running loghound against a real repository
//!
//! The repository is created with git2; reading it back needs the git
//! executable, so these tests are skipped when git is not installed.

use std::path::Path;
use std::process::Command;

use git2::{Oid, Repository, RepositoryInitOptions, Signature, Time};
use loghound::config::{Config, OutputFormat};
use similar_asserts::assert_eq;
use tempfile::TempDir;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn commit(repo: &Repository, message: &str, content: &str, parent: Option<Oid>, secs: i64) -> Oid {
    let mut builder = repo.treebuilder(None).expect("treebuilder");
    let blob = repo.blob(content.as_bytes()).expect("blob");
    builder.insert("file.txt", blob, 0o100644).expect("insert");
    let tree = repo
        .find_tree(builder.write().expect("write tree"))
        .expect("find tree");
    let sig = Signature::new("Jo Dev", "jo@example.com", &Time::new(secs, 0)).expect("sig");
    let parents: Vec<git2::Commit<'_>> = parent
        .map(|oid| repo.find_commit(oid).expect("parent"))
        .into_iter()
        .collect();
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
    repo.commit(None, &sig, &sig, message, &tree, &parent_refs)
        .expect("commit")
}

/// Two commits on `main`, the first tagged `v1.0`
fn small_repo() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("main");
    let repo = Repository::init_opts(dir.path(), &opts).expect("init");

    let first = commit(&repo, "First commit", "one\n", None, 1_600_000_000);
    let second = commit(
        &repo,
        "Second commit\n\nWith a body.\n",
        "two\n",
        Some(first),
        1_600_000_600,
    );
    repo.reference("refs/heads/main", second, true, "fixture")
        .expect("main");
    repo.set_head("refs/heads/main").expect("HEAD");
    let obj = repo.find_object(first, None).expect("object");
    repo.tag_lightweight("v1.0", &obj, false).expect("tag");
    repo.remote("origin", "https://example.com/jo/small.git")
        .expect("remote");
    dir
}

fn loghound(repo: &Path, extra: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_loghound"))
        .arg("-C")
        .arg(repo)
        .arg("-q")
        .args(extra)
        .env_remove("LOGHOUND_REPO")
        .env_remove("LOGHOUND_REMOTE")
        .output()
        .expect("run loghound")
}

#[test]
fn test_binary_text_output() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = small_repo();

    let output = loghound(dir.path(), &["--format", "text"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("(main) Second commit"), "line: {}", lines[0]);
    assert!(lines[1].contains("(tag: v1.0) First commit"), "line: {}", lines[1]);
    assert!(lines[1].contains("2020-09-13 12:26"), "line: {}", lines[1]);
}

#[test]
fn test_binary_json_output() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = small_repo();

    let output = loghound(dir.path(), &["-n", "1"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let commits = value.as_array().expect("array");
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0]["subject"], "Second commit");
    assert_eq!(commits[0]["body"], "With a body.\n");
    assert_eq!(commits[0]["author_name"], "Jo Dev");
    assert_eq!(commits[0]["remote_url"], "https://example.com/jo/small.git");
    assert_eq!(commits[0]["date"]["source"], "parsed");
    assert_eq!(commits[0]["decoration"]["kind"], "references");
}

#[test]
fn test_binary_missing_repo_fails() {
    let output = loghound(Path::new("/nonexistent/path/12345"), &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Repository path not found"), "stderr: {stderr}");
}

#[test]
fn test_binary_unknown_branch_fails() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = small_repo();

    let output = loghound(dir.path(), &["--branch", "no-such-branch"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_run_library_entry_point() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = small_repo();

    let config = Config {
        repo: Some(dir.path().to_path_buf()),
        format: OutputFormat::Text,
        path: Some("file.txt".into()),
        ..Default::default()
    };
    let rendered = loghound::run(&config).await.expect("run");
    assert_eq!(rendered.lines().count(), 2);
}
