//! Integration tests for the Git interface.
//!
//! These tests use real git repositories created via tempfile to verify
//! that reflog reading and checkout work against actual git operations.

mod support;

use tempfile::TempDir;

use lbranch::core::history::HistoryReducer;
use lbranch::core::types::BranchName;
use lbranch::git::{BranchCheckout, CheckoutLog, Git, GitError};
use support::{run_git, TestRepo};

fn branch(name: &str) -> BranchName {
    BranchName::new(name).unwrap()
}

fn destinations(git: &Git) -> Vec<String> {
    git.checkout_events()
        .unwrap()
        .iter()
        .map(|event| event.branch.to_string())
        .collect()
}

// =============================================================================
// Repository Opening Tests
// =============================================================================

#[test]
fn open_valid_repository() {
    let repo = TestRepo::new();
    assert!(Git::open(repo.path()).is_ok());
}

#[test]
fn open_from_subdirectory() {
    let repo = TestRepo::new();
    let subdir = repo.path().join("subdir");
    std::fs::create_dir(&subdir).unwrap();

    assert!(Git::open(&subdir).is_ok());
}

#[test]
fn open_non_repository_fails() {
    let dir = TempDir::new().unwrap();
    let git = Git::open(dir.path());
    assert!(matches!(git, Err(GitError::NotARepo { .. })));
}

#[test]
fn open_bare_repository_fails() {
    let dir = TempDir::new().unwrap();
    run_git(dir.path(), &["init", "--bare", "-q"]);

    let git = Git::open(dir.path());
    assert!(matches!(git, Err(GitError::BareRepo)));
}

// =============================================================================
// HEAD Tests
// =============================================================================

#[test]
fn fresh_repository_has_no_commits() {
    let repo = TestRepo::empty();
    let git = Git::open(repo.path()).unwrap();

    assert!(!git.has_commits().unwrap());
    assert_eq!(git.current_branch().unwrap(), None);
}

#[test]
fn committed_repository_has_commits() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path()).unwrap();

    assert!(git.has_commits().unwrap());
    assert_eq!(git.current_branch().unwrap(), Some(branch("main")));
}

#[test]
fn detached_head_has_no_current_branch() {
    let repo = TestRepo::new();
    let oid = repo.head_oid();
    repo.checkout(&oid);

    let git = Git::open(repo.path()).unwrap();
    assert_eq!(git.current_branch().unwrap(), None);
}

// =============================================================================
// Reflog Tests
// =============================================================================

#[test]
fn reflog_records_are_most_recent_first() {
    let repo = TestRepo::new();
    repo.create_branch("feature");
    repo.checkout("feature");

    let records = Git::open(repo.path()).unwrap().reflog_records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message, "checkout: moving from main to feature");
    assert!(records[1].message.starts_with("commit (initial):"));
    assert!(records[0].timestamp >= records[1].timestamp);
}

#[test]
fn commit_only_history_has_no_events() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "a", "Add a");

    let git = Git::open(repo.path()).unwrap();
    assert!(git.checkout_events().unwrap().is_empty());
}

#[test]
fn checkout_events_include_origin_branch() {
    let repo = TestRepo::with_history();
    let git = Git::open(repo.path()).unwrap();

    assert_eq!(
        destinations(&git),
        ["feature", "b1", "dev", "b2", "main", "b2", "b1", "main"]
    );

    let events = git.checkout_events().unwrap();
    let origin = events.last().unwrap();
    assert_eq!(origin.source, None);
    assert_eq!(origin.branch, branch("main"));
    assert_eq!(events[0].source.as_deref(), Some("b1"));
}

#[test]
fn detached_checkouts_are_skipped() {
    let repo = TestRepo::new();
    repo.create_branch("feature");
    let oid = repo.head_oid();
    repo.checkout(&oid);
    repo.checkout("feature");

    let git = Git::open(repo.path()).unwrap();
    // main -> <oid> is dropped; <oid> -> feature keeps feature.
    assert_eq!(destinations(&git), ["feature", "main"]);
}

#[test]
fn tag_checkout_left_behind_is_skipped() {
    let repo = TestRepo::new();
    repo.git(&["tag", "v1.0"]);
    repo.create_branch("dev");
    repo.checkout("v1.0");
    repo.checkout("dev");

    let git = Git::open(repo.path()).unwrap();
    assert_eq!(destinations(&git), ["dev", "main"]);
}

#[test]
fn tag_checkout_still_detached_is_skipped() {
    let repo = TestRepo::new();
    repo.git(&["tag", "v1.0"]);
    repo.create_branch("dev");
    repo.checkout("dev");
    repo.checkout("v1.0");

    let git = Git::open(repo.path()).unwrap();
    assert_eq!(git.current_branch().unwrap(), None);
    assert_eq!(destinations(&git), ["dev", "main"]);
}

#[test]
fn local_branch_lookup() {
    let repo = TestRepo::new();
    repo.git(&["tag", "v1.0"]);
    let git = Git::open(repo.path()).unwrap();

    assert!(git.is_local_branch(&branch("main")).unwrap());
    assert!(!git.is_local_branch(&branch("v1.0")).unwrap());
}

#[test]
fn reduced_history_matches_recency() {
    let repo = TestRepo::with_history();
    let git = Git::open(repo.path()).unwrap();
    let events = git.checkout_events().unwrap();

    let names = |entries: Vec<lbranch::core::history::BranchEntry>| -> Vec<String> {
        entries.into_iter().map(|e| e.branch.to_string()).collect()
    };

    assert_eq!(
        names(HistoryReducer::new(5).reduce(&events)),
        ["feature", "b1", "dev", "b2", "main"]
    );
    assert_eq!(
        names(
            HistoryReducer::new(5)
                .excluding(git.current_branch().unwrap())
                .reduce(&events)
        ),
        ["b1", "dev", "b2", "main"]
    );
}

// =============================================================================
// Checkout Tests
// =============================================================================

#[test]
fn checkout_switches_branch() {
    let repo = TestRepo::new();
    repo.create_branch("develop");

    let git = Git::open(repo.path()).unwrap();
    git.checkout(&branch("develop")).unwrap();

    assert_eq!(repo.current_branch(), "develop");
    assert_eq!(destinations(&git)[0], "develop");
}

#[test]
fn checkout_missing_branch_fails_with_git_message() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path()).unwrap();

    let err = git.checkout(&branch("does-not-exist")).unwrap_err();
    match err {
        GitError::CheckoutFailed { branch: b, message } => {
            assert_eq!(b, branch("does-not-exist"));
            assert!(message.contains("does-not-exist"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(repo.current_branch(), "main");
}

#[test]
fn checkout_refused_with_conflicting_changes() {
    let repo = TestRepo::new();
    repo.create_branch("other");
    repo.checkout("other");
    repo.commit_file("README.md", "# Other\n", "Change readme");
    repo.checkout("main");
    std::fs::write(repo.path().join("README.md"), "# Local edit\n").unwrap();

    let git = Git::open(repo.path()).unwrap();
    let err = git.checkout(&branch("other")).unwrap_err();

    assert!(matches!(err, GitError::CheckoutFailed { .. }));
    assert_eq!(repo.current_branch(), "main");
}
