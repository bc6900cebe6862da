//! Shared fixture for tests that need a real git repository.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Test fixture that creates a real git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a repository on `main` with no commits.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init"]);
        // Pin the initial branch regardless of init.defaultBranch
        run_git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        Self { dir }
    }

    /// Create a repository on `main` with an initial commit.
    pub fn new() -> Self {
        let repo = Self::empty();
        std::fs::write(repo.path().join("README.md"), "# Test Repo\n").unwrap();
        repo.git(&["add", "README.md"]);
        repo.git(&["commit", "-m", "Initial commit"]);
        repo
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in this repository, panicking on failure.
    pub fn git(&self, args: &[&str]) {
        run_git(self.path(), args);
    }

    /// Create a branch at the current HEAD.
    pub fn create_branch(&self, name: &str) {
        self.git(&["branch", name]);
    }

    /// Checkout a branch (or any revision).
    pub fn checkout(&self, name: &str) {
        self.git(&["checkout", "-q", name]);
    }

    /// Create a file and commit it on the current branch.
    pub fn commit_file(&self, path: &str, content: &str, message: &str) {
        std::fs::write(self.path().join(path), content).unwrap();
        self.git(&["add", path]);
        self.git(&["commit", "-q", "-m", message]);
    }

    /// HEAD commit id, straight from git.
    pub fn head_oid(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    /// Name of the checked-out branch, straight from git.
    pub fn current_branch(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    /// Build a repository whose checkout history, oldest first, is
    /// main -> b1 -> b2 -> main -> b2 -> dev -> b1 -> feature.
    ///
    /// Most recent first that is feature, b1, dev, b2, main.
    pub fn with_history() -> Self {
        let repo = Self::new();
        for name in ["b1", "b2", "dev", "feature"] {
            repo.create_branch(name);
        }
        for name in ["b1", "b2", "main", "b2", "dev", "b1", "feature"] {
            repo.checkout(name);
        }
        repo
    }
}

/// Run a git command in the given directory.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
