//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to Git in lbranch. Reads go
//! through libgit2; the one mutation lbranch performs, switching branches,
//! shells out to `git checkout` so the user gets git's own safety checks
//! and messages.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no working tree
//! - [`GitError::CheckoutFailed`]: `git checkout` refused to switch
//! - [`GitError::CommandFailed`]: The `git` binary could not be run
//!
//! # Example
//!
//! ```ignore
//! use lbranch::git::{CheckoutLog, Git};
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! for event in git.checkout_events()? {
//!     println!("{}", event.branch);
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::traits::{BranchCheckout, CheckoutLog};
use crate::core::history::{parse_reflog, CheckoutEvent, ReflogRecord};
use crate::core::types::{BranchName, TypeError};

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Requested ref does not exist.
    #[error("ref not found: {refname}")]
    RefNotFound {
        /// The ref that was not found
        refname: String,
    },

    /// Invalid branch name.
    #[error("invalid branch name: {message}")]
    InvalidBranchName {
        /// Description of the problem
        message: String,
    },

    /// `git checkout` exited unsuccessfully.
    #[error("failed to checkout branch '{branch}':\n{message}")]
    CheckoutFailed {
        /// The branch that could not be checked out
        branch: BranchName,
        /// What git printed on stderr
        message: String,
    },

    /// The `git` binary could not be executed.
    #[error("failed to run git: {message}")]
    CommandFailed {
        /// The error message
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with richer context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound => GitError::RefNotFound {
                refname: context.to_string(),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

impl From<TypeError> for GitError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidBranchName(message) => GitError::InvalidBranchName { message },
        }
    }
}

/// The Git interface.
///
/// Wraps a discovered `git2::Repository`. No other module imports `git2`.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Get direct access to the .git directory path.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    // =========================================================================
    // HEAD
    // =========================================================================

    /// Check whether HEAD points at a commit.
    ///
    /// Returns `false` for a freshly initialized repository.
    pub fn has_commits(&self) -> Result<bool, GitError> {
        match self.repo.head() {
            Ok(head) => Ok(head.peel_to_commit().is_ok()),
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound
                ) =>
            {
                Ok(false)
            }
            Err(e) => Err(GitError::from_git2(e, "HEAD")),
        }
    }

    /// Get the current branch name, if on a branch.
    ///
    /// Returns `None` if HEAD is detached or unborn.
    pub fn current_branch(&self) -> Result<Option<BranchName>, GitError> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if head.is_branch() {
            if let Some(name) = head.shorthand() {
                return Ok(Some(BranchName::new(name)?));
            }
        }

        Ok(None) // Detached HEAD
    }

    // =========================================================================
    // Reflog
    // =========================================================================

    /// Check whether `branch` exists under `refs/heads/`.
    pub fn is_local_branch(&self, branch: &BranchName) -> Result<bool, GitError> {
        match self
            .repo
            .find_branch(branch.as_str(), git2::BranchType::Local)
        {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(GitError::from_git2(e, branch.as_str())),
        }
    }

    /// Read the HEAD reflog, most recent entry first.
    ///
    /// A repository without a HEAD reflog yields an empty list.
    pub fn reflog_records(&self) -> Result<Vec<ReflogRecord>, GitError> {
        let reflog = self
            .repo
            .reflog("HEAD")
            .map_err(|e| GitError::from_git2(e, "HEAD"))?;

        let records = reflog
            .iter()
            .map(|entry| {
                let seconds = entry.committer().when().seconds();
                ReflogRecord {
                    timestamp: DateTime::<Utc>::from_timestamp(seconds, 0).unwrap_or_default(),
                    message: entry.message().unwrap_or_default().to_string(),
                }
            })
            .collect();

        Ok(records)
    }
}

impl CheckoutLog for Git {
    fn checkout_events(&self) -> Result<Vec<CheckoutEvent>, GitError> {
        let mut events = parse_reflog(&self.reflog_records()?);

        // Nothing newer in the reflog says whether the newest checkout
        // detached HEAD, so ask HEAD itself.
        if self.repo.head_detached()? {
            let newest_is_branch = match events.first() {
                Some(newest) => self.is_local_branch(&newest.branch)?,
                None => true,
            };
            if !newest_is_branch {
                events.remove(0);
            }
        }

        Ok(events)
    }
}

impl BranchCheckout for Git {
    fn checkout(&self, branch: &BranchName) -> Result<(), GitError> {
        let work_dir = self.repo.workdir().ok_or(GitError::BareRepo)?;

        let output = Command::new("git")
            .args(["checkout", branch.as_str()])
            .current_dir(work_dir)
            .output()
            .map_err(|e| GitError::CommandFailed {
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(GitError::CheckoutFailed {
                branch: branch.clone(),
                message: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(())
    }
}
