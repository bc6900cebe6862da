//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`BranchName`] - Validated Git branch name
//! - [`DisplayOptions`] - Per-run display settings resolved from flags, config and environment
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so a reflog destination that is not a branch
//! never makes it past the parser.
//!
//! # Examples
//!
//! ```
//! use lbranch::core::types::BranchName;
//!
//! let branch = BranchName::new("feature/my-branch").unwrap();
//! assert_eq!(branch.as_str(), "feature/my-branch");
//!
//! assert!(BranchName::new("invalid..name").is_err());
//! assert!(BranchName::new("HEAD").is_err());
//! ```

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),
}

/// A validated Git branch name.
///
/// Branch names must conform to Git's refname rules (see `git check-ref-format`):
/// - Cannot be empty
/// - Cannot start with `.` or `-`
/// - Cannot end with `.lock` or `/`
/// - Cannot contain `..`, `@{`, `//`, or ASCII control characters
/// - Cannot contain spaces, `~`, `^`, `:`, `\`, `?`, `*`, `[`
/// - Cannot be exactly `@` or `HEAD`
///
/// # Example
///
/// ```
/// use lbranch::core::types::BranchName;
///
/// let name = BranchName::new("bugfix/login").unwrap();
/// assert_eq!(name.as_str(), "bugfix/login");
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("HEAD~2").is_err());
/// assert!(BranchName::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates Git's refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a branch name against Git's refname rules.
    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot be empty".into(),
            ));
        }

        // "@" is shorthand for HEAD, and HEAD itself is never a branch
        if name == "@" || name == "HEAD" {
            return Err(TypeError::InvalidBranchName(format!(
                "branch name cannot be '{name}' (reserved)"
            )));
        }

        if name.starts_with('.') {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot start with '.'".into(),
            ));
        }
        if name.starts_with('-') {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot start with '-'".into(),
            ));
        }

        if name.ends_with(".lock") {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot end with '.lock'".into(),
            ));
        }
        if name.ends_with('/') {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot end with '/'".into(),
            ));
        }

        for sequence in ["..", "@{", "//"] {
            if name.contains(sequence) {
                return Err(TypeError::InvalidBranchName(format!(
                    "branch name cannot contain '{sequence}'"
                )));
            }
        }

        const INVALID_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];
        for c in INVALID_CHARS {
            if name.contains(c) {
                return Err(TypeError::InvalidBranchName(format!(
                    "branch name cannot contain '{c}'"
                )));
            }
        }

        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot contain control characters".into(),
            ));
        }

        for component in name.split('/').filter(|c| !c.is_empty()) {
            if component.starts_with('.') {
                return Err(TypeError::InvalidBranchName(
                    "path component cannot start with '.'".into(),
                ));
            }
            if component.ends_with(".lock") {
                return Err(TypeError::InvalidBranchName(
                    "path component cannot end with '.lock'".into(),
                ));
            }
        }

        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for BranchName {
    type Error = TypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check whether a reflog token looks like an (abbreviated) object id.
///
/// Git records detached checkouts with the commit id as the destination.
/// Anything made of 7 to 64 hex digits is treated as a commit, not a branch.
///
/// # Example
///
/// ```
/// use lbranch::core::types::looks_like_object_id;
///
/// assert!(looks_like_object_id("3f2a1b9"));
/// assert!(looks_like_object_id("abc123def4567890abc123def4567890abc12345"));
/// assert!(!looks_like_object_id("main"));
/// assert!(!looks_like_object_id("cafe"));
/// ```
pub fn looks_like_object_id(token: &str) -> bool {
    (7..=64).contains(&token.len()) && token.chars().all(|c| c.is_ascii_hexdigit())
}

/// Display settings for a single run.
///
/// Resolved once from CLI flags, config files and the environment, then
/// passed by reference to the command. Nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Maximum number of branches to show (always >= 1).
    pub count: usize,
    /// Emit ANSI color codes.
    pub color: bool,
    /// Prompt for a branch to check out after listing.
    pub interactive: bool,
    /// Leave the currently checked-out branch out of the list.
    pub exclude_current: bool,
}

impl DisplayOptions {
    /// Number of branches shown when neither flags nor config say otherwise.
    pub const DEFAULT_COUNT: usize = 5;
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            color: false,
            interactive: false,
            exclude_current: false,
        }
    }
}
