//! git::traits
//!
//! Capability traits at the Git boundary.
//!
//! # Design
//!
//! The command layer never talks to [`Git`](super::Git) directly. It asks
//! for checkout history through [`CheckoutLog`] and switches branches
//! through [`BranchCheckout`]. `Git` implements both; tests substitute
//! in-memory doubles so no repository or `git` binary is needed.
//!
//! # Example
//!
//! ```
//! use lbranch::core::history::CheckoutEvent;
//! use lbranch::git::{CheckoutLog, GitError};
//!
//! struct Fixed(Vec<CheckoutEvent>);
//!
//! impl CheckoutLog for Fixed {
//!     fn checkout_events(&self) -> Result<Vec<CheckoutEvent>, GitError> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! assert!(Fixed(vec![]).checkout_events().unwrap().is_empty());
//! ```

use super::GitError;
use crate::core::history::CheckoutEvent;
use crate::core::types::BranchName;

/// Source of checkout history.
pub trait CheckoutLog {
    /// Produce checkout events, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying log cannot be read.
    fn checkout_events(&self) -> Result<Vec<CheckoutEvent>, GitError>;
}

/// Executor that switches the working tree to a branch.
pub trait BranchCheckout {
    /// Check out `branch`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CheckoutFailed`] carrying git's own message when
    /// the checkout is refused (dirty tree, missing branch, ...).
    fn checkout(&self, branch: &BranchName) -> Result<(), GitError>;
}
