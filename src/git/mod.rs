//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. Repository discovery, HEAD
//! inspection and reflog reads go through `git2`; branch switching runs
//! `git checkout`. No other module should import `git2`.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Current branch and unborn-HEAD detection
//! - Reading the HEAD reflog as [`ReflogRecord`](crate::core::history::ReflogRecord)s
//! - Checking out a branch
//!
//! # Seams
//!
//! [`CheckoutLog`] and [`BranchCheckout`] are the capabilities the command
//! layer depends on. [`Git`] implements both.

mod interface;
mod traits;

pub use interface::{Git, GitError};
pub use traits::{BranchCheckout, CheckoutLog};
