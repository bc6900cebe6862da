//! lbranch - Show recently checked out Git branches
//!
//! lbranch reads the HEAD reflog, extracts branch checkouts, and lists the
//! most recently visited branches, newest first and without duplicates.
//! With `--select` it prompts for one of them and checks it out.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, wires collaborators)
//! - [`core`] - Domain types, reflog parsing, history reduction, configuration
//! - [`git`] - Single interface for all Git access
//! - [`ui`] - Color policy, rendering and the selection prompt
//!
//! # Invariants
//!
//! 1. The list never contains the same branch twice
//! 2. Entries are ordered by most recent checkout
//! 3. Only the branch list is written to stdout
//! 4. A branch is checked out only after a valid selection

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
