//! core
//!
//! Core domain types and the history algorithm.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BranchName, DisplayOptions
//! - [`history`] - Reflog parsing and history reduction
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Parsing and reduction are pure and deterministic

pub mod config;
pub mod history;
pub mod types;
