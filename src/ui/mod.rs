//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`color`] - Color policy and environment detection
//! - [`output`] - Output formatting and display
//! - [`prompts`] - Interactive branch selection
//!
//! # Design
//!
//! All terminal output and prompts go through this module so that the
//! color decision is applied consistently and stdout carries only the
//! branch list.

pub mod color;
pub mod output;
pub mod prompts;
