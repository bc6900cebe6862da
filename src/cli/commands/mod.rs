//! cli::commands
//!
//! Command handlers.
//!
//! # Architecture
//!
//! Handlers take their collaborators (log source, checkout executor,
//! streams) as arguments rather than opening them, so tests drive them
//! with in-memory doubles. [`crate::cli::run`] wires in the real ones.

mod completion;
mod recent;

pub use completion::completion;
pub use recent::{recent, Outcome, Streams};
