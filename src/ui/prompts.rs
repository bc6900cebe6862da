//! ui::prompts
//!
//! Interactive branch selection.
//!
//! # Design
//!
//! Selection is single-shot. The [`Selector`] moves through
//!
//! ```text
//! AwaitingInput --line--> Validating --ok--> Resolved
//!       |                     |
//!       +------EOF------------+--bad--> Rejected
//! ```
//!
//! and never returns to `AwaitingInput`. One blocking `read_until` is the
//! only wait; there is no retry loop. The prompt is written to its own
//! stream (stderr in the binary) so stdout stays parseable.

use std::io::{BufRead, Write};

use colored::Colorize;
use thiserror::Error;

use super::output::paint;
use crate::core::history::BranchEntry;
use crate::core::types::BranchName;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read input")]
    IoError(#[from] std::io::Error),
}

/// Why a selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Empty line or end of input.
    NoInput,
    /// Input was not an unsigned integer.
    NotANumber(String),
    /// Input was a number outside `1..=max`.
    OutOfRange {
        /// The input as typed (trimmed)
        value: String,
        /// Highest valid choice
        max: usize,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NoInput => write!(f, "No selection made"),
            Rejection::NotANumber(value) => write!(f, "Invalid selection: {}", value),
            Rejection::OutOfRange { value, max } => {
                write!(f, "Invalid selection: {} (expected 1-{})", value, max)
            }
        }
    }
}

/// Where the selector is in its single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    /// Waiting for the one line of input.
    AwaitingInput,
    /// A line arrived and is about to be checked.
    Validating(String),
    /// The line named a listed branch.
    Resolved(BranchEntry),
    /// The line was unusable. Terminal.
    Rejected(Rejection),
}

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// The user picked this entry.
    Resolved(BranchEntry),
    /// Nothing usable was chosen.
    Rejected(Rejection),
}

impl SelectionResult {
    /// The chosen branch, if any.
    pub fn chosen_branch(&self) -> Option<&BranchName> {
        match self {
            SelectionResult::Resolved(entry) => Some(&entry.branch),
            SelectionResult::Rejected(_) => None,
        }
    }
}

/// Check a line of input against a list of `len` entries.
///
/// Returns the 1-based rank on success.
///
/// # Example
///
/// ```
/// use lbranch::ui::prompts::{validate_choice, Rejection};
///
/// assert_eq!(validate_choice(" 2\n", 3), Ok(2));
/// assert_eq!(validate_choice("", 3), Err(Rejection::NoInput));
/// assert!(matches!(validate_choice("5", 3), Err(Rejection::OutOfRange { .. })));
/// ```
pub fn validate_choice(input: &str, len: usize) -> Result<usize, Rejection> {
    let value = input.trim();
    if value.is_empty() {
        return Err(Rejection::NoInput);
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(Rejection::NotANumber(value.to_string()));
    }

    let out_of_range = || Rejection::OutOfRange {
        value: value.to_string(),
        max: len,
    };
    // All digits, so a parse failure can only be overflow.
    let choice: usize = value.parse().map_err(|_| out_of_range())?;
    if choice == 0 || choice > len {
        return Err(out_of_range());
    }
    Ok(choice)
}

/// Single-shot branch selector over a ranked list.
#[derive(Debug)]
pub struct Selector<'a> {
    entries: &'a [BranchEntry],
    state: SelectorState,
}

impl<'a> Selector<'a> {
    /// Create a selector awaiting input.
    pub fn new(entries: &'a [BranchEntry]) -> Self {
        Self {
            entries,
            state: SelectorState::AwaitingInput,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Prompt text, e.g. `Enter branch number to checkout (1-3):`.
    pub fn prompt(&self) -> String {
        format!(
            "Enter branch number to checkout (1-{}):",
            self.entries.len()
        )
    }

    /// Feed the one line of input; `None` means end of input.
    ///
    /// Only acts in `AwaitingInput`.
    pub fn receive(&mut self, line: Option<&str>) {
        if self.state != SelectorState::AwaitingInput {
            return;
        }
        self.state = match line {
            Some(line) => SelectorState::Validating(line.to_string()),
            None => SelectorState::Rejected(Rejection::NoInput),
        };
    }

    /// Check the received line. Only acts in `Validating`.
    pub fn validate(&mut self) {
        let SelectorState::Validating(line) = &self.state else {
            return;
        };
        self.state = match validate_choice(line, self.entries.len()) {
            Ok(rank) => SelectorState::Resolved(self.entries[rank - 1].clone()),
            Err(rejection) => SelectorState::Rejected(rejection),
        };
    }

    /// Consume the selector, yielding its result.
    ///
    /// A selector that never reached a terminal state counts as no input.
    pub fn finish(self) -> SelectionResult {
        match self.state {
            SelectorState::Resolved(entry) => SelectionResult::Resolved(entry),
            SelectorState::Rejected(rejection) => SelectionResult::Rejected(rejection),
            SelectorState::AwaitingInput | SelectorState::Validating(_) => {
                SelectionResult::Rejected(Rejection::NoInput)
            }
        }
    }

    /// Prompt on `prompt`, read one line from `input`, and resolve.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::IoError` if writing the prompt or reading fails.
    pub fn run<R, W>(
        mut self,
        input: &mut R,
        prompt: &mut W,
        color: bool,
    ) -> Result<SelectionResult, PromptError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(prompt)?;
        writeln!(prompt, "{}", paint(&self.prompt(), color, |s| s.green()))?;
        prompt.flush()?;

        // Undecodable bytes become U+FFFD, which validation rejects.
        let mut raw = Vec::new();
        let read = input.read_until(b'\n', &mut raw)?;
        let line = String::from_utf8_lossy(&raw);
        self.receive((read > 0).then_some(&*line));
        self.validate();

        Ok(self.finish())
    }
}
