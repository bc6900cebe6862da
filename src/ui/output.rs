//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! The branch list is the only thing written to stdout, so it stays
//! parseable when piped. Diagnostics, warnings and errors go to stderr.
//! When color is disabled, rendered text contains no escape bytes at all:
//! the plain path never touches `colored`.

use std::fmt::Display;

use colored::Colorize;

use crate::core::history::BranchEntry;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from the `--debug` flag.
    pub fn from_flags(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display, color: bool) {
    eprintln!("{}", paint(&format!("error: {}", message), color, |s| s.red()));
}

/// Print a warning message.
pub fn warn(message: impl Display, color: bool) {
    eprintln!(
        "{}",
        paint(&format!("warning: {}", message), color, |s| s.yellow())
    );
}

/// Apply `style` only when color is enabled.
pub fn paint<F>(text: &str, color: bool, style: F) -> String
where
    F: FnOnce(&str) -> colored::ColoredString,
{
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Header line stating how many branches follow.
pub fn format_header(shown: usize) -> String {
    let noun = if shown == 1 { "branch" } else { "branches" };
    format!("Last {} {}:", shown, noun)
}

/// Format one entry as `<rank>) <branch>`.
pub fn format_entry(entry: &BranchEntry, color: bool) -> String {
    let rank = format!("{})", entry.rank);
    format!("{} {}", paint(&rank, color, |s| s.green()), entry.branch)
}

/// Render the ranked branch list: a header followed by one line per entry.
///
/// Every line, including the last, ends with `\n`.
///
/// # Example
///
/// ```
/// use lbranch::core::history::BranchEntry;
/// use lbranch::core::types::BranchName;
/// use lbranch::ui::output::render_history;
///
/// let entries = vec![
///     BranchEntry { rank: 1, branch: BranchName::new("main").unwrap() },
///     BranchEntry { rank: 2, branch: BranchName::new("develop").unwrap() },
/// ];
/// assert_eq!(
///     render_history(&entries, false),
///     "Last 2 branches:\n1) main\n2) develop\n"
/// );
/// ```
pub fn render_history(entries: &[BranchEntry], color: bool) -> String {
    let mut out = paint(&format_header(entries.len()), color, |s| s.blue());
    out.push('\n');
    for entry in entries {
        out.push_str(&format_entry(entry, color));
        out.push('\n');
    }
    out
}

/// Render the message shown when there is nothing to list.
pub fn render_no_history(reason: Option<&str>, color: bool) -> String {
    let message = match reason {
        Some(reason) => format!("No branch history found - {}", reason),
        None => "No branch history found".to_string(),
    };
    format!("{}\n", paint(&message, color, |s| s.blue()))
}
