//! recent command - List recently checked out branches, optionally switch to one

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::core::history::{BranchEntry, HistoryReducer};
use crate::core::types::{BranchName, DisplayOptions};
use crate::git::{BranchCheckout, CheckoutLog};
use crate::ui::output::{self, paint, render_history, render_no_history, Verbosity};
use crate::ui::prompts::{Rejection, SelectionResult, Selector};

/// The three streams a run talks to.
///
/// The list goes to `stdout`; prompts and status go to `stderr`.
pub struct Streams<R, O, E> {
    /// Where the selection is read from
    pub stdin: R,
    /// Where the branch list is written
    pub stdout: O,
    /// Where prompts and status lines are written
    pub stderr: E,
}

/// What a run ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to list.
    NoHistory,
    /// The list was printed and no selection was asked for.
    Listed(Vec<BranchEntry>),
    /// The list was printed but the selection was unusable.
    Declined(Rejection),
    /// The chosen branch is now checked out.
    CheckedOut(BranchName),
}

/// List recent branches and, when `options.interactive` is set, check one out.
///
/// `current` is left out of the list only if `options.exclude_current` is set.
///
/// # Errors
///
/// Fails if the log cannot be read, a stream cannot be written, or
/// `git checkout` refuses the chosen branch.
pub fn recent<R, O, E>(
    log: &dyn CheckoutLog,
    checkout: &dyn BranchCheckout,
    options: &DisplayOptions,
    current: Option<BranchName>,
    streams: &mut Streams<R, O, E>,
    verbosity: Verbosity,
) -> Result<Outcome>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let events = log
        .checkout_events()
        .context("Failed to read branch history")?;
    output::debug(format!("{} checkout events in reflog", events.len()), verbosity);

    let exclude = if options.exclude_current { current } else { None };
    if let Some(branch) = &exclude {
        output::debug(format!("excluding current branch '{}'", branch), verbosity);
    }

    let entries = HistoryReducer::new(options.count)
        .excluding(exclude)
        .reduce(&events);

    if entries.is_empty() {
        write!(streams.stdout, "{}", render_no_history(None, options.color))?;
        streams.stdout.flush()?;
        return Ok(Outcome::NoHistory);
    }

    write!(streams.stdout, "{}", render_history(&entries, options.color))?;
    streams.stdout.flush()?;

    if !options.interactive {
        return Ok(Outcome::Listed(entries));
    }

    let selection = Selector::new(&entries)
        .run(&mut streams.stdin, &mut streams.stderr, options.color)
        .context("Failed to read selection")?;

    let branch = match selection {
        SelectionResult::Resolved(entry) => entry.branch,
        SelectionResult::Rejected(rejection) => {
            output::debug(format!("selection rejected: {:?}", rejection), verbosity);
            writeln!(
                streams.stderr,
                "{}",
                paint(&rejection.to_string(), options.color, |s| s.red())
            )?;
            return Ok(Outcome::Declined(rejection));
        }
    };

    writeln!(streams.stderr, "Checking out: {}", branch)?;
    streams.stderr.flush()?;

    checkout.checkout(&branch)?;

    writeln!(
        streams.stderr,
        "{}",
        paint(
            &format!("Successfully checked out {}", branch),
            options.color,
            |s| s.green()
        )
    )?;

    Ok(Outcome::CheckedOut(branch))
}
