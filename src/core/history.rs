//! core::history
//!
//! Branch history reconstruction from reflog records.
//!
//! # Pipeline
//!
//! ```text
//! ReflogRecord* --parse_reflog--> CheckoutEvent* --HistoryReducer--> BranchEntry*
//! ```
//!
//! Records arrive most-recent-first. Parsing keeps only branch checkouts and
//! silently drops everything else (commits, resets, detached checkouts,
//! truncated lines). Reduction walks the events in order and keeps the first
//! occurrence of every branch, so rank order is recency order.
//!
//! Both steps are pure: no I/O, no clock, no global state.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::types::{looks_like_object_id, BranchName};

/// Reflog message prefix written by `git checkout` and `git switch`.
const CHECKOUT_PREFIX: &str = "checkout: moving from ";

/// One raw entry of the HEAD reflog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflogRecord {
    /// When the ref update happened.
    pub timestamp: DateTime<Utc>,
    /// The reflog message, e.g. `checkout: moving from main to feature`.
    pub message: String,
}

impl ReflogRecord {
    /// Create a record from a timestamp and message.
    pub fn new(timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }
}

/// A recognized switch of HEAD onto a named branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutEvent {
    /// When the checkout happened.
    pub timestamp: DateTime<Utc>,
    /// What HEAD pointed at before the checkout, as recorded by git.
    ///
    /// `None` for the synthetic origin event (see [`parse_reflog`]).
    pub source: Option<String>,
    /// The branch HEAD moved to.
    pub branch: BranchName,
}

/// A branch in the reduced history, with its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEntry {
    /// Position in the list, starting at 1.
    pub rank: usize,
    /// The branch name.
    pub branch: BranchName,
}

/// Split a checkout message into its `(source, destination)` tokens.
fn parse_transition(message: &str) -> Option<(&str, &str)> {
    let message = message.trim();
    let head = message.get(..CHECKOUT_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(CHECKOUT_PREFIX) {
        return None;
    }

    let mut tokens = message[CHECKOUT_PREFIX.len()..].split_whitespace();
    let source = tokens.next()?;
    if tokens.next()? != "to" {
        return None;
    }
    let destination = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    Some((source, destination))
}

/// Interpret a reflog token as a branch name.
///
/// Commit ids and anything failing refname validation yield `None`.
fn branch_token(token: &str) -> Option<BranchName> {
    if looks_like_object_id(token) {
        return None;
    }
    BranchName::new(token).ok()
}

/// Parse one reflog record into a checkout event.
///
/// Returns `None` for anything that is not a checkout onto a branch.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use lbranch::core::history::{parse_checkout, ReflogRecord};
///
/// let record = ReflogRecord::new(Utc::now(), "checkout: moving from main to feature/api");
/// let event = parse_checkout(&record).unwrap();
/// assert_eq!(event.branch.as_str(), "feature/api");
/// assert_eq!(event.source.as_deref(), Some("main"));
///
/// let commit = ReflogRecord::new(Utc::now(), "commit: add login form");
/// assert!(parse_checkout(&commit).is_none());
/// ```
pub fn parse_checkout(record: &ReflogRecord) -> Option<CheckoutEvent> {
    let (source, destination) = parse_transition(&record.message)?;
    let branch = branch_token(destination)?;

    Some(CheckoutEvent {
        timestamp: record.timestamp,
        source: Some(source.to_string()),
        branch,
    })
}

/// Parse a most-recent-first reflog into checkout events.
///
/// Unrecognized records are skipped. A checkout is also dropped when the
/// next newer checkout starts from a commit id: git records that when HEAD
/// was detached, so the destination was a tag or remote ref, not a branch.
/// The newest checkout has no such witness; see [`Git`](crate::git::Git)
/// for how it is checked against the live HEAD.
///
/// The source of the oldest checkout record is appended as a final event
/// when it names a branch: that is the branch the history started on,
/// which never shows up as a destination.
pub fn parse_reflog(records: &[ReflogRecord]) -> Vec<CheckoutEvent> {
    let mut events = Vec::new();
    let mut newer_source: Option<&str> = None;

    for record in records {
        let Some((source, _)) = parse_transition(&record.message) else {
            continue;
        };
        if !newer_source.is_some_and(looks_like_object_id) {
            events.extend(parse_checkout(record));
        }
        newer_source = Some(source);
    }

    let origin = records.iter().rev().find_map(|record| {
        parse_transition(&record.message).map(|(source, _)| (record.timestamp, source))
    });
    if let Some((timestamp, source)) = origin {
        if let Some(branch) = branch_token(source) {
            events.push(CheckoutEvent {
                timestamp,
                source: None,
                branch,
            });
        }
    }

    events
}

/// Reduces checkout events into a ranked, duplicate-free branch list.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use lbranch::core::history::{CheckoutEvent, HistoryReducer};
/// use lbranch::core::types::BranchName;
///
/// let events: Vec<CheckoutEvent> = ["main", "develop", "main"]
///     .iter()
///     .map(|name| CheckoutEvent {
///         timestamp: Utc::now(),
///         source: None,
///         branch: BranchName::new(*name).unwrap(),
///     })
///     .collect();
///
/// let entries = HistoryReducer::new(5).reduce(&events);
/// let names: Vec<_> = entries.iter().map(|e| e.branch.as_str()).collect();
/// assert_eq!(names, ["main", "develop"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryReducer {
    count: usize,
    exclude: Option<BranchName>,
}

impl HistoryReducer {
    /// Create a reducer that keeps at most `count` branches.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            exclude: None,
        }
    }

    /// Leave `branch` out of the result entirely.
    pub fn excluding(mut self, branch: Option<BranchName>) -> Self {
        self.exclude = branch;
        self
    }

    /// Reduce most-recent-first events to ranked entries.
    ///
    /// The first occurrence of a branch fixes its rank; later occurrences
    /// are ignored and do not consume a slot.
    pub fn reduce<'a, I>(&self, events: I) -> Vec<BranchEntry>
    where
        I: IntoIterator<Item = &'a CheckoutEvent>,
    {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut entries = Vec::new();

        for event in events {
            if entries.len() >= self.count {
                break;
            }
            if self.exclude.as_ref() == Some(&event.branch) {
                continue;
            }
            if seen.insert(event.branch.as_str()) {
                entries.push(BranchEntry {
                    rank: entries.len() + 1,
                    branch: event.branch.clone(),
                });
            }
        }

        entries
    }
}
