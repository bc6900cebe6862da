//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `COUNT` / `-n, --number <N>`: How many branches to show (default 5)
//! - `-s, --select` (alias `-c, --choose`): Pick a branch to check out
//! - `--no-color` / `--force-color`: Override color detection
//! - `--exclude-current`: Hide the branch you are on
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--completions <shell>`: Print a shell completion script

use clap::Parser;
use std::path::PathBuf;

use crate::ui::color::ColorPolicy;

/// Show recently checked out Git branches in most-recent-first order
#[derive(Parser, Debug)]
#[command(name = "lbranch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # The last 5 branches you checked out
    lbranch

    # The last 10, then pick one to switch to
    lbranch -n 10 -s

    # Plain output for scripts
    lbranch --no-color 3")]
pub struct Cli {
    /// Number of branches to display
    #[arg(value_name = "COUNT", value_parser = parse_count, conflicts_with = "number")]
    pub count: Option<usize>,

    /// Number of branches to display (same as COUNT)
    #[arg(short = 'n', long = "number", value_name = "N", value_parser = parse_count)]
    pub number: Option<usize>,

    /// Choose a listed branch to check out
    #[arg(
        short = 's',
        long = "select",
        visible_alias = "choose",
        visible_short_alias = 'c'
    )]
    pub select: bool,

    /// Never emit color codes
    #[arg(long)]
    pub no_color: bool,

    /// Always emit color codes, even when not writing to a terminal
    #[arg(long)]
    pub force_color: bool,

    /// Leave the currently checked-out branch out of the list
    #[arg(long)]
    pub exclude_current: bool,

    /// Run as if lbranch was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The count given on the command line, positional or `-n`.
    pub fn requested_count(&self) -> Option<usize> {
        self.count.or(self.number)
    }

    /// Color flags as a policy.
    pub fn color_policy(&self) -> ColorPolicy {
        ColorPolicy::new(self.no_color, self.force_color)
    }
}

/// Parse a branch count; must be a positive integer.
fn parse_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", value))?;
    if count == 0 {
        return Err("count must be at least 1".to_string());
    }
    Ok(count)
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
