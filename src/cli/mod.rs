//! cli
//!
//! Command-line interface layer for lbranch.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Resolve color, configuration and display options
//! - Wire the real repository and terminal into the command handler
//! - Report errors and choose the exit code
//!
//! # Architecture
//!
//! The CLI layer is thin. Precedence for every setting is
//! flag > repo config > global config > default. The handler in
//! [`commands`] never looks at the process environment itself.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::io;
use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::types::DisplayOptions;
use crate::git::Git;
use crate::ui::color::ProcessEnvironment;
use crate::ui::output::{self, render_no_history, Verbosity};
use commands::Streams;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Errors are printed
/// as `error: <chain>` on stderr and map to exit code 1.
pub fn run() -> ExitCode {
    let cli = Cli::parse_args();

    let verbosity = Verbosity::from_flags(cli.debug);
    let decision = cli.color_policy().resolve(&ProcessEnvironment);
    let color = decision.enabled();
    colored::control::set_override(color);
    output::debug(format!("color {}", decision), verbosity);

    match execute(&cli, color, verbosity) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err), color);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli, color: bool, verbosity: Verbosity) -> Result<()> {
    if let Some(shell) = cli.completions {
        return commands::completion(shell, &mut io::stdout().lock());
    }

    let cwd = match &cli.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let git = Git::open(&cwd).context("Failed to open repository")?;
    output::debug(format!("repository at {}", git.git_dir().display()), verbosity);

    if !git.has_commits().context("Failed to read HEAD")? {
        print!(
            "{}",
            render_no_history(Some("repository has no commits yet"), color)
        );
        return Ok(());
    }

    let config = Config::load(Some(git.git_dir())).context("Failed to load configuration")?;
    if let Some(path) = config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = config.repo_config_loaded_from() {
        output::debug(format!("repo config: {}", path.display()), verbosity);
    }

    let options = DisplayOptions {
        count: cli.requested_count().unwrap_or_else(|| config.count()),
        color,
        interactive: cli.select,
        exclude_current: cli.exclude_current || config.exclude_current(),
    };
    output::debug(format!("{:?}", options), verbosity);

    let current = if options.exclude_current {
        let current = git
            .current_branch()
            .context("Failed to determine current branch")?;
        if current.is_none() {
            output::warn("HEAD is not on a branch; nothing to exclude", color);
        }
        current
    } else {
        None
    };

    let mut streams = Streams {
        stdin: io::stdin().lock(),
        stdout: io::stdout().lock(),
        stderr: io::stderr().lock(),
    };
    let outcome = commands::recent(&git, &git, &options, current, &mut streams, verbosity)?;
    output::debug(format!("outcome: {:?}", outcome), verbosity);

    Ok(())
}
