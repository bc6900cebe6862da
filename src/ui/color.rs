//! ui::color
//!
//! Decides whether output carries ANSI color codes.
//!
//! # Precedence
//!
//! The first signal that fires wins; nothing later can override it:
//! 1. `--no-color` flag → off
//! 2. `--force-color` flag → on
//! 3. `NO_COLOR` set to a non-empty value → off
//! 4. `FORCE_COLOR` set to anything but `0`/`false` → on
//! 5. stdout is an ANSI-capable terminal → on, otherwise off
//!
//! # Design
//!
//! Process state (environment variables, terminal attachment) is read only
//! through the [`Environment`] trait, so [`ColorPolicy`] itself is pure and
//! tests never touch the real environment.

use is_terminal::IsTerminal;

/// Environment variable that disables color when set.
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Environment variable that forces color when set.
pub const FORCE_COLOR_VAR: &str = "FORCE_COLOR";

/// Read access to the process environment and terminal.
pub trait Environment {
    /// Whether stdout is an interactive terminal that renders ANSI codes.
    fn is_terminal_interactive(&self) -> bool;

    /// Value of an environment variable, if set.
    fn env_override(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn is_terminal_interactive(&self) -> bool {
        if !std::io::stdout().is_terminal() {
            return false;
        }
        if self.env_override("TERM").as_deref() == Some("dumb") {
            return false;
        }

        enable_ansi()
    }

    fn env_override(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Legacy Windows consoles need virtual terminal processing switched on.
#[cfg(windows)]
fn enable_ansi() -> bool {
    colored::control::set_virtual_terminal(true).is_ok()
}

#[cfg(not(windows))]
fn enable_ansi() -> bool {
    true
}

/// Which signal settled the color decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDecision {
    /// `--no-color` was passed.
    NoColorFlag,
    /// `--force-color` was passed.
    ForceColorFlag,
    /// `NO_COLOR` is set.
    NoColorEnv,
    /// `FORCE_COLOR` is set.
    ForceColorEnv,
    /// No override; follows terminal detection.
    Terminal(bool),
}

impl ColorDecision {
    /// Whether color is enabled.
    pub fn enabled(self) -> bool {
        match self {
            ColorDecision::NoColorFlag | ColorDecision::NoColorEnv => false,
            ColorDecision::ForceColorFlag | ColorDecision::ForceColorEnv => true,
            ColorDecision::Terminal(enabled) => enabled,
        }
    }
}

impl std::fmt::Display for ColorDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorDecision::NoColorFlag => write!(f, "disabled by --no-color"),
            ColorDecision::ForceColorFlag => write!(f, "enabled by --force-color"),
            ColorDecision::NoColorEnv => write!(f, "disabled by {NO_COLOR_VAR}"),
            ColorDecision::ForceColorEnv => write!(f, "enabled by {FORCE_COLOR_VAR}"),
            ColorDecision::Terminal(true) => write!(f, "enabled (terminal)"),
            ColorDecision::Terminal(false) => write!(f, "disabled (not a terminal)"),
        }
    }
}

/// Color flags as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorPolicy {
    /// `--no-color`
    pub no_color: bool,
    /// `--force-color`
    pub force_color: bool,
}

impl ColorPolicy {
    /// Create a policy from the two CLI flags.
    pub fn new(no_color: bool, force_color: bool) -> Self {
        Self {
            no_color,
            force_color,
        }
    }

    /// Resolve the decision against an environment.
    ///
    /// # Example
    ///
    /// ```
    /// use lbranch::ui::color::{ColorDecision, ColorPolicy, Environment};
    ///
    /// struct Pipe;
    /// impl Environment for Pipe {
    ///     fn is_terminal_interactive(&self) -> bool { false }
    ///     fn env_override(&self, _: &str) -> Option<String> { None }
    /// }
    ///
    /// assert_eq!(ColorPolicy::new(false, false).resolve(&Pipe), ColorDecision::Terminal(false));
    /// assert!(ColorPolicy::new(false, true).resolve(&Pipe).enabled());
    /// ```
    pub fn resolve(&self, env: &dyn Environment) -> ColorDecision {
        if self.no_color {
            return ColorDecision::NoColorFlag;
        }
        if self.force_color {
            return ColorDecision::ForceColorFlag;
        }
        if env
            .env_override(NO_COLOR_VAR)
            .is_some_and(|value| !value.is_empty())
        {
            return ColorDecision::NoColorEnv;
        }
        if env
            .env_override(FORCE_COLOR_VAR)
            .is_some_and(|value| !matches!(value.as_str(), "0" | "false"))
        {
            return ColorDecision::ForceColorEnv;
        }
        ColorDecision::Terminal(env.is_terminal_interactive())
    }
}
