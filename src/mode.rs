//! Output mode selection from flags and environment signals.

use crate::constants::env;
use clap::ValueEnum;
use log::debug;
use std::fmt::Display;

/// How results are presented for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Mode {
    /// Let the environment decide.
    #[default]
    Auto,
    /// Styled, human-readable text.
    Console,
    /// A single JSON document.
    Json,
    /// Interactive terminal UI (currently rendered as console output).
    Tui,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Auto => "auto",
            Mode::Console => "console",
            Mode::Json => "json",
            Mode::Tui => "tui",
        };
        write!(f, "{s}")
    }
}

/// Snapshot of the flags and environment that influence output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiConfig {
    /// `--json`
    pub json: bool,
    /// `--interactive`
    pub interactive: bool,
    /// `--no-color`, or `NO_COLOR` set to a non-empty value
    pub no_color: bool,
    /// Mode pinned by the caller; `Auto` when not pinned
    pub mode: Mode,
    /// Value of `CI` if the variable is present, even when empty
    pub ci: Option<String>,
    pub stdout_is_terminal: bool,
}

impl UiConfig {
    /// Builds the config from flags and the process environment.
    pub fn from_env(json: bool, interactive: bool, no_color: bool, mode: Mode) -> Self {
        Self::from_lookup(
            json,
            interactive,
            no_color,
            mode,
            |key| std::env::var(key).ok(),
            console::Term::stdout().is_term(),
        )
    }

    /// Builds the config from flags and an injected environment lookup.
    pub fn from_lookup<F>(
        json: bool,
        interactive: bool,
        no_color: bool,
        mode: Mode,
        lookup: F,
        stdout_is_terminal: bool,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let no_color_env = lookup(env::NO_COLOR).is_some_and(|v| !v.is_empty());
        Self {
            json,
            interactive,
            no_color: no_color || no_color_env,
            mode,
            ci: lookup(env::CI),
            stdout_is_terminal,
        }
    }

    /// Whether any signal asks for plain, uncolored output.
    pub fn color_disabled(&self) -> bool {
        self.no_color || self.ci.is_some() || !self.stdout_is_terminal
    }

    pub fn color_enabled(&self) -> bool {
        !self.color_disabled()
    }
}

/// Picks the output mode. The checks run in a fixed priority order:
///
/// 1. `json` flag
/// 2. `interactive` flag
/// 3. a pinned, non-`Auto` mode
/// 4. color-disabling signals (no-color, `CI`, not a terminal)
/// 5. console
pub fn detect_mode(config: &UiConfig) -> Mode {
    if config.json {
        debug!("Output mode: json (--json)");
        return Mode::Json;
    }
    if config.interactive {
        debug!("Output mode: tui (--interactive)");
        return Mode::Tui;
    }
    if config.mode != Mode::Auto {
        debug!("Output mode: {} (pinned)", config.mode);
        return config.mode;
    }
    if config.color_disabled() {
        debug!("Output mode: console (color disabled or not a terminal)");
        return Mode::Console;
    }
    // TUI is not implemented, so an attended terminal still gets the console.
    Mode::Console
}
