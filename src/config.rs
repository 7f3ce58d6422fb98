//! Runtime configuration
//!
//! Built once by the binary from command-line flags and the environment,
//! then passed read-only to the client and the console.

use std::io::IsTerminal;
use std::time::Duration;

use clap::ValueEnum;

use crate::github::constants::{DEFAULT_API_URL, env};

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no decision for stdout
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os(env::NO_COLOR).is_none_or(|value| value.is_empty())
                    && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API base URL
    pub api_url: String,
    /// Request timeout (None = wait indefinitely)
    pub timeout: Option<Duration>,
    /// Color policy
    pub color: ColorMode,
    /// Maximum table width in columns (None = as wide as the content)
    pub max_width: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            color: ColorMode::default(),
            max_width: None,
        }
    }
}

impl Config {
    /// Set the timeout from a number of seconds (0 = no timeout)
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout = secs.filter(|&secs| secs > 0).map(Duration::from_secs);
        self
    }

    /// Limit tables to the terminal width when stdout is a terminal
    pub fn with_terminal_width(mut self) -> Self {
        if std::io::stdout().is_terminal() {
            self.max_width = crossterm::terminal::size().ok().map(|(cols, _)| cols);
        }
        self
    }
}
