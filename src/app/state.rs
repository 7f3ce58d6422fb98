//! Application state

use std::io::Write;

use crate::config::Config;
use crate::ui::Console;

/// What a successful run showed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A table with this many rows
    Displayed(usize),
    /// The "no recent activity" notice
    NoActivity,
}

/// One invocation of the tool
#[derive(Debug)]
pub struct App<W: Write> {
    /// Configuration (read-only)
    pub(crate) config: Config,
    /// Output stream
    pub(crate) console: Console<W>,
}

impl<W: Write> App<W> {
    /// Create an app writing to `out`
    pub fn new(config: Config, out: W) -> Self {
        let console = Console::new(out, config.color.enabled(), config.max_width);
        Self { config, console }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.console.into_inner()
    }
}
