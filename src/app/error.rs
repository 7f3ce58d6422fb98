//! Top-level run errors

use std::io;

use thiserror::Error;

use super::EXIT_FAILURE;
use crate::github::ActivityError;

/// Everything that can end a run early
#[derive(Error, Debug)]
pub enum RunError {
    /// Fetching the feed failed
    #[error(transparent)]
    Fetch(#[from] ActivityError),

    /// The user pressed Ctrl-C
    #[error("Operation cancelled by user")]
    Interrupted,

    /// Anything else (e.g., stdout closed while printing)
    #[error("An unexpected error occurred: {0}")]
    Unexpected(color_eyre::Report),
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        RunError::Unexpected(color_eyre::Report::new(err))
    }
}

impl RunError {
    /// Process exit code for this error
    ///
    /// A cancelled run is a failed run.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Fetch(_) | RunError::Interrupted | RunError::Unexpected(_) => EXIT_FAILURE,
        }
    }
}
