//! Application module
//!
//! Drives one invocation, split into:
//! - `state`: App struct
//! - `run`: fetch, parse, present and error reporting
//! - `error`: top-level error kinds and their exit codes

mod error;
mod run;
mod state;

pub use error::RunError;
pub use run::ctrl_c;
pub use state::{App, Outcome};

/// Exit code of a successful run (including "no recent activity")
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code of a failed or cancelled run
pub const EXIT_FAILURE: u8 = 1;
