//! github-activity - recent GitHub activity in the terminal
//!
//! Fetches a user's public event feed and prints it as a table.
//!
//! This library provides:
//! - [`app`]: Run orchestration and exit codes
//! - [`config`]: Runtime configuration
//! - [`github`]: API client and event parsing
//! - [`model`]: Domain models
//! - [`ui`]: Table widget and console output

pub mod app;
pub mod config;
pub mod github;
pub mod model;
pub mod ui;
