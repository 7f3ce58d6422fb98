//! GitHub access layer
//!
//! This module handles fetching a user's public events and turning them
//! into displayable entries.

pub mod constants;
mod client;
/// Parser module (public for integration testing)
pub mod parser;

pub use client::{GitHubClient, parse_feed};
pub use parser::{Parser, TimestampError, describe_event, format_timestamp};

use thiserror::Error;

/// Errors that can occur when fetching a user's events
#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("User '{username}' not found")]
    NotFound { username: String },

    #[error("GitHub API returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Could not reach GitHub: {0}")]
    Network(String),

    #[error("Invalid response from GitHub: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ActivityError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ActivityError::Decode(error_chain(&err))
        } else {
            ActivityError::Network(error_chain(&err))
        }
    }
}

/// An error's message followed by its sources, joined with ": "
///
/// reqwest keeps the actual cause (refused connection, DNS failure,
/// timeout) in the source chain rather than in its own message.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<serde_json::Error> for ActivityError {
    fn from(err: serde_json::Error) -> Self {
        ActivityError::Decode(err.to_string())
    }
}
