//! Common test utilities for integration and scenario tests.
//!
//! This module provides a one-shot HTTP server on a local port that
//! answers the first request with a canned response.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_server;

pub use mock_server::MockServer;

use github_activity::config::{ColorMode, Config};

/// Configuration pointing at a local server, without colors
pub fn test_config(api_url: &str) -> Config {
    Config {
        api_url: api_url.to_string(),
        color: ColorMode::Never,
        ..Config::default()
    }
}
