//! GitHub API constants
//!
//! Centralized definitions for the endpoint, request headers and
//! environment variables.

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Path segments of the user events endpoint (`/users/{username}/events`)
pub mod endpoints {
    pub const USERS: &str = "users";
    pub const EVENTS: &str = "events";
}

/// Request headers
pub mod headers {
    /// Versioned JSON media type
    pub const ACCEPT: &str = "application/vnd.github.v3+json";

    /// Client identification (`github-activity/<version>`)
    pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
}

/// Environment variables read by the CLI
pub mod env {
    /// Overrides the API base URL
    pub const API_URL: &str = "GITHUB_ACTIVITY_API_URL";
    /// Request timeout in seconds
    pub const TIMEOUT: &str = "GITHUB_ACTIVITY_TIMEOUT";
    /// Disables colored output when set
    pub const NO_COLOR: &str = "NO_COLOR";
}
