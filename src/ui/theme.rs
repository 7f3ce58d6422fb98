//! Color theme definitions
//!
//! Centralized color constants for consistent output.

use ratatui::style::Color;

/// Colors for the activity table
pub mod activity_table {
    use super::*;

    /// Title text ("Recent GitHub Activity for")
    pub const TITLE: Color = Color::Blue;
    /// Username inside the title
    pub const USERNAME: Color = Color::Green;
    /// Column headers
    pub const HEADER: Color = Color::Magenta;
    /// Timestamp column
    pub const TIMESTAMP: Color = Color::Cyan;
    /// Description column
    pub const DESCRIPTION: Color = Color::White;
}

/// Colors for notices
pub mod notice {
    use super::*;

    /// Progress messages
    pub const INFO: Color = Color::Blue;
    /// Empty results
    pub const WARNING: Color = Color::Yellow;
    /// Failures
    pub const ERROR: Color = Color::Red;
}
