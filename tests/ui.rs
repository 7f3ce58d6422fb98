//! UI rendering tests using insta and ratatui's TestBackend
//!
//! These tests capture rendered output for regression detection.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

#[path = "ui/test_activity_table.rs"]
mod test_activity_table;

#[path = "ui/test_notice.rs"]
mod test_notice;
