//! UI components
//!
//! Reusable building blocks for console output.

pub mod message;

pub use message::{build_notice_line, display_width};
