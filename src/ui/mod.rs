//! UI layer
//!
//! Contains the activity table widget, notice lines, the console writer
//! and theme definitions.

pub mod components;
pub mod console;
pub mod theme;
pub mod widgets;

pub use console::Console;
