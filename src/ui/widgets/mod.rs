//! Reusable UI widgets

mod activity_table;

pub use activity_table::{ActivityTable, TableLayout, wrap_text};
