//! Event feed parser
//!
//! Turns raw events into displayable entries.

mod describe;
mod event;
mod timestamp;

pub use describe::{REVIEW_COMMENT_DESCRIPTION, describe_event};
pub use timestamp::{DISPLAY_FORMAT, TimestampError, format_timestamp};


/// Placeholder timestamp for an event whose `created_at` cannot be parsed
pub const INVALID_TIMESTAMP: &str = "invalid";

/// Parser for GitHub event records
pub struct Parser;
