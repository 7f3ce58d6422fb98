//! Timestamp formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use crate::model::NOT_AVAILABLE;

/// Display format for event timestamps
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted layouts with an explicit offset (after `Z` became `+00:00`)
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Accepted layouts without an offset, read as UTC
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A non-empty timestamp that is not ISO 8601
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid timestamp: {input:?}")]
pub struct TimestampError {
    pub input: String,
}

/// Format an ISO 8601 timestamp as `YYYY-MM-DD HH:MM:SS` in UTC
///
/// A trailing `Z` means UTC. An empty input yields `N/A`.
pub fn format_timestamp(input: &str) -> Result<String, TimestampError> {
    if input.is_empty() {
        return Ok(NOT_AVAILABLE.to_string());
    }

    parse_iso8601(input)
        .map(|datetime| datetime.format(DISPLAY_FORMAT).to_string())
        .ok_or_else(|| TimestampError {
            input: input.to_string(),
        })
}

fn parse_iso8601(input: &str) -> Option<DateTime<Utc>> {
    let normalized = match input.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => input.to_string(),
    };

    let with_offset = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
        .map(|datetime| datetime.with_timezone(&Utc));
    if with_offset.is_some() {
        return with_offset;
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
