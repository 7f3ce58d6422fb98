//! Event record parser

use tracing::warn;

use super::{INVALID_TIMESTAMP, Parser, describe_event, format_timestamp};
use crate::model::{ActivityEntry, EventKind, RawEvent};

impl Parser {
    /// Parse one raw event into an activity entry
    ///
    /// Never fails. An unparsable `created_at` renders as `invalid`.
    pub fn parse_event(event: &RawEvent) -> ActivityEntry {
        let timestamp = match format_timestamp(event.created_at()) {
            Ok(timestamp) => timestamp,
            Err(err) => {
                warn!(error = %err, kind = event.kind(), "Unparsable event timestamp");
                INVALID_TIMESTAMP.to_string()
            }
        };

        let kind = EventKind::parse(event.kind());
        let description = describe_event(&kind, &event.payload(), event.repository());

        ActivityEntry {
            timestamp,
            description,
        }
    }

    /// Parse a feed, preserving its order
    pub fn parse_events(events: &[RawEvent]) -> Vec<ActivityEntry> {
        events.iter().map(Self::parse_event).collect()
    }
}
