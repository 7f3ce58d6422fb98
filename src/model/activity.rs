//! Normalized activity entry

/// One row of the activity table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityEntry {
    /// Display timestamp (`YYYY-MM-DD HH:MM:SS`, `N/A` or `invalid`)
    pub timestamp: String,
    /// Human-readable sentence describing the event
    pub description: String,
}

impl ActivityEntry {
    pub fn new(timestamp: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            description: description.into(),
        }
    }
}
