//! Console notice model
//!
//! Single-line messages printed around the activity table.

/// Severity of a notice (determines prefix and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Progress message (blue)
    Info,
    /// Nothing to show (yellow)
    Warning,
    /// The run failed (red, prefixed with "Error: ")
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The message to display
    pub message: String,
    /// Kind of notice
    pub kind: NoticeKind,
}

impl Notice {
    /// Create a new notice
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Create an info notice
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Info)
    }

    /// Create a warning notice
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Warning)
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }

    /// Full text as printed
    pub fn text(&self) -> String {
        match self.kind {
            NoticeKind::Error => format!("Error: {}", self.message),
            NoticeKind::Info | NoticeKind::Warning => self.message.clone(),
        }
    }
}
