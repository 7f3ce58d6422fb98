//! Event kind discriminator

use std::fmt;

/// Kind of a GitHub event, from the `type` field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Push,
    Create,
    Delete,
    PullRequest,
    Issues,
    IssueComment,
    PullRequestReview,
    PullRequestReviewComment,
    Watch,
    Fork,
    Release,
    Member,
    /// Any kind without a description rule (holds the raw `type` string)
    Unknown(String),
}

impl EventKind {
    /// All kinds with a description rule
    pub const KNOWN: [EventKind; 12] = [
        EventKind::Push,
        EventKind::Create,
        EventKind::Delete,
        EventKind::PullRequest,
        EventKind::Issues,
        EventKind::IssueComment,
        EventKind::PullRequestReview,
        EventKind::PullRequestReviewComment,
        EventKind::Watch,
        EventKind::Fork,
        EventKind::Release,
        EventKind::Member,
    ];

    /// Resolve a `type` string. Matching is exact and case-sensitive.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "PushEvent" => Self::Push,
            "CreateEvent" => Self::Create,
            "DeleteEvent" => Self::Delete,
            "PullRequestEvent" => Self::PullRequest,
            "IssuesEvent" => Self::Issues,
            "IssueCommentEvent" => Self::IssueComment,
            "PullRequestReviewEvent" => Self::PullRequestReview,
            "PullRequestReviewCommentEvent" => Self::PullRequestReviewComment,
            "WatchEvent" => Self::Watch,
            "ForkEvent" => Self::Fork,
            "ReleaseEvent" => Self::Release,
            "MemberEvent" => Self::Member,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The `type` string as sent by the API
    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "PushEvent",
            Self::Create => "CreateEvent",
            Self::Delete => "DeleteEvent",
            Self::PullRequest => "PullRequestEvent",
            Self::Issues => "IssuesEvent",
            Self::IssueComment => "IssueCommentEvent",
            Self::PullRequestReview => "PullRequestReviewEvent",
            Self::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            Self::Watch => "WatchEvent",
            Self::Fork => "ForkEvent",
            Self::Release => "ReleaseEvent",
            Self::Member => "MemberEvent",
            Self::Unknown(kind) => kind,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
