//! Event descriptions

use crate::model::{EventKind, Payload};

/// Description of a pull request review comment
///
/// Kept as a literal, braces included, to match the output users already
/// see. The repository is not interpolated.
pub const REVIEW_COMMENT_DESCRIPTION: &str =
    "Responded on a comment from a pull request in { repository }";

/// Describe an event in one sentence
///
/// Missing payload fields fall back to the defaults in
/// [`crate::model::defaults`].
pub fn describe_event(kind: &EventKind, payload: &Payload, repository: &str) -> String {
    match kind {
        EventKind::Push => format!("Pushed {} commits to {repository}", payload.size()),
        EventKind::Create => format!("Created {} in {repository}", payload.ref_type()),
        EventKind::Delete => format!("Deleted {} in {repository}", payload.ref_type()),
        EventKind::PullRequest => format!("Pull request {} in {repository}", payload.action()),
        EventKind::Issues => format!("Issue {} in {repository}", payload.action()),
        EventKind::IssueComment => format!("Commented on issue in {repository}"),
        EventKind::PullRequestReview => format!("Reviewed a pull request in {repository}"),
        EventKind::PullRequestReviewComment => REVIEW_COMMENT_DESCRIPTION.to_string(),
        EventKind::Watch => format!("Starred {repository}"),
        EventKind::Fork => format!("Forked {repository}"),
        EventKind::Release => format!("Released {}", payload.tag_name()),
        EventKind::Member => format!("Added member to {repository}"),
        EventKind::Unknown(kind) => format!("Unknown event: {kind}"),
    }
}
