//! Data models
//!
//! UI-independent data structures for GitHub events and what is shown
//! to the user.

mod activity;
mod event;
mod event_kind;
mod notice;

pub use activity::ActivityEntry;
pub use event::{NOT_AVAILABLE, Payload, RawEvent, Release, Repo, defaults};
pub use event_kind::EventKind;
pub use notice::{Notice, NoticeKind};
