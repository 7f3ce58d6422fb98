//! Notice message components
//!
//! Provides consistent styling for the single-line notices printed around
//! the activity table.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notice, NoticeKind};
use crate::ui::theme;

/// Build a styled line for a notice
///
/// Format: `[red]Error: message[/red]` for errors, the bare message in the
/// tier color otherwise.
pub fn build_notice_line(notice: &Notice) -> Line<'static> {
    let color = match notice.kind {
        NoticeKind::Info => theme::notice::INFO,
        NoticeKind::Warning => theme::notice::WARNING,
        NoticeKind::Error => theme::notice::ERROR,
    };

    Line::from(Span::styled(notice.text(), Style::default().fg(color)))
}

/// Width of a string in terminal columns
pub fn display_width(text: &str) -> usize {
    Line::raw(text).width()
}
