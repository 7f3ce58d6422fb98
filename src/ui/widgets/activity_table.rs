//! Activity table widget
//!
//! Lays out normalized entries as a two-column table (Timestamp,
//! Description) inside a rounded, titled border.

use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Cell, Row, Table, Widget},
};
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

use crate::model::ActivityEntry;
use crate::ui::components::display_width;
use crate::ui::theme::activity_table as colors;

/// Header of the timestamp column
pub const TIMESTAMP_HEADER: &str = "Timestamp";
/// Header of the description column
pub const DESCRIPTION_HEADER: &str = "Description";

const TITLE_PREFIX: &str = "Recent GitHub Activity for ";
const COLUMN_SPACING: u16 = 2;
/// Left + right (or top + bottom) border
const BORDERS: u16 = 2;
/// Header row + blank line below it
const HEADER_HEIGHT: u16 = 2;
/// Descriptions are never squeezed below this
const MIN_DESCRIPTION_WIDTH: u16 = 12;

/// Computed table dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Total width including borders
    pub width: u16,
    /// Total height including borders, title and header
    pub height: u16,
    pub timestamp_width: u16,
    pub description_width: u16,
}

/// Table of a user's recent activity
#[derive(Debug, Clone, Copy)]
pub struct ActivityTable<'a> {
    username: &'a str,
    entries: &'a [ActivityEntry],
}

impl<'a> ActivityTable<'a> {
    pub fn new(username: &'a str, entries: &'a [ActivityEntry]) -> Self {
        Self { username, entries }
    }

    /// Title line: "Recent GitHub Activity for <username>"
    pub fn title(&self) -> Line<'a> {
        Line::from(vec![
            Span::raw(TITLE_PREFIX).fg(colors::TITLE).bold(),
            Span::raw(self.username).fg(colors::USERNAME).bold(),
        ])
    }

    /// Dimensions needed to show every entry
    ///
    /// With `max_width`, descriptions wrap so the table fits. The timestamp
    /// column is never wrapped.
    pub fn layout(&self, max_width: Option<u16>) -> TableLayout {
        let timestamp_width = self
            .entries
            .iter()
            .map(|entry| display_width(&entry.timestamp))
            .fold(display_width(TIMESTAMP_HEADER), usize::max);
        let timestamp_width = to_u16(timestamp_width);

        let natural_description = self
            .entries
            .iter()
            .map(|entry| display_width(&entry.description))
            .fold(display_width(DESCRIPTION_HEADER), usize::max);

        let fixed = timestamp_width
            .saturating_add(COLUMN_SPACING)
            .saturating_add(BORDERS);
        let title_width = to_u16(self.title().width()).saturating_add(BORDERS);
        let natural = fixed
            .saturating_add(to_u16(natural_description))
            .max(title_width);

        let width = match max_width {
            Some(max) => natural
                .min(max)
                .max(fixed.saturating_add(MIN_DESCRIPTION_WIDTH)),
            None => natural,
        };
        let description_width = width - fixed;

        let rows_height = self
            .entries
            .iter()
            .map(|entry| to_u16(wrap_text(&entry.description, description_width.into()).len()))
            .fold(0u16, u16::saturating_add);

        TableLayout {
            width,
            height: BORDERS
                .saturating_add(HEADER_HEIGHT)
                .saturating_add(rows_height),
            timestamp_width,
            description_width,
        }
    }

    fn row(entry: &'a ActivityEntry, description_width: u16) -> Row<'a> {
        let lines: Vec<Line> = wrap_text(&entry.description, description_width.into())
            .into_iter()
            .map(Line::from)
            .collect();
        let height = to_u16(lines.len());

        Row::new(vec![
            Cell::from(entry.timestamp.as_str()).fg(colors::TIMESTAMP),
            Cell::from(Text::from(lines)).fg(colors::DESCRIPTION),
        ])
        .height(height)
    }
}

impl Widget for &ActivityTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(Some(area.width));

        let header = Row::new([TIMESTAMP_HEADER, DESCRIPTION_HEADER])
            .style(
                Style::default()
                    .fg(colors::HEADER)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let rows = self
            .entries
            .iter()
            .map(|entry| ActivityTable::row(entry, layout.description_width));

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(self.title().centered());

        Table::new(
            rows,
            [
                Constraint::Length(layout.timestamp_width),
                Constraint::Length(layout.description_width),
            ],
        )
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(block)
        .render(area, buf);
    }
}

/// Wrap text on spaces to fit `width` columns
///
/// Text that already fits is returned unchanged. Words longer than `width`
/// are split. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || display_width(text) <= width {
        return vec![text.to_string()];
    }

    let options = Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation);

    textwrap::wrap(text, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
