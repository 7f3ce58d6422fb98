//! Rendering tests for the activity table
//!
//! Uses insta + ratatui TestBackend for visual regression testing.

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

use github_activity::model::ActivityEntry;
use github_activity::ui::widgets::ActivityTable;

/// Render a table into a terminal exactly as large as it asks for
fn render(table: &ActivityTable, max_width: Option<u16>) -> Buffer {
    let layout = table.layout(max_width);
    let mut terminal = Terminal::new(TestBackend::new(layout.width, layout.height)).unwrap();
    terminal
        .draw(|frame| {
            frame.render_widget(table, frame.area());
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    buffer
        .content
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

#[test]
fn test_activity_table_single_row() {
    let entries = vec![ActivityEntry::new("2023-05-01 10:15:30", "Forked a/b-cd")];
    let table = ActivityTable::new("octocat", &entries);

    let lines = buffer_lines(&render(&table, None));

    assert_snapshot!(lines.join("\n"), @r"
    ╭Recent GitHub Activity for octocat╮
    │Timestamp            Description  │
    │                                  │
    │2023-05-01 10:15:30  Forked a/b-cd│
    ╰──────────────────────────────────╯
    ");
}

#[test]
fn test_activity_table_watch_event_row() {
    let entries = vec![ActivityEntry::new(
        "2023-05-01 10:15:30",
        "Starred octo/hello-world",
    )];
    let table = ActivityTable::new("octocat", &entries);

    let lines = buffer_lines(&render(&table, None));
    let row = &lines[3];

    assert!(row.contains("2023-05-01 10:15:30"));
    assert!(row.contains("Starred octo/hello-world"));
}

#[test]
fn test_activity_table_preserves_order() {
    let entries = vec![
        ActivityEntry::new("2023-05-03 00:00:00", "Forked a/one"),
        ActivityEntry::new("2023-05-01 00:00:00", "Starred b/two"),
        ActivityEntry::new("2023-05-02 00:00:00", "Added member to c/three"),
    ];
    let table = ActivityTable::new("octocat", &entries);

    let lines = buffer_lines(&render(&table, None));
    let body = &lines[3..6];

    assert!(body[0].contains("Forked a/one"));
    assert!(body[1].contains("Starred b/two"));
    assert!(body[2].contains("Added member to c/three"));
}

#[test]
fn test_activity_table_wraps_long_descriptions() {
    let entries = vec![
        ActivityEntry::new(
            "2023-05-01 10:15:30",
            "Responded on a comment from a pull request in { repository }",
        ),
        ActivityEntry::new("2023-05-01 09:00:00", "Starred octo/hello-world"),
    ];
    let table = ActivityTable::new("octocat", &entries);

    let buffer = render(&table, Some(50));
    let lines = buffer_lines(&buffer);

    assert_eq!(buffer.area.width, 50);
    // First description spans three lines, timestamp only on the first
    assert!(lines[3].contains("2023-05-01 10:15:30"));
    assert!(lines[3].contains("Responded on a comment from"));
    assert!(lines[4].contains("a pull request in {"));
    assert!(lines[5].contains("repository }"));
    assert!(!lines[4].contains("2023"));
    assert!(lines[6].contains("Starred octo/hello-world"));
}

#[test]
fn test_activity_table_colors() {
    let entries = vec![ActivityEntry::new("2023-05-01 10:15:30", "Forked a/b-cd")];
    let table = ActivityTable::new("octocat", &entries);

    let buffer = render(&table, None);
    let width = usize::from(buffer.area.width);
    let cell = |x: usize, y: usize| &buffer.content[y * width + x];

    // Title prefix, username, header, timestamp, description
    assert_eq!(cell(1, 0).fg, Color::Blue);
    assert_eq!(cell(28, 0).fg, Color::Green);
    assert_eq!(cell(1, 1).fg, Color::Magenta);
    assert_eq!(cell(1, 3).fg, Color::Cyan);
    assert_eq!(cell(22, 3).fg, Color::White);
}

#[test]
fn test_activity_table_empty_has_only_frame() {
    let table = ActivityTable::new("octocat", &[]);

    let lines = buffer_lines(&render(&table, None));

    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("Timestamp"));
}
