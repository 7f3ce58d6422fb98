//! Console output
//!
//! Writes notices and tables to a plain `io::Write` stream as regular
//! scrollback text. Widgets are rendered into an off-screen [`Buffer`]
//! first, then emitted line by line with crossterm style commands when
//! color is enabled.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{
        Attribute, Color as CColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::model::Notice;
use crate::ui::components::{build_notice_line, display_width};
use crate::ui::widgets::ActivityTable;

/// Modifiers carried over to the terminal
const ATTRIBUTES: [(Modifier, Attribute); 5] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::UNDERLINED, Attribute::Underlined),
    (Modifier::REVERSED, Attribute::Reverse),
];

/// Line-oriented writer for user-facing output
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    color: bool,
    max_width: Option<u16>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool, max_width: Option<u16>) -> Self {
        Self {
            out,
            color,
            max_width,
        }
    }

    /// Print a notice on its own line
    pub fn notice(&mut self, notice: &Notice) -> io::Result<()> {
        let line = build_notice_line(notice);
        self.write_line(&line)?;
        self.out.flush()
    }

    /// Print unstyled text on its own line
    pub fn plain(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Print the activity table
    pub fn table(&mut self, table: &ActivityTable) -> io::Result<()> {
        let layout = table.layout(self.max_width);
        let area = Rect::new(0, 0, layout.width, layout.height);
        let mut buffer = Buffer::empty(area);
        table.render(area, &mut buffer);

        self.write_buffer(&buffer)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &Line) -> io::Result<()> {
        for span in &line.spans {
            if self.color {
                queue_style(&mut self.out, line.style.patch(span.style))?;
            }
            queue!(self.out, Print(span.content.as_ref()))?;
        }
        self.end_line()
    }

    fn write_buffer(&mut self, buffer: &Buffer) -> io::Result<()> {
        let width = usize::from(buffer.area.width);
        if width == 0 {
            return Ok(());
        }

        for row in buffer.content.chunks(width) {
            let mut current: Option<Style> = None;
            let mut skip = 0;

            for cell in row {
                // Cells hidden behind a wide character
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                skip = display_width(symbol).saturating_sub(1);

                if self.color {
                    let style = cell.style();
                    if current != Some(style) {
                        queue_style(&mut self.out, style)?;
                        current = Some(style);
                    }
                }
                queue!(self.out, Print(symbol))?;
            }
            self.end_line()?;
        }
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        if self.color {
            queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        }
        queue!(self.out, Print("\n"))
    }
}

/// Switch the terminal to `style`, starting from a clean state
fn queue_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;

    if let Some(fg) = style.fg.filter(|&fg| fg != Color::Reset) {
        queue!(out, SetForegroundColor(CColor::from(fg)))?;
    }
    if let Some(bg) = style.bg.filter(|&bg| bg != Color::Reset) {
        queue!(out, SetBackgroundColor(CColor::from(bg)))?;
    }
    for (modifier, attribute) in ATTRIBUTES {
        if style.add_modifier.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}
