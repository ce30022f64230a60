#![forbid(unsafe_code)]

//! Queue-then-flush painter over a terminal writer.
//!
//! Screens draw by positioning styled text runs; all commands are queued on
//! the underlying writer and sent with a single flush per frame. There is
//! no cell buffer or damage tracking; six small screens repaint fully.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthChar;

use crate::geometry::Rect;
use crate::style::Style;

/// Clip `text` to at most `max_width` display columns.
///
/// Returns the longest prefix whose total width fits. A wide character that
/// would straddle the boundary is excluded entirely.
#[must_use]
pub fn clip_to_width(text: &str, max_width: u16) -> &str {
    let max = max_width as usize;
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// A painter that queues crossterm commands on a writer.
pub struct Surface<W: Write> {
    out: W,
}

impl<W: Write> Surface<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the whole screen.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    /// Print `text` at `(x, y)`, clipped to `max_width` columns.
    pub fn print(
        &mut self,
        x: u16,
        y: u16,
        max_width: u16,
        text: &str,
        style: Style,
    ) -> io::Result<()> {
        if max_width == 0 {
            return Ok(());
        }
        let clipped = clip_to_width(text, max_width);
        queue!(self.out, MoveTo(x, y))?;
        if let Some(fg) = style.fg {
            queue!(self.out, SetForegroundColor(fg))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.out, SetBackgroundColor(bg))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.out, Print(clipped))?;
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)
    }

    /// Print a full row: fills `row` with the style's background, then
    /// prints `text` left-aligned and clipped to the row width.
    pub fn print_row(&mut self, row: Rect, text: &str, style: Style) -> io::Result<()> {
        if row.is_empty() {
            return Ok(());
        }
        self.fill(row, style)?;
        self.print(row.x, row.y, row.width, text, style)
    }

    /// Fill a region with spaces in the given style (background paint).
    pub fn fill(&mut self, area: Rect, style: Style) -> io::Result<()> {
        if area.is_empty() {
            return Ok(());
        }
        let blank = " ".repeat(area.width as usize);
        for dy in 0..area.height {
            queue!(self.out, MoveTo(area.x, area.y + dy))?;
            if let Some(bg) = style.bg {
                queue!(self.out, SetBackgroundColor(bg))?;
            }
            queue!(self.out, Print(&blank))?;
            queue!(self.out, ResetColor)?;
        }
        Ok(())
    }

    /// Flush all queued commands to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_ascii() {
        assert_eq!(clip_to_width("hello", 3), "hel");
        assert_eq!(clip_to_width("hello", 5), "hello");
        assert_eq!(clip_to_width("hello", 10), "hello");
        assert_eq!(clip_to_width("hello", 0), "");
    }

    #[test]
    fn clip_wide_chars_do_not_straddle() {
        // Each CJK glyph is 2 columns wide.
        assert_eq!(clip_to_width("日本語", 4), "日本");
        assert_eq!(clip_to_width("日本語", 5), "日本");
        assert_eq!(clip_to_width("日本語", 6), "日本語");
    }

    #[test]
    fn print_queues_without_flush() {
        let mut buf = Vec::new();
        {
            let mut surface = Surface::new(&mut buf);
            surface
                .print(0, 0, 10, "ok", Style::new())
                .expect("queue print");
        }
        // MoveTo + Print payload ended up in the sink.
        let s = String::from_utf8_lossy(&buf);
        assert!(s.contains("ok"));
    }

    #[test]
    fn empty_regions_are_ignored() {
        let mut buf = Vec::new();
        let mut surface = Surface::new(&mut buf);
        surface
            .print_row(Rect::new(0, 0, 0, 1), "x", Style::new())
            .expect("no-op");
        surface.fill(Rect::new(0, 0, 5, 0), Style::new()).expect("no-op");
        assert!(buf.is_empty());
    }
}
