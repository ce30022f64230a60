#![forbid(unsafe_code)]

//! Minimal text styling over crossterm colors.

pub use crossterm::style::Color;

/// Foreground/background/bold styling for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, `None` = terminal default.
    pub fg: Option<Color>,
    /// Background color, `None` = terminal default.
    pub bg: Option<Color>,
    /// Bold attribute.
    pub bold: bool,
}

impl Style {
    /// An unstyled style (terminal defaults).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
        }
    }

    /// Set the foreground color (builder).
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color (builder).
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enable bold (builder).
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_composes() {
        let s = Style::new().fg(Color::Green).bold();
        assert_eq!(s.fg, Some(Color::Green));
        assert_eq!(s.bg, None);
        assert!(s.bold);
    }
}
