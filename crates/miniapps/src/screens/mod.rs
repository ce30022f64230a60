#![forbid(unsafe_code)]

//! Screen modules: one per widget.
//!
//! Each screen implements [`Screen`], owning its widget state and rendering.
//! Screens receive only key presses already filtered from the global chrome
//! bindings, and every `view` tolerates an empty area (silently inactive).

pub mod calculator;
pub mod clock;
pub mod password;
pub mod quiz;
pub mod todo;
pub mod word_count;

use std::io::{self, Write};

use miniapps_core::event::KeyEvent;
use miniapps_core::geometry::Rect;
use miniapps_core::style::Style;
use miniapps_core::surface::Surface;
use miniapps_widgets::input::Input;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

/// One keybinding help entry for the status bar.
#[derive(Debug, Clone, Copy)]
pub struct HelpEntry {
    /// Key label.
    pub key: &'static str,
    /// What it does.
    pub action: &'static str,
}

/// A self-contained widget screen.
pub trait Screen {
    /// Handle a key press. Returns an optional status-line toast.
    fn update(&mut self, key: &KeyEvent) -> Option<String>;

    /// Periodic tick (driven by the clock subscription).
    fn tick(&mut self) {}

    /// Render into `area`. Empty areas must be a no-op.
    fn view<W: Write>(
        &self,
        surface: &mut Surface<W>,
        area: Rect,
        palette: &Palette,
    ) -> io::Result<()>;

    /// Keybindings shown in the status bar.
    fn keybindings(&self) -> Vec<HelpEntry>;

    /// Full screen title.
    fn title(&self) -> &'static str;

    /// Short label for the nav bar.
    fn tab_label(&self) -> &'static str;

    /// Whether plain character keys are text for this screen (blocks the
    /// global `q` quit binding).
    fn wants_text_input(&self) -> bool {
        false
    }
}

/// Render a labelled input row, with a visible cursor cell when focused.
pub(crate) fn render_input<W: Write>(
    surface: &mut Surface<W>,
    row: Rect,
    label: &str,
    input: &Input,
    focused: bool,
    palette: &Palette,
) -> io::Result<()> {
    if row.is_empty() {
        return Ok(());
    }
    let label_style = if focused {
        palette.accent_text()
    } else {
        palette.muted_text()
    };
    surface.print_row(row, "", palette.body())?;
    surface.print(row.x, row.y, row.width, label, label_style)?;

    let label_width = label.width() as u16;
    if label_width + 1 >= row.width {
        return Ok(());
    }
    let field_x = row.x + label_width + 1;
    let field_width = row.width - label_width - 1;
    surface.print(field_x, row.y, field_width, input.value(), palette.body())?;

    if focused {
        // Invert the cell under the cursor so the position is visible.
        let prefix: String = input
            .value()
            .graphemes(true)
            .take(input.cursor())
            .collect();
        let cursor_x = field_x + prefix.width() as u16;
        if cursor_x < row.right() {
            let under: String = input
                .value()
                .graphemes(true)
                .nth(input.cursor())
                .unwrap_or(" ")
                .to_string();
            let cursor_style = Style {
                fg: Some(palette.bg),
                bg: Some(palette.accent),
                bold: false,
            };
            surface.print(cursor_x, row.y, row.right() - cursor_x, &under, cursor_style)?;
        }
    }
    Ok(())
}
