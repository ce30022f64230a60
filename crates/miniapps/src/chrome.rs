#![forbid(unsafe_code)]

//! Application chrome: the nav row on top and the status row on the
//! bottom, framing the active screen's body area.
//!
//! The nav collapses to a hamburger glyph plus the active title; expanded
//! it lists every tab with the active one highlighted. The status row
//! shows either the current toast or the active screen's keybindings,
//! with the theme toggle glyph pinned to the right edge.

use std::io::{self, Write};

use miniapps_core::geometry::Rect;
use miniapps_core::style::Style;
use miniapps_core::surface::Surface;
use unicode_width::UnicodeWidthStr;

use crate::screens::HelpEntry;
use crate::theme::{Palette, ThemeFlag};

/// Vertical layout: nav, body, status.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Top nav row.
    pub nav: Rect,
    /// Screen body, inset one cell from the frame.
    pub body: Rect,
    /// Bottom status row.
    pub status: Rect,
}

/// Split the terminal area into chrome and body.
#[must_use]
pub fn layout(area: Rect) -> Layout {
    let (nav, rest) = area.split_top(1);
    let (middle, status) = rest.split_bottom(1);
    Layout {
        nav,
        body: middle.inset(1),
        status,
    }
}

/// Render the nav row. Collapsed, it shows the active screen's full
/// `title`; expanded, the short tab labels.
pub fn render_nav<W: Write>(
    surface: &mut Surface<W>,
    row: Rect,
    labels: &[&'static str],
    title: &'static str,
    active: usize,
    expanded: bool,
    palette: &Palette,
) -> io::Result<()> {
    if row.is_empty() {
        return Ok(());
    }
    surface.fill(row, palette.chrome())?;
    let glyph = if expanded { "✕" } else { "≡" };
    surface.print(row.x, row.y, row.width, glyph, palette.chrome())?;
    let mut x = row.x + 2;
    if expanded {
        let active_style = Style {
            fg: Some(palette.accent),
            bg: Some(palette.highlight),
            bold: true,
        };
        for (i, label) in labels.iter().enumerate() {
            let text = format!(" {label} ");
            let style = if i == active {
                active_style
            } else {
                palette.chrome()
            };
            if x >= row.right() {
                break;
            }
            surface.print(x, row.y, row.right() - x, &text, style)?;
            x += text.width() as u16;
        }
    } else {
        let style = Style {
            fg: Some(palette.accent),
            bg: Some(palette.surface),
            bold: true,
        };
        surface.print(x, row.y, row.right().saturating_sub(x), title, style)?;
    }
    Ok(())
}

/// Render the status row: toast or keybindings, theme glyph on the right.
pub fn render_status<W: Write>(
    surface: &mut Surface<W>,
    row: Rect,
    bindings: &[HelpEntry],
    theme: ThemeFlag,
    toast: Option<&str>,
    palette: &Palette,
) -> io::Result<()> {
    if row.is_empty() {
        return Ok(());
    }
    surface.fill(row, palette.chrome())?;
    let text = match toast {
        Some(message) => message.to_string(),
        None => status_hints(bindings),
    };
    // Leave room for the theme glyph and a space.
    let text_width = row.width.saturating_sub(3);
    surface.print(row.x, row.y, text_width, &text, palette.chrome())?;
    let glyph = theme.glyph();
    let gx = row.right().saturating_sub(2);
    surface.print(gx, row.y, 2, glyph, palette.chrome())?;
    Ok(())
}

fn status_hints(bindings: &[HelpEntry]) -> String {
    let mut parts: Vec<String> = bindings
        .iter()
        .map(|b| format!("{}:{}", b.key, b.action))
        .collect();
    parts.push("Tab:telas".to_string());
    parts.push("^T:tema".to_string());
    parts.push("^N:menu".to_string());
    parts.push("^C:sair".to_string());
    parts.join("  ")
}
