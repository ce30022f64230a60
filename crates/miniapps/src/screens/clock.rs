#![forbid(unsafe_code)]

//! Digital clock screen.
//!
//! The displayed time is a snapshot: it is captured at construction and
//! then refreshed once per second by [`ClockScreen::tick`] while running.
//! Pausing freezes the snapshot; resuming shows the stale time until the
//! next tick lands.

use std::io::{self, Write};

use miniapps_core::event::{KeyCode, KeyEvent};
use miniapps_core::geometry::Rect;
use miniapps_core::surface::Surface;
use miniapps_core::style::Style;
use miniapps_widgets::clock::{local_time_string, Clock};

use super::{HelpEntry, Screen};
use crate::theme::Palette;

/// Clock screen state.
#[derive(Debug)]
pub struct ClockScreen {
    clock: Clock,
    time: String,
}

impl Default for ClockScreen {
    fn default() -> Self {
        Self {
            clock: Clock::default(),
            time: local_time_string(),
        }
    }
}

impl ClockScreen {
    /// Whether the clock is currently advancing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    #[cfg(test)]
    fn set_time(&mut self, time: &str) {
        self.time = time.to_string();
    }

    #[cfg(test)]
    fn time(&self) -> &str {
        &self.time
    }
}

impl Screen for ClockScreen {
    fn update(&mut self, key: &KeyEvent) -> Option<String> {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.clock.toggle();
        }
        None
    }

    fn tick(&mut self) {
        if self.clock.is_running() {
            self.time = local_time_string();
        }
    }

    fn view<W: Write>(
        &self,
        surface: &mut Surface<W>,
        area: Rect,
        palette: &Palette,
    ) -> io::Result<()> {
        if area.is_empty() {
            return Ok(());
        }
        surface.print_row(area.row(0), "Relógio Digital", palette.accent_text())?;
        surface.print_row(area.row(2), &self.time, palette.body())?;
        let (label, bg) = if self.clock.is_running() {
            ("[ Pausar ]", palette.accent)
        } else {
            ("[ Iniciar ]", palette.success)
        };
        let button = Style {
            fg: Some(palette.bg),
            bg: Some(bg),
            bold: true,
        };
        surface.print_row(area.row(4), label, button)?;
        Ok(())
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![HelpEntry {
            key: "Space",
            action: if self.clock.is_running() {
                "pausar"
            } else {
                "iniciar"
            },
        }]
    }

    fn title(&self) -> &'static str {
        "Relógio Digital"
    }

    fn tab_label(&self) -> &'static str {
        "Relógio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn starts_running_with_a_time() {
        let screen = ClockScreen::default();
        assert!(screen.is_running());
        assert_eq!(screen.time().len(), 8); // HH:MM:SS
    }

    #[test]
    fn space_toggles_running() {
        let mut screen = ClockScreen::default();
        screen.update(&press(KeyCode::Char(' ')));
        assert!(!screen.is_running());
        screen.update(&press(KeyCode::Char(' ')));
        assert!(screen.is_running());
    }

    #[test]
    fn tick_refreshes_only_while_running() {
        let mut screen = ClockScreen::default();
        screen.update(&press(KeyCode::Enter));
        screen.set_time("00:00:00");
        screen.tick();
        assert_eq!(screen.time(), "00:00:00");
        screen.update(&press(KeyCode::Enter));
        // Resume keeps the stale snapshot until the next tick.
        assert_eq!(screen.time(), "00:00:00");
        screen.tick();
        assert_ne!(screen.time(), "00:00:00");
    }
}
