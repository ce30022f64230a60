#![forbid(unsafe_code)]

//! Password generator screen.
//!
//! Generates an initial password as soon as the screen exists (the
//! page-load behavior) and copies the current one to the clipboard on
//! request. Clipboard failures become a toast and a log line, never an
//! error path.

use std::io::{self, Write};

use miniapps_core::event::{KeyCode, KeyEvent};
use miniapps_core::geometry::Rect;
use miniapps_core::surface::Surface;
use miniapps_runtime::Clipboard;
use miniapps_widgets::password::{PasswordConfig, PasswordGenerator};

use super::{HelpEntry, Screen};
use crate::theme::Palette;

/// Bounds for the interactive length adjustment.
const MIN_LENGTH: usize = 1;
const MAX_LENGTH: usize = 64;

/// Password screen state.
pub struct Password {
    config: PasswordConfig,
    generator: PasswordGenerator,
    clipboard: Clipboard,
    /// Current password, or the pool error message in its place.
    display: String,
}

impl Default for Password {
    fn default() -> Self {
        Self::with_generator(PasswordGenerator::new())
    }
}

impl Password {
    /// Build with an explicit generator (tests pass a seeded one).
    #[must_use]
    pub fn with_generator(generator: PasswordGenerator) -> Self {
        let mut screen = Self {
            config: PasswordConfig::default(),
            generator,
            clipboard: Clipboard::detect(),
            display: String::new(),
        };
        screen.regenerate();
        screen
    }

    fn regenerate(&mut self) {
        self.display = match self.generator.generate(&self.config) {
            Ok(password) => password,
            Err(e) => e.to_string(),
        };
    }

    fn copy(&self) -> String {
        match self.clipboard.copy(&self.display) {
            Ok(()) => "Senha copiada para a área de transferência!".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "falha ao copiar");
                format!("Falha ao copiar: {e}")
            }
        }
    }

    fn checkbox(enabled: bool) -> &'static str {
        if enabled { "[x]" } else { "[ ]" }
    }

    #[cfg(test)]
    fn display(&self) -> &str {
        &self.display
    }
}

impl Screen for Password {
    fn update(&mut self, key: &KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('g') => self.regenerate(),
            KeyCode::Char('c') => return Some(self.copy()),
            KeyCode::Up | KeyCode::Char('+') => {
                self.config.length = (self.config.length + 1).min(MAX_LENGTH);
            }
            KeyCode::Down | KeyCode::Char('-') => {
                self.config.length = self.config.length.saturating_sub(1).max(MIN_LENGTH);
            }
            KeyCode::Char('1') => self.config.uppercase = !self.config.uppercase,
            KeyCode::Char('2') => self.config.numbers = !self.config.numbers,
            KeyCode::Char('3') => self.config.symbols = !self.config.symbols,
            _ => {}
        }
        None
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
        surface.print_row(area.row(0), "Gerador de Senhas", palette.accent_text())?;
        surface.print_row(
            area.row(2),
            &format!("Comprimento: {:2}  (↑/↓)", self.config.length),
            palette.body(),
        )?;
        surface.print_row(
            area.row(3),
            &format!("{} 1 Maiúsculas", Self::checkbox(self.config.uppercase)),
            palette.body(),
        )?;
        surface.print_row(
            area.row(4),
            &format!("{} 2 Números", Self::checkbox(self.config.numbers)),
            palette.body(),
        )?;
        surface.print_row(
            area.row(5),
            &format!("{} 3 Símbolos", Self::checkbox(self.config.symbols)),
            palette.body(),
        )?;
        surface.print_row(area.row(7), &self.display, palette.accent_text())?;
        Ok(())
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "g",
                action: "gerar",
            },
            HelpEntry {
                key: "c",
                action: "copiar",
            },
            HelpEntry {
                key: "1/2/3",
                action: "classes",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Gerador de Senhas"
    }

    fn tab_label(&self) -> &'static str {
        "Senhas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    fn seeded() -> Password {
        Password::with_generator(PasswordGenerator::with_seed(99))
    }

    #[test]
    fn initial_password_exists() {
        let screen = seeded();
        assert_eq!(screen.display().chars().count(), 12);
    }

    #[test]
    fn generate_respects_length_adjustment() {
        let mut screen = seeded();
        for _ in 0..4 {
            screen.update(&press(KeyCode::Up));
        }
        screen.update(&press(KeyCode::Char('g')));
        assert_eq!(screen.display().chars().count(), 16);
    }

    #[test]
    fn length_clamps_at_bounds() {
        let mut screen = seeded();
        for _ in 0..100 {
            screen.update(&press(KeyCode::Down));
        }
        assert_eq!(screen.config.length, MIN_LENGTH);
        for _ in 0..200 {
            screen.update(&press(KeyCode::Up));
        }
        assert_eq!(screen.config.length, MAX_LENGTH);
    }

    #[test]
    fn class_toggles_shape_the_pool() {
        let mut screen = seeded();
        screen.update(&press(KeyCode::Char('1')));
        screen.update(&press(KeyCode::Char('2')));
        screen.update(&press(KeyCode::Char('3')));
        screen.update(&press(KeyCode::Enter));
        assert!(screen.display().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn digit_keys_do_not_leak_into_navigation() {
        let mut screen = seeded();
        let before = screen.config;
        screen.update(&press(KeyCode::Char('4')));
        assert_eq!(screen.config, before);
    }
}
