#![forbid(unsafe_code)]

//! Word counter screen: metrics recomputed on every edit.

use std::io::{self, Write};

use miniapps_core::event::KeyEvent;
use miniapps_core::geometry::Rect;
use miniapps_core::surface::Surface;
use miniapps_widgets::input::Input;
use miniapps_widgets::metrics::{TextMetrics, measure};

use super::{HelpEntry, Screen, render_input};
use crate::theme::Palette;

/// Word counter screen state.
#[derive(Default)]
pub struct WordCount {
    input: Input,
    metrics: TextMetrics,
}

impl Screen for WordCount {
    fn update(&mut self, key: &KeyEvent) -> Option<String> {
        if self.input.handle_key(key) {
            self.metrics = measure(self.input.value());
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
        surface.print_row(area.row(0), "Contador de Palavras", palette.accent_text())?;
        render_input(surface, area.row(2), "Texto:", &self.input, true, palette)?;
        surface.print_row(
            area.row(4),
            &format!("Palavras: {}", self.metrics.words),
            palette.body(),
        )?;
        surface.print_row(
            area.row(5),
            &format!("Caracteres: {}", self.metrics.chars),
            palette.body(),
        )?;
        Ok(())
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![HelpEntry {
            key: "digite",
            action: "contagem ao vivo",
        }]
    }

    fn title(&self) -> &'static str {
        "Contador de Palavras"
    }

    fn tab_label(&self) -> &'static str {
        "Palavras"
    }

    fn wants_text_input(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miniapps_core::event::KeyCode;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn empty_counts_zero() {
        let screen = WordCount::default();
        assert_eq!(screen.metrics, TextMetrics { words: 0, chars: 0 });
    }

    #[test]
    fn counts_update_on_every_keystroke() {
        let mut screen = WordCount::default();
        for ch in "a  b   c".chars() {
            screen.update(&press(KeyCode::Char(ch)));
        }
        assert_eq!(screen.metrics, TextMetrics { words: 3, chars: 8 });
        screen.update(&press(KeyCode::Backspace));
        assert_eq!(screen.metrics, TextMetrics { words: 2, chars: 7 });
    }

    #[test]
    fn non_edit_keys_do_not_recompute() {
        let mut screen = WordCount::default();
        screen.update(&press(KeyCode::Enter));
        assert_eq!(screen.metrics, TextMetrics { words: 0, chars: 0 });
    }
}
