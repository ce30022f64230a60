#![forbid(unsafe_code)]

//! To-do list screen.

use std::io::{self, Write};

use miniapps_core::event::{KeyCode, KeyEvent};
use miniapps_core::geometry::Rect;
use miniapps_core::style::Style;
use miniapps_core::surface::Surface;
use miniapps_widgets::input::Input;
use miniapps_widgets::todo::TodoList;

use super::{HelpEntry, Screen, render_input};
use crate::theme::Palette;

/// To-do screen state.
#[derive(Default)]
pub struct Todo {
    input: Input,
    list: TodoList,
    selected: usize,
}

impl Todo {
    fn clamp_selection(&mut self) {
        if self.list.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.list.len() {
            self.selected = self.list.len() - 1;
        }
    }

    #[cfg(test)]
    fn items(&self) -> &[String] {
        self.list.items()
    }
}

impl Screen for Todo {
    fn update(&mut self, key: &KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Enter => {
                // Only a successful add clears the field.
                if self.list.add(self.input.value()) {
                    self.input.clear();
                }
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < self.list.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Delete => {
                self.list.remove(self.selected);
                self.clamp_selection();
            }
            _ => {
                self.input.handle_key(key);
            }
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
        surface.print_row(area.row(0), "Lista de Tarefas", palette.accent_text())?;
        render_input(surface, area.row(2), "Nova tarefa:", &self.input, true, palette)?;

        if self.list.is_empty() {
            surface.print_row(area.row(4), "Nenhuma tarefa ainda.", palette.muted_text())?;
            return Ok(());
        }

        for (i, item) in self.list.items().iter().enumerate() {
            let row = area.row(4 + i as u16);
            if row.is_empty() {
                break;
            }
            let style = if i == self.selected {
                Style {
                    fg: Some(palette.text),
                    bg: Some(palette.highlight),
                    bold: false,
                }
            } else {
                palette.body()
            };
            surface.print_row(row, &format!("• {item}"), style)?;
        }
        Ok(())
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "Enter",
                action: "adicionar",
            },
            HelpEntry {
                key: "↑/↓",
                action: "selecionar",
            },
            HelpEntry {
                key: "Del",
                action: "remover",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Lista de Tarefas"
    }

    fn tab_label(&self) -> &'static str {
        "Tarefas"
    }

    fn wants_text_input(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    fn type_str(screen: &mut Todo, s: &str) {
        for ch in s.chars() {
            screen.update(&press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn add_clears_input() {
        let mut screen = Todo::default();
        type_str(&mut screen, "buy milk");
        screen.update(&press(KeyCode::Enter));
        assert_eq!(screen.items(), ["buy milk"]);
        assert!(screen.input.is_empty());
    }

    #[test]
    fn whitespace_submit_keeps_input_and_list() {
        let mut screen = Todo::default();
        type_str(&mut screen, "   ");
        screen.update(&press(KeyCode::Enter));
        assert!(screen.items().is_empty());
        // A rejected submit does not clear the field.
        assert_eq!(screen.input.value(), "   ");
    }

    #[test]
    fn add_then_remove_returns_to_empty() {
        let mut screen = Todo::default();
        type_str(&mut screen, "buy milk");
        screen.update(&press(KeyCode::Enter));
        screen.update(&press(KeyCode::Delete));
        assert!(screen.items().is_empty());
    }

    #[test]
    fn selection_follows_removals() {
        let mut screen = Todo::default();
        for item in ["a", "b", "c"] {
            type_str(&mut screen, item);
            screen.update(&press(KeyCode::Enter));
        }
        screen.update(&press(KeyCode::Down));
        screen.update(&press(KeyCode::Down));
        assert_eq!(screen.selected, 2);
        screen.update(&press(KeyCode::Delete));
        assert_eq!(screen.items(), ["a", "b"]);
        assert_eq!(screen.selected, 1);
    }

    #[test]
    fn delete_on_empty_list_is_a_noop() {
        let mut screen = Todo::default();
        screen.update(&press(KeyCode::Delete));
        assert!(screen.items().is_empty());
    }
}
