#![forbid(unsafe_code)]

//! Calculator screen: two numeric fields, an operator selector, a result.

use std::io::{self, Write};

use miniapps_core::event::{KeyCode, KeyEvent};
use miniapps_core::geometry::Rect;
use miniapps_core::surface::Surface;
use miniapps_widgets::calculator::{Operator, evaluate};
use miniapps_widgets::input::Input;

use super::{HelpEntry, Screen, render_input};
use crate::theme::Palette;

/// Which part of the form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    First,
    Second,
    Operator,
}

impl Focus {
    const fn next(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::Operator,
            Self::Operator => Self::First,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::First => Self::Operator,
            Self::Second => Self::First,
            Self::Operator => Self::Second,
        }
    }
}

/// Calculator screen state.
pub struct Calculator {
    first: Input,
    second: Input,
    operator: usize,
    focus: Focus,
    result: Option<String>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            first: Input::new(),
            second: Input::new(),
            operator: 0,
            focus: Focus::First,
            result: None,
        }
    }
}

impl Calculator {
    /// Currently selected operator.
    fn operator(&self) -> Operator {
        Operator::ALL[self.operator % Operator::ALL.len()]
    }

    fn evaluate_now(&mut self) {
        let outcome = match evaluate(
            self.first.value(),
            self.second.value(),
            self.operator().symbol(),
        ) {
            Ok(value) => value,
            Err(e) => e.to_string(),
        };
        // The result line always reads "Resultado: …", errors included.
        self.result = Some(format!("Resultado: {outcome}"));
    }

    #[cfg(test)]
    fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

impl Screen for Calculator {
    fn update(&mut self, key: &KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Enter => {
                self.evaluate_now();
                return None;
            }
            KeyCode::Down => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::Up => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::First => {
                self.first.handle_key(key);
            }
            Focus::Second => {
                self.second.handle_key(key);
            }
            Focus::Operator => match key.code {
                KeyCode::Left => {
                    self.operator = (self.operator + Operator::ALL.len() - 1) % Operator::ALL.len();
                }
                KeyCode::Right => {
                    self.operator = (self.operator + 1) % Operator::ALL.len();
                }
                KeyCode::Char(ch) => {
                    if let Some(pos) = Operator::ALL.iter().position(|op| op.symbol() == ch) {
                        self.operator = pos;
                    }
                }
                _ => {}
            },
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
        surface.print_row(area.row(0), "Calculadora", palette.accent_text())?;
        render_input(
            surface,
            area.row(2),
            "Número 1:",
            &self.first,
            self.focus == Focus::First,
            palette,
        )?;
        render_input(
            surface,
            area.row(3),
            "Número 2:",
            &self.second,
            self.focus == Focus::Second,
            palette,
        )?;

        let op_style = if self.focus == Focus::Operator {
            palette.accent_text()
        } else {
            palette.body()
        };
        let op_line = format!("Operador: [ {} ]", self.operator().symbol());
        surface.print_row(area.row(4), &op_line, op_style)?;

        if let Some(result) = &self.result {
            surface.print_row(area.row(6), result, palette.body())?;
        }
        Ok(())
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "↑/↓",
                action: "campo",
            },
            HelpEntry {
                key: "←/→",
                action: "operador",
            },
            HelpEntry {
                key: "Enter",
                action: "calcular",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Calculadora"
    }

    fn tab_label(&self) -> &'static str {
        "Calc"
    }

    fn wants_text_input(&self) -> bool {
        self.focus != Focus::Operator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    fn type_str(screen: &mut Calculator, s: &str) {
        for ch in s.chars() {
            screen.update(&press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn addition_formats_two_decimals() {
        let mut screen = Calculator::default();
        type_str(&mut screen, "4");
        screen.update(&press(KeyCode::Down));
        type_str(&mut screen, "2");
        screen.update(&press(KeyCode::Enter));
        assert_eq!(screen.result(), Some("Resultado: 6.00"));
    }

    #[test]
    fn division_by_zero_message() {
        let mut screen = Calculator::default();
        type_str(&mut screen, "4");
        screen.update(&press(KeyCode::Down));
        type_str(&mut screen, "0");
        // Cycle to the division operator.
        screen.update(&press(KeyCode::Down));
        screen.update(&press(KeyCode::Char('/')));
        screen.update(&press(KeyCode::Enter));
        assert_eq!(screen.result(), Some("Resultado: Divisão por zero!"));
    }

    #[test]
    fn invalid_input_message() {
        let mut screen = Calculator::default();
        type_str(&mut screen, "x");
        screen.update(&press(KeyCode::Down));
        type_str(&mut screen, "2");
        screen.update(&press(KeyCode::Enter));
        assert_eq!(
            screen.result(),
            Some("Resultado: Erro: Insira números válidos.")
        );
    }

    #[test]
    fn operator_cycles_with_arrows() {
        let mut screen = Calculator::default();
        screen.update(&press(KeyCode::Up)); // focus wraps to operator
        assert!(!screen.wants_text_input());
        screen.update(&press(KeyCode::Right));
        assert_eq!(screen.operator().symbol(), '-');
        screen.update(&press(KeyCode::Left));
        screen.update(&press(KeyCode::Left));
        assert_eq!(screen.operator().symbol(), '/');
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut screen = Calculator::default();
        assert_eq!(screen.focus, Focus::First);
        screen.update(&press(KeyCode::Down));
        assert_eq!(screen.focus, Focus::Second);
        screen.update(&press(KeyCode::Down));
        assert_eq!(screen.focus, Focus::Operator);
        screen.update(&press(KeyCode::Down));
        assert_eq!(screen.focus, Focus::First);
    }
}
