#![forbid(unsafe_code)]

//! Quiz screen.
//!
//! Presents the fixed question set one question at a time. After an
//! answer the options stay visible with the correct one highlighted in
//! green and a wrong pick in red, until the user advances.

use std::io::{self, Write};

use miniapps_core::event::{KeyCode, KeyEvent};
use miniapps_core::geometry::Rect;
use miniapps_core::style::Style;
use miniapps_core::surface::Surface;
use miniapps_widgets::quiz::{Quiz, QuizPhase};

use super::{HelpEntry, Screen};
use crate::theme::Palette;

/// Quiz screen state.
#[derive(Debug, Default)]
pub struct QuizScreen {
    quiz: Quiz,
}

impl QuizScreen {
    fn option_key(code: KeyCode) -> Option<usize> {
        match code {
            KeyCode::Char('1') => Some(0),
            KeyCode::Char('2') => Some(1),
            KeyCode::Char('3') => Some(2),
            KeyCode::Char('4') => Some(3),
            _ => None,
        }
    }

    fn option_style(
        palette: &Palette,
        answered: Option<usize>,
        correct: usize,
        index: usize,
    ) -> Style {
        let Some(selected) = answered else {
            return palette.body();
        };
        if index == correct {
            return Style {
                fg: Some(palette.text),
                bg: Some(palette.success),
                bold: true,
            };
        }
        if index == selected {
            return Style {
                fg: Some(palette.text),
                bg: Some(palette.error),
                bold: false,
            };
        }
        palette.muted_text()
    }

    fn render_question<W: Write>(
        &self,
        surface: &mut Surface<W>,
        area: Rect,
        palette: &Palette,
        question: usize,
        answered: Option<usize>,
    ) -> io::Result<()> {
        let Some(q) = self.quiz.question(question) else {
            return Ok(());
        };
        surface.print_row(
            area.row(2),
            &format!("Pergunta {}: {}", question + 1, q.prompt),
            palette.body(),
        )?;
        let correct = q.correct_index();
        for (i, option) in q.options.iter().enumerate() {
            let style = Self::option_style(palette, answered, correct, i);
            surface.print_row(area.row(4 + i as u16), &format!("{}) {option}", i + 1), style)?;
        }
        if answered.is_some() {
            let label = if question + 1 < self.quiz.total() {
                "Enter: Próxima Pergunta"
            } else {
                "Enter: Ver Resultado Final"
            };
            surface.print_row(area.row(9), label, palette.accent_text())?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn quiz(&self) -> &Quiz {
        &self.quiz
    }
}

impl Screen for QuizScreen {
    fn update(&mut self, key: &KeyEvent) -> Option<String> {
        match self.quiz.phase() {
            QuizPhase::Idle | QuizPhase::Finished => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('s')) {
                    self.quiz.start();
                }
            }
            QuizPhase::InProgress { .. } => {
                if let Some(option) = Self::option_key(key.code) {
                    self.quiz.answer(option);
                }
            }
            QuizPhase::Answered { .. } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('s')) {
                    self.quiz.advance();
                }
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
        surface.print_row(area.row(0), "Quiz Rápido", palette.accent_text())?;
        match self.quiz.phase() {
            QuizPhase::Idle => {
                surface.print_row(
                    area.row(2),
                    "Pressione Enter para começar o quiz.",
                    palette.body(),
                )?;
            }
            QuizPhase::InProgress { question } => {
                self.render_question(surface, area, palette, question, None)?;
            }
            QuizPhase::Answered { question, selected } => {
                self.render_question(surface, area, palette, question, Some(selected))?;
            }
            QuizPhase::Finished => {
                surface.print_row(area.row(2), "Parabéns! Quiz Finalizado.", palette.body())?;
                surface.print_row(
                    area.row(4),
                    "Enter: Recomeçar Quiz",
                    palette.accent_text(),
                )?;
            }
        }
        surface.print_row(
            area.row(11),
            &format!("Pontuação: {}", self.quiz.score_display()),
            palette.muted_text(),
        )?;
        Ok(())
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        match self.quiz.phase() {
            QuizPhase::InProgress { .. } => vec![HelpEntry {
                key: "1-4",
                action: "responder",
            }],
            QuizPhase::Answered { .. } => vec![HelpEntry {
                key: "Enter",
                action: "avançar",
            }],
            QuizPhase::Idle | QuizPhase::Finished => vec![HelpEntry {
                key: "Enter",
                action: "começar",
            }],
        }
    }

    fn title(&self) -> &'static str {
        "Quiz Rápido"
    }

    fn tab_label(&self) -> &'static str {
        "Quiz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn enter_starts_from_idle() {
        let mut screen = QuizScreen::default();
        screen.update(&press(KeyCode::Enter));
        assert_eq!(screen.quiz().phase(), QuizPhase::InProgress { question: 0 });
    }

    #[test]
    fn digits_answer_and_enter_advances() {
        let mut screen = QuizScreen::default();
        screen.update(&press(KeyCode::Enter));
        screen.update(&press(KeyCode::Char('3')));
        assert_eq!(
            screen.quiz().phase(),
            QuizPhase::Answered {
                question: 0,
                selected: 2
            }
        );
        screen.update(&press(KeyCode::Enter));
        assert_eq!(screen.quiz().phase(), QuizPhase::InProgress { question: 1 });
    }

    #[test]
    fn digits_ignored_while_feedback_is_showing() {
        let mut screen = QuizScreen::default();
        screen.update(&press(KeyCode::Enter));
        screen.update(&press(KeyCode::Char('1')));
        let before = screen.quiz().phase();
        screen.update(&press(KeyCode::Char('2')));
        assert_eq!(screen.quiz().phase(), before);
    }

    #[test]
    fn finishing_then_enter_restarts() {
        let mut screen = QuizScreen::default();
        screen.update(&press(KeyCode::Enter));
        for _ in 0..3 {
            screen.update(&press(KeyCode::Char('1')));
            screen.update(&press(KeyCode::Enter));
        }
        assert_eq!(screen.quiz().phase(), QuizPhase::Finished);
        screen.update(&press(KeyCode::Enter));
        assert_eq!(screen.quiz().phase(), QuizPhase::InProgress { question: 0 });
    }
}
