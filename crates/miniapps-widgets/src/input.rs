#![forbid(unsafe_code)]

//! Single-line text input state.
//!
//! Grapheme-cluster aware for correct Unicode handling: the cursor is a
//! grapheme index, never a byte or char offset. Rendering (cursor glyph,
//! focus styling) is left to the screens.

use miniapps_core::event::{KeyCode, KeyEvent, KeyEventKind};
use unicode_segmentation::UnicodeSegmentation;

/// A single-line text input.
#[derive(Debug, Clone, Default)]
pub struct Input {
    /// Text value.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
}

impl Input {
    /// An empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An input pre-filled with `value`, cursor at the end.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.graphemes(true).count();
        Self { value, cursor }
    }

    /// The current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in graphemes.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of graphemes in the value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index` (value length if past end).
    fn byte_offset(&self, index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        self.value.insert(offset, ch);
        self.cursor += 1;
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete the grapheme under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    /// Move the cursor one grapheme left.
    pub const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one grapheme right.
    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Jump to the start.
    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Clear the value and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns `true` when the key was consumed
    /// (value or cursor may have changed).
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) if !key.ctrl() => {
                self.insert(ch);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Home => {
                self.move_home();
                true
            }
            KeyCode::End => {
                self.move_end();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miniapps_core::event::Modifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = Input::new();
        for ch in "4.5".chars() {
            input.insert(ch);
        }
        assert_eq!(input.value(), "4.5");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = Input::with_value("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_a_noop() {
        let mut input = Input::with_value("x");
        input.move_home();
        input.backspace();
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn delete_under_cursor() {
        let mut input = Input::with_value("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn grapheme_aware_backspace() {
        // Family emoji is one grapheme built from several scalars.
        let mut input = Input::with_value("a👨‍👩‍👧b");
        assert_eq!(input.len(), 3);
        input.move_end();
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn handle_key_routes_edits() {
        let mut input = Input::new();
        assert!(input.handle_key(&press(KeyCode::Char('o'))));
        assert!(input.handle_key(&press(KeyCode::Char('i'))));
        assert!(input.handle_key(&press(KeyCode::Backspace)));
        assert_eq!(input.value(), "o");
        assert!(!input.handle_key(&press(KeyCode::Enter)));
    }

    #[test]
    fn ctrl_chords_are_not_text() {
        let mut input = Input::new();
        let key = press(KeyCode::Char('t')).with_modifiers(Modifiers::CTRL);
        assert!(!input.handle_key(&key));
        assert!(input.is_empty());
    }

    #[test]
    fn clear_resets_cursor() {
        let mut input = Input::with_value("todo");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
