//! Single-line text input for editing one table cell
//!
//! Holds the text and a byte-offset cursor. The cursor always sits on a
//! char boundary.

use crate::students::{Field, StudentId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key did to the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResult {
    /// Text changed (the new text is in the editor)
    Changed,
    /// Only the cursor moved
    CursorMoved,
    /// User left the cell (Enter, Esc or Tab)
    Finished,
    Ignored,
}

/// In-progress edit of one field of one record
#[derive(Debug, Clone)]
pub struct CellEditor {
    pub id: StudentId,
    pub field: Field,
    text: String,
    cursor: usize,
}

impl CellEditor {
    /// Start editing with the cursor at the end of `text`
    pub fn new(id: StudentId, field: Field, text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            id,
            field,
            text,
            cursor,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditResult {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                EditResult::Finished
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                EditResult::Changed
            }
            KeyCode::Backspace => match self.prev_boundary() {
                Some(start) => {
                    self.text.replace_range(start..self.cursor, "");
                    self.cursor = start;
                    EditResult::Changed
                }
                None => EditResult::Ignored,
            },
            KeyCode::Delete => match self.next_boundary() {
                Some(end) => {
                    self.text.replace_range(self.cursor..end, "");
                    EditResult::Changed
                }
                None => EditResult::Ignored,
            },
            KeyCode::Left => self.move_to(self.prev_boundary()),
            KeyCode::Right => self.move_to(self.next_boundary()),
            KeyCode::Home => self.move_to(Some(0)),
            KeyCode::End => self.move_to(Some(self.text.len())),
            _ => EditResult::Ignored,
        }
    }

    fn move_to(&mut self, target: Option<usize>) -> EditResult {
        match target {
            Some(pos) if pos != self.cursor => {
                self.cursor = pos;
                EditResult::CursorMoved
            }
            _ => EditResult::Ignored,
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editor(text: &str) -> CellEditor {
        CellEditor::new(StudentId(1), Field::Name, text)
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut ed = editor("Jo");
        assert_eq!(ed.handle_key(key(KeyCode::Char('e'))), EditResult::Changed);
        assert_eq!(ed.text(), "Joe");

        ed.handle_key(key(KeyCode::Home));
        ed.handle_key(key(KeyCode::Char('>')));
        assert_eq!(ed.text(), ">Joe");
        assert_eq!(ed.cursor(), 1);
    }

    #[test]
    fn backspace_and_delete_respect_char_boundaries() {
        let mut ed = editor("Zoë");
        assert_eq!(ed.handle_key(key(KeyCode::Backspace)), EditResult::Changed);
        assert_eq!(ed.text(), "Zo");

        ed.handle_key(key(KeyCode::Home));
        assert_eq!(ed.handle_key(key(KeyCode::Backspace)), EditResult::Ignored);
        assert_eq!(ed.handle_key(key(KeyCode::Delete)), EditResult::Changed);
        assert_eq!(ed.text(), "o");

        ed.handle_key(key(KeyCode::End));
        assert_eq!(ed.handle_key(key(KeyCode::Delete)), EditResult::Ignored);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut ed = editor("日本");
        assert_eq!(ed.handle_key(key(KeyCode::Left)), EditResult::CursorMoved);
        assert_eq!(ed.cursor(), 3);
        ed.handle_key(key(KeyCode::Left));
        assert_eq!(ed.handle_key(key(KeyCode::Left)), EditResult::Ignored);
        assert_eq!(ed.cursor(), 0);
        ed.handle_key(key(KeyCode::Right));
        assert_eq!(ed.cursor(), 3);
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut ed = editor("a");
        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ed.handle_key(chord), EditResult::Ignored);
        assert_eq!(ed.text(), "a");

        // Shifted letters are still text
        let shifted = KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT);
        assert_eq!(ed.handle_key(shifted), EditResult::Changed);
        assert_eq!(ed.text(), "aB");
    }

    #[test]
    fn leaving_keys_finish() {
        let mut ed = editor("x");
        assert_eq!(ed.handle_key(key(KeyCode::Enter)), EditResult::Finished);
        assert_eq!(ed.handle_key(key(KeyCode::Esc)), EditResult::Finished);
        assert_eq!(ed.handle_key(key(KeyCode::Tab)), EditResult::Finished);
        assert_eq!(ed.text(), "x");
    }
}
