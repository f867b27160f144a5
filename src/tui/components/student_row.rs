//! One record rendered as a table row
//!
//! A row is a `[Move]` handle followed by three input cells. Rows only read
//! their record; edits leave the row as a [`Msg::FieldEdited`].

use super::cell_editor::{CellEditor, EditResult};
use crate::students::{validate, Field, Msg, Student};
use crate::tui::theme::Theme;
use crate::util::{truncate_to_width, width_before};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const MOVE_LABEL: &str = "[Move]";

/// Split a row into the move cell and the three field cells
pub fn columns(row: Rect) -> [Rect; 4] {
    Layout::horizontal([
        Constraint::Length(MOVE_LABEL.width() as u16),
        Constraint::Fill(3),
        Constraint::Fill(4),
        Constraint::Fill(3),
    ])
    .spacing(1)
    .areas(row)
}

/// Which field cell (if any) contains column `x`
pub fn field_at(row: Rect, x: u16) -> Option<Field> {
    let cells = columns(row);
    Field::ALL
        .into_iter()
        .find(|field| {
            let cell = cells[field.index() + 1];
            x >= cell.x && x < cell.right()
        })
}

/// Outcome of feeding an input event to the cell being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowInput {
    /// The value changed: send this to the table
    Edit(Msg),
    /// User left the cell
    Leave,
    None,
}

/// Render-time view of one record
pub struct StudentRow<'a> {
    pub student: &'a Student,
    /// Cell with keyboard focus, when this is the focused row
    pub focus: Option<Field>,
    pub editor: Option<&'a CellEditor>,
    pub editable: bool,
    /// Drawn under the pointer during a drag
    pub dragging: bool,
    /// The dragged row is currently over this one
    pub drop_target: bool,
}

impl<'a> StudentRow<'a> {
    pub fn new(student: &'a Student) -> Self {
        Self {
            student,
            focus: None,
            editor: None,
            editable: false,
            dragging: false,
            drop_target: false,
        }
    }

    /// Feed a key to the editor and turn a changed value into an edit
    pub fn on_change(editor: &mut CellEditor, key: KeyEvent) -> RowInput {
        match editor.handle_key(key) {
            EditResult::Changed => RowInput::Edit(Msg::FieldEdited {
                id: editor.id,
                field: editor.field,
                value: editor.text().to_string(),
            }),
            EditResult::Finished => RowInput::Leave,
            EditResult::CursorMoved | EditResult::Ignored => RowInput::None,
        }
    }

    fn row_style(&self, theme: &Theme) -> Style {
        if self.dragging {
            Style::default()
                .fg(theme.drag_fg)
                .bg(theme.drag_bg)
                .add_modifier(Modifier::BOLD)
        } else if self.focus.is_some() {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection_bg)
        } else if self.drop_target {
            Style::default()
                .fg(theme.drop_target)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.foreground)
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let base = self.row_style(theme);
        f.render_widget(Paragraph::new("").style(base), area);

        let cells = columns(area);

        let handle_style = if self.dragging {
            base
        } else {
            base.fg(theme.move_button)
        };
        f.render_widget(Paragraph::new(MOVE_LABEL).style(handle_style), cells[0]);

        for field in Field::ALL {
            let cell = cells[field.index() + 1];
            let line = match self.editor {
                Some(editor) if editor.field == field => {
                    editing_line(editor, cell.width as usize, base, theme)
                }
                _ => self.value_line(field, cell.width as usize, base, theme),
            };
            f.render_widget(Paragraph::new(line), cell);
        }
    }

    fn value_line(&self, field: Field, width: usize, base: Style, theme: &Theme) -> Line<'static> {
        let value = self.student.value(field);

        let mut style = base;
        if !self.dragging {
            if !self.editable {
                style = style.fg(theme.disabled);
            }
            if validate(field, value).is_some() {
                style = style.fg(theme.invalid);
            }
        }
        if self.focus == Some(field) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }

        if value.is_empty() {
            let placeholder = base
                .fg(theme.placeholder)
                .add_modifier(Modifier::ITALIC);
            let placeholder = if self.focus == Some(field) {
                placeholder.add_modifier(Modifier::UNDERLINED)
            } else {
                placeholder
            };
            Line::from(Span::styled(
                truncate_to_width(field.placeholder(), width),
                placeholder,
            ))
        } else {
            Line::from(Span::styled(truncate_to_width(value, width), style))
        }
    }
}

/// Text with a block cursor, scrolled so the cursor stays visible
fn editing_line(editor: &CellEditor, width: usize, base: Style, theme: &Theme) -> Line<'static> {
    let text = editor.text();
    let cursor = editor.cursor();
    let style = base.fg(theme.foreground);

    let before = &text[..cursor];
    let mut rest = text[cursor..].chars();
    let at = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = rest.collect();

    // Keep the cursor cell on screen by dropping leading columns
    let cursor_col = width_before(text, cursor);
    let visible_before = if cursor_col + at.width() > width {
        tail_to_width(before, width.saturating_sub(at.width()))
    } else {
        before
    };
    let used = visible_before.width() + at.width();
    let after = truncate_to_width(&after, width.saturating_sub(used));

    Line::from(vec![
        Span::styled(visible_before.to_string(), style),
        Span::styled(at, style.add_modifier(Modifier::REVERSED)),
        Span::styled(after, style),
    ])
}

/// Longest suffix of `s` that fits in `width` columns
fn tail_to_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::students::StudentId;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_row(row: &StudentRow<'_>, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| row.render(f, f.area(), &theme))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn columns_leave_room_for_the_handle() {
        let [handle, name, email, contact] = columns(Rect::new(0, 0, 61, 1));
        assert_eq!(handle.width, 6);
        assert!(name.x > handle.right());
        assert!(email.width >= name.width);
        assert!(contact.right() <= 61);
    }

    #[test]
    fn field_at_maps_columns_to_fields() {
        let row = Rect::new(0, 0, 61, 1);
        let [handle, name, email, contact] = columns(row);
        assert_eq!(field_at(row, handle.x), None);
        assert_eq!(field_at(row, name.x), Some(Field::Name));
        assert_eq!(field_at(row, email.x + 1), Some(Field::Email));
        assert_eq!(field_at(row, contact.right() - 1), Some(Field::Contact));
    }

    #[test]
    fn renders_handle_and_all_fields() {
        let student = Student::new(1, "John Doe", "john@example.com", "1234567890");
        let line = render_row(&StudentRow::new(&student), 70);
        assert!(line.starts_with("[Move]"));
        assert!(line.contains("John Doe"));
        assert!(line.contains("john@example.com"));
        assert!(line.contains("1234567890"));
    }

    #[test]
    fn empty_value_shows_placeholder() {
        let student = Student::new(1, "", "john@example.com", "");
        let line = render_row(&StudentRow::new(&student), 70);
        assert!(line.contains("Student Name"));
        assert!(line.contains("Contact"));
    }

    #[test]
    fn on_change_emits_edit_with_new_value() {
        let mut editor = CellEditor::new(StudentId(2), Field::Email, "jane@example.com");
        let result = StudentRow::on_change(
            &mut editor,
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
        );
        assert_eq!(
            result,
            RowInput::Edit(Msg::FieldEdited {
                id: StudentId(2),
                field: Field::Email,
                value: "jane@example.co".to_string(),
            })
        );

        let result =
            StudentRow::on_change(&mut editor, KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(result, RowInput::None);

        let result =
            StudentRow::on_change(&mut editor, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(result, RowInput::Leave);
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail_to_width("abcdef", 3), "def");
        assert_eq!(tail_to_width("日本語", 5), "本語");
        assert_eq!(tail_to_width("abc", 10), "abc");
    }
}
