//! Student table panel: the table container
//!
//! Owns the [`StudentTable`] and the drag-and-drop context that reorders
//! it. Every mutation funnels through [`TablePanel::dispatch`]:
//!
//! ```text
//!   key/mouse ──► cell editor ──► StudentRow::on_change ──► Msg::FieldEdited ─┐
//!   key/mouse ──► sensors ──► DndContext ──► DragEvent::End ──► Msg::Reordered ┤
//!                                                                              ▼
//!                                                           StudentTable::update
//! ```

use super::cell_editor::CellEditor;
use super::student_row::{self, RowInput, StudentRow};
use crate::config::Config;
use crate::dnd::{
    DndContext, DragEvent, Droppable, KeyboardSensor, PointerSensor, SensorSignal, Transform,
};
use crate::students::{
    validate, Change, Field, Hint, Msg, Student, StudentId, StudentTable, TableError,
};
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use tracing::{debug, info, warn};

pub const HEADING: &str = "Student Data";

/// Screen regions of the table, computed the same way for measuring and drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TableLayout {
    heading: Rect,
    divider: Rect,
    table: Rect,
    header: Rect,
    body: Rect,
}

fn layout(area: Rect) -> TableLayout {
    let [heading, divider, table] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(area);
    let inner = Block::bordered().inner(table);
    let [header, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    TableLayout {
        heading,
        divider,
        table,
        header,
        body,
    }
}

/// One-line rects for the rows that fit in `body`
fn row_rects(body: Rect, count: usize) -> Vec<Rect> {
    (0..count)
        .map_while(|i| {
            let y = body.y.checked_add(u16::try_from(i).ok()?)?;
            (y < body.bottom()).then(|| Rect::new(body.x, y, body.width, 1))
        })
        .collect()
}

/// Where a dragged row is drawn: its resting rect moved by `t`, kept inside `bounds`
fn translate(rect: Rect, t: Transform, bounds: Rect) -> Rect {
    if bounds.is_empty() {
        return rect;
    }
    let min_y = i32::from(bounds.y);
    let max_y = i32::from(bounds.bottom().saturating_sub(rect.height)).max(min_y);
    let y = (i32::from(rect.y) + t.y).clamp(min_y, max_y);

    let min_x = i32::from(bounds.x);
    let max_x = i32::from(bounds.right().saturating_sub(1)).max(min_x);
    let x = (i32::from(rect.x) + t.x).clamp(min_x, max_x);

    // Both values were clamped into u16 bounds
    let (x, y) = (x as u16, y as u16);
    let width = rect.width.min(bounds.right().saturating_sub(x));
    Rect::new(x, y, width, rect.height)
}

/// The table container
pub struct TablePanel {
    table: StudentTable,
    dnd: DndContext<StudentId>,
    pointer: PointerSensor<StudentId>,
    keyboard: KeyboardSensor,
    focus_row: usize,
    focus_field: Field,
    editor: Option<CellEditor>,
    editable: bool,
    notices: Vec<String>,
}

impl TablePanel {
    pub fn new(config: &Config) -> Self {
        Self::with_table(StudentTable::seeded(), config)
    }

    pub fn with_table(table: StudentTable, config: &Config) -> Self {
        Self {
            table,
            dnd: DndContext::new(),
            pointer: PointerSensor::new(config.drag.activation_distance),
            keyboard: KeyboardSensor::new(config.drag.keyboard_step),
            focus_row: 0,
            focus_field: Field::Name,
            editor: None,
            editable: config.table.editable,
            notices: Vec::new(),
        }
    }

    pub fn table(&self) -> &StudentTable {
        &self.table
    }

    #[cfg(test)]
    pub fn dnd(&self) -> &DndContext<StudentId> {
        &self.dnd
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dnd.is_dragging()
    }

    pub fn editable(&self) -> bool {
        self.editable
    }

    #[cfg(test)]
    pub fn focus(&self) -> (usize, Field) {
        (self.focus_row, self.focus_field)
    }

    pub fn focused_student(&self) -> Option<&Student> {
        self.table.students().get(self.focus_row)
    }

    /// Validation hint for the focused cell, if its value breaks a constraint
    pub fn focused_hint(&self) -> Option<Hint> {
        let student = self.focused_student()?;
        validate(self.focus_field, student.value(self.focus_field))
    }

    /// Messages for the user since the last call
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Layout pass: record row positions for hit testing and collision
    pub fn measure(&mut self, area: Rect) {
        let regions = layout(area);
        let droppables = self
            .table
            .ids()
            .into_iter()
            .zip(row_rects(regions.body, self.table.len()))
            .map(|(id, rect)| Droppable::new(id, rect))
            .collect();
        self.dnd.set_droppables(droppables);
    }

    /// Apply a message to the table, reporting the outcome
    pub fn dispatch(&mut self, msg: Msg) -> Option<Change> {
        match self.table.update(msg) {
            Ok(change) => {
                if let Change::Moved { id, from, to } = change {
                    info!(%id, from, to, "student moved");
                    if let Some(student) = self.table.get(id) {
                        self.notices
                            .push(format!("Moved {} to row {}", student.name, to + 1));
                    }
                    self.focus_row = to;
                }
                Some(change)
            }
            Err(e) => {
                let TableError::UnknownStudent(id) = e;
                warn!(%id, "table update rejected: {}", e);
                self.notices.push(format!("Ignored: {}", e));
                None
            }
        }
    }

    fn apply_signal(&mut self, signal: SensorSignal<StudentId>) {
        for event in self.dnd.apply(signal) {
            self.handle_drag_event(event);
        }
    }

    fn handle_drag_event(&mut self, event: DragEvent<StudentId>) {
        match event {
            DragEvent::Start { active } => {
                debug!(%active, "drag started");
                self.editor = None;
                if let Some(row) = self.table.position(active) {
                    self.focus_row = row;
                }
            }
            DragEvent::Over { active, over } => {
                debug!(%active, over = ?over, "drag over");
            }
            DragEvent::End {
                active,
                over: Some(over),
            } => {
                self.dispatch(Msg::Reordered { active, over });
            }
            DragEvent::End { active, over: None } => {
                debug!(%active, "dropped outside the table");
            }
            DragEvent::Cancel { active } => {
                debug!(%active, "drag cancelled");
                self.notices.push("Move cancelled".to_string());
            }
        }
    }

    fn set_focus_row(&mut self, row: usize) {
        if !self.table.is_empty() {
            self.focus_row = row.min(self.table.len() - 1);
        }
    }

    fn begin_edit(&mut self) {
        if !self.editable {
            self.notices
                .push("Fields are read only (set table.editable = true)".to_string());
            return;
        }
        let field = self.focus_field;
        if let Some(editor) = self
            .focused_student()
            .map(|s| CellEditor::new(s.id, field, s.value(field)))
        {
            self.editor = Some(editor);
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Handled {
        let Some(editor) = self.editor.as_mut() else {
            return Handled::No;
        };
        let leaving_with_tab = matches!(key.code, KeyCode::Tab | KeyCode::BackTab);
        match StudentRow::on_change(editor, key) {
            RowInput::Edit(msg) => {
                self.dispatch(msg);
            }
            RowInput::Leave => {
                self.editor = None;
                if leaving_with_tab {
                    self.focus_field = if key.code == KeyCode::Tab {
                        self.focus_field.next()
                    } else {
                        self.focus_field.prev()
                    };
                }
            }
            RowInput::None => {}
        }
        Handled::Yes
    }

    /// Route a mouse event: clicks focus cells, held drags reorder rows
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.keyboard.is_active() {
            return;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.editor = None;
                if let Some(id) = self.dnd.hit(event.column, event.row) {
                    if let Some(row) = self.table.position(id) {
                        self.focus_row = row;
                    }
                    if let Some(droppable) = self.dnd.droppables().iter().find(|d| d.id == id) {
                        if let Some(field) = student_row::field_at(droppable.rect, event.column) {
                            self.focus_field = field;
                        }
                    }
                }
            }
            MouseEventKind::ScrollUp if !self.is_dragging() => {
                self.set_focus_row(self.focus_row.saturating_sub(1));
                return;
            }
            MouseEventKind::ScrollDown if !self.is_dragging() => {
                self.set_focus_row(self.focus_row + 1);
                return;
            }
            _ => {}
        }

        let dnd = &self.dnd;
        let signals = self.pointer.handle(&event, |x, y| dnd.hit(x, y));
        for signal in signals {
            self.apply_signal(signal);
        }
    }

    fn render_rows(&self, f: &mut Frame, body: Rect, theme: &Theme) {
        let active = self.dnd.active();
        let over = self.dnd.over();
        let mut floating = None;

        for (i, (student, rect)) in self
            .table
            .students()
            .iter()
            .zip(row_rects(body, self.table.len()))
            .enumerate()
        {
            let mut row = StudentRow::new(student);
            row.editable = self.editable;

            if let Some(transform) = self.dnd.transform(student.id) {
                // Resting slot stays visible as a gap
                let gap = "┄".repeat(usize::from(rect.width));
                f.render_widget(
                    Paragraph::new(gap).style(Style::default().fg(theme.divider)),
                    rect,
                );
                row.dragging = true;
                floating = Some((row, translate(rect, transform, body)));
                continue;
            }

            if active.is_none() && i == self.focus_row {
                row.focus = Some(self.focus_field);
                row.editor = self.editor.as_ref().filter(|e| e.id == student.id);
            }
            row.drop_target = active.is_some() && over == Some(student.id);
            row.render(f, rect, theme);
        }

        // Dragged row is drawn last so it sits on top
        if let Some((row, rect)) = floating {
            f.render_widget(Clear, rect);
            row.render(f, rect, theme);
        }
    }
}

impl Component for TablePanel {
    fn id(&self) -> ComponentId {
        ComponentId::Table
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let regions = layout(area);

        f.render_widget(
            Paragraph::new(HEADING).style(
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            regions.heading,
        );
        f.render_widget(
            Paragraph::new("─".repeat(usize::from(regions.divider.width)))
                .style(Style::default().fg(theme.divider)),
            regions.divider,
        );

        let border_color = if ctx.is_focused(self.id()) {
            theme.border_focused
        } else {
            theme.border
        };
        f.render_widget(
            Block::bordered()
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color)),
            regions.table,
        );

        let header_style = Style::default()
            .fg(theme.header)
            .add_modifier(Modifier::BOLD);
        let cells = student_row::columns(regions.header);
        let labels = std::iter::once("Move").chain(Field::ALL.iter().map(|f| f.label()));
        for (cell, label) in cells.into_iter().zip(labels) {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(label, header_style))),
                cell,
            );
        }

        self.render_rows(f, regions.body, theme);
    }
}

impl Interactive for TablePanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if self.editor.is_some() {
            return self.handle_edit_key(key);
        }

        if self.keyboard.is_active() {
            let travel = self.dnd.travel();
            if let Some(signal) = self.keyboard.handle::<StudentId>(&key, None, travel) {
                self.apply_signal(signal);
            }
            return Handled::Yes;
        }

        if self.pointer.is_active() {
            // Mouse drag in progress: only Esc means something
            if key.code == KeyCode::Esc {
                self.pointer.reset();
                self.apply_signal(SensorSignal::Cancel);
            }
            return Handled::Yes;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.set_focus_row(self.focus_row.saturating_sub(1));
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.set_focus_row(self.focus_row + 1);
                Handled::Yes
            }
            KeyCode::Home => {
                self.set_focus_row(0);
                Handled::Yes
            }
            KeyCode::End => {
                self.set_focus_row(usize::MAX);
                Handled::Yes
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.focus_field = self.focus_field.prev();
                Handled::Yes
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.focus_field = self.focus_field.next();
                Handled::Yes
            }
            KeyCode::Enter if self.editable => {
                self.begin_edit();
                Handled::Yes
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let focused = self.focused_student().map(|s| s.id);
                if let Some(signal) = self.keyboard.handle(&key, focused, None) {
                    self.pointer.reset();
                    self.apply_signal(signal);
                }
                Handled::Yes
            }
            KeyCode::Char('e') | KeyCode::F(2) => {
                self.begin_edit();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn captures_input(&self) -> bool {
        self.editor.is_some() || self.keyboard.is_active() || self.pointer.is_active()
    }

    fn focus_hint(&self) -> Option<&'static str> {
        if self.editor.is_some() {
            Some("type to edit  ←→:cursor  Enter/Esc:done  Tab:next field")
        } else if self.keyboard.is_active() {
            Some("↑↓:move  Space/Enter:drop  Esc:cancel")
        } else if self.pointer.is_active() {
            Some("release to drop  Esc:cancel")
        } else if self.editable {
            Some("↑↓:row  ←→:cell  Enter:edit  Space:move  ?:help")
        } else {
            Some("↑↓:row  ←→:cell  Space/Enter:move  ?:help")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::student_row::MOVE_LABEL;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 12,
    };

    fn panel(editable: bool) -> TablePanel {
        let mut config = Config::default();
        config.table.editable = editable;
        let mut panel = TablePanel::new(&config);
        panel.measure(AREA);
        panel
    }

    fn press(panel: &mut TablePanel, code: KeyCode) -> Handled {
        panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(panel: &mut TablePanel, kind: MouseEventKind, column: u16, row: u16) {
        panel.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn names(panel: &TablePanel) -> Vec<&str> {
        panel
            .table()
            .students()
            .iter()
            .map(|s| s.name.as_str())
            .collect()
    }

    fn screen(panel: &TablePanel) -> Vec<String> {
        let backend = TestBackend::new(AREA.width, AREA.height);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, ComponentId::Table);
                panel.render(f, AREA, &ctx);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..AREA.height)
            .map(|y| {
                (0..AREA.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn layout_places_rows_under_the_header() {
        let regions = layout(AREA);
        assert_eq!(regions.heading.y, 0);
        assert_eq!(regions.divider.y, 1);
        assert_eq!(regions.header.y, 3);
        assert_eq!(regions.body.y, 4);

        let rows = row_rects(regions.body, 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].y, 6);
    }

    #[test]
    fn rows_that_do_not_fit_are_not_measured() {
        let rows = row_rects(Rect::new(1, 4, 10, 2), 3);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn translate_clamps_into_body() {
        let body = Rect::new(1, 4, 78, 3);
        let row = Rect::new(1, 4, 78, 1);
        assert_eq!(translate(row, Transform::new(0, 1), body).y, 5);
        assert_eq!(translate(row, Transform::new(0, 20), body).y, 6);
        assert_eq!(translate(row, Transform::new(0, -5), body).y, 4);

        let shifted = translate(row, Transform::new(10, 0), body);
        assert_eq!(shifted.x, 11);
        assert_eq!(shifted.right(), body.right());
    }

    #[test]
    fn renders_heading_divider_header_and_rows() {
        let panel = panel(false);
        let lines = screen(&panel);

        assert!(lines[0].starts_with(HEADING));
        assert!(lines[1].starts_with("────"));
        assert!(lines[3].contains("Move"));
        assert!(lines[3].contains("Student Name"));
        assert!(lines[3].contains("Email"));
        assert!(lines[3].contains("Contact"));
        assert!(lines[4].contains(MOVE_LABEL));
        assert!(lines[4].contains("John Doe"));
        assert!(lines[5].contains("Jane Smith"));
        assert!(lines[6].contains("Bob Johnson"));
    }

    #[test]
    fn keyboard_reorder_moves_focused_row() {
        let mut panel = panel(false);

        assert_eq!(press(&mut panel, KeyCode::Char(' ')), Handled::Yes);
        assert!(panel.is_dragging());
        assert!(panel.captures_input());

        press(&mut panel, KeyCode::Down);
        press(&mut panel, KeyCode::Down);
        assert_eq!(panel.dnd().over(), Some(StudentId(3)));

        press(&mut panel, KeyCode::Char(' '));
        assert!(!panel.is_dragging());
        assert_eq!(names(&panel), vec!["Jane Smith", "Bob Johnson", "John Doe"]);
        // Focus follows the moved row
        assert_eq!(panel.focus().0, 2);
        assert_eq!(panel.take_notices(), vec!["Moved John Doe to row 3"]);
    }

    #[test]
    fn keyboard_overshoot_does_not_stall_the_target() {
        let mut panel = panel(false);
        press(&mut panel, KeyCode::Char(' '));
        for _ in 0..10 {
            press(&mut panel, KeyCode::Down);
        }
        assert_eq!(panel.dnd().over(), Some(StudentId(3)));
        assert_eq!(panel.dnd().transform(StudentId(1)), Some(Transform::new(0, 2)));

        press(&mut panel, KeyCode::Up);
        assert_eq!(panel.dnd().over(), Some(StudentId(2)));

        press(&mut panel, KeyCode::Char(' '));
        assert_eq!(names(&panel), vec!["Jane Smith", "John Doe", "Bob Johnson"]);
    }

    #[test]
    fn read_only_enter_picks_up_the_row() {
        let mut panel = panel(false);
        press(&mut panel, KeyCode::Down);
        press(&mut panel, KeyCode::Enter);
        assert_eq!(panel.dnd().active(), Some(StudentId(2)));

        press(&mut panel, KeyCode::Up);
        press(&mut panel, KeyCode::Enter);
        assert_eq!(names(&panel), vec!["Jane Smith", "John Doe", "Bob Johnson"]);
    }

    #[test]
    fn keyboard_drop_in_place_changes_nothing() {
        let mut panel = panel(false);
        press(&mut panel, KeyCode::Char(' '));
        press(&mut panel, KeyCode::Char(' '));
        assert_eq!(panel.table(), &StudentTable::seeded());
        assert!(panel.take_notices().is_empty());
    }

    #[test]
    fn escape_cancels_keyboard_drag() {
        let mut panel = panel(false);
        press(&mut panel, KeyCode::Char(' '));
        press(&mut panel, KeyCode::Down);
        press(&mut panel, KeyCode::Esc);

        assert!(!panel.is_dragging());
        assert_eq!(panel.table(), &StudentTable::seeded());
        assert_eq!(panel.take_notices(), vec!["Move cancelled"]);
    }

    #[test]
    fn pointer_drag_reorders_rows() {
        let mut panel = panel(false);
        let left = MouseButton::Left;

        // Press on Bob (row 6), drag up to John (row 4), release
        mouse(&mut panel, MouseEventKind::Down(left), 20, 6);
        assert_eq!(panel.focus().0, 2);
        mouse(&mut panel, MouseEventKind::Drag(left), 20, 5);
        assert!(panel.is_dragging());
        mouse(&mut panel, MouseEventKind::Drag(left), 20, 4);
        assert_eq!(panel.dnd().over(), Some(StudentId(1)));
        mouse(&mut panel, MouseEventKind::Up(left), 20, 4);

        assert!(!panel.is_dragging());
        assert_eq!(names(&panel), vec!["Bob Johnson", "John Doe", "Jane Smith"]);
    }

    #[test]
    fn click_focuses_the_cell_under_the_pointer() {
        let mut panel = panel(false);
        let row = panel.dnd().droppables()[1].rect;
        let email = student_row::columns(row)[2];

        mouse(&mut panel, MouseEventKind::Down(MouseButton::Left), email.x, row.y);
        mouse(&mut panel, MouseEventKind::Up(MouseButton::Left), email.x, row.y);

        assert_eq!(panel.focus(), (1, Field::Email));
        assert!(!panel.is_dragging());
        assert_eq!(panel.table(), &StudentTable::seeded());
    }

    #[test]
    fn dragged_row_is_drawn_at_its_offset() {
        let mut panel = panel(false);
        press(&mut panel, KeyCode::Char(' '));
        press(&mut panel, KeyCode::Down);

        let lines = screen(&panel);
        // Resting slot shows a gap, the row floats one line lower
        assert!(!lines[4].contains("John Doe"));
        assert!(lines[4].contains("┄"));
        assert!(lines[5].contains("John Doe"));
    }

    #[test]
    fn read_only_table_refuses_edits() {
        let mut panel = panel(false);
        press(&mut panel, KeyCode::Char('e'));
        assert!(!panel.is_editing());
        assert_eq!(panel.take_notices().len(), 1);
    }

    #[test]
    fn typing_in_an_editable_cell_updates_the_record() {
        let mut panel = panel(true);
        press(&mut panel, KeyCode::Down);
        press(&mut panel, KeyCode::Right);
        assert_eq!(panel.focus(), (1, Field::Email));

        press(&mut panel, KeyCode::Enter);
        assert!(panel.is_editing());

        // "jane@example.com" -> "jane2@example.com"
        press(&mut panel, KeyCode::Home);
        for _ in 0..4 {
            press(&mut panel, KeyCode::Right);
        }
        press(&mut panel, KeyCode::Char('2'));
        assert_eq!(
            panel.table().get(StudentId(2)).unwrap().email,
            "jane2@example.com"
        );

        // Global keys are text while editing
        assert_eq!(press(&mut panel, KeyCode::Char('q')), Handled::Yes);
        assert_eq!(
            panel.table().get(StudentId(2)).unwrap().email,
            "jane2q@example.com"
        );
        press(&mut panel, KeyCode::Backspace);

        press(&mut panel, KeyCode::Esc);
        assert!(!panel.is_editing());

        let jane = panel.table().get(StudentId(2)).unwrap();
        assert_eq!(jane.email, "jane2@example.com");
        assert_eq!(jane.name, "Jane Smith");
        assert_eq!(names(&panel), vec!["John Doe", "Jane Smith", "Bob Johnson"]);
    }

    #[test]
    fn tab_leaves_the_cell_and_moves_right() {
        let mut panel = panel(true);
        press(&mut panel, KeyCode::Enter);
        press(&mut panel, KeyCode::Tab);
        assert!(!panel.is_editing());
        assert_eq!(panel.focus().1, Field::Email);
    }

    #[test]
    fn focused_hint_reports_invalid_email() {
        let mut panel = panel(true);
        press(&mut panel, KeyCode::Right);
        assert_eq!(panel.focused_hint(), None);

        press(&mut panel, KeyCode::Enter);
        for _ in 0.."@example.com".len() {
            press(&mut panel, KeyCode::Backspace);
        }
        press(&mut panel, KeyCode::Esc);
        assert_eq!(panel.table().get(StudentId(1)).unwrap().email, "john");
        assert_eq!(panel.focused_hint(), Some(Hint::InvalidEmail));
    }

    #[test]
    fn unknown_ids_are_reported_not_applied() {
        let mut panel = panel(false);
        let result = panel.dispatch(Msg::Reordered {
            active: StudentId(1),
            over: StudentId(99),
        });
        assert_eq!(result, None);
        assert_eq!(panel.table(), &StudentTable::seeded());
        assert_eq!(panel.take_notices(), vec!["Ignored: no student with id #99"]);
    }

    #[test]
    fn focus_stays_in_bounds() {
        let mut panel = panel(false);
        press(&mut panel, KeyCode::Up);
        assert_eq!(panel.focus().0, 0);
        press(&mut panel, KeyCode::End);
        assert_eq!(panel.focus().0, 2);
        press(&mut panel, KeyCode::Down);
        assert_eq!(panel.focus().0, 2);
    }
}
