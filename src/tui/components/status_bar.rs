// Status bar component
//
// One line at the bottom: mode, uptime and record count, then the validation
// hint for the focused cell and the key hints of whatever owns input.

use crate::tui::app::App;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Short name of the current interaction mode
pub fn mode_label(app: &App) -> &'static str {
    let panel = &app.table_panel;
    if panel.is_editing() {
        "EDIT"
    } else if panel.is_dragging() {
        "MOVE"
    } else if panel.editable() {
        "TABLE"
    } else {
        "READ-ONLY"
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let panel = &app.table_panel;
    let dim = Style::default().fg(theme.status_bar);

    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode_label(app)),
            Style::default()
                .fg(theme.drag_fg)
                .bg(theme.drag_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} │ {} students │ {} ",
                app.uptime(),
                panel.table().len(),
                theme.kind.name()
            ),
            dim,
        ),
    ];

    if let Some(hint) = panel.focused_hint() {
        spans.push(Span::styled("│ ", dim));
        spans.push(Span::styled(
            format!("{} ", hint.message()),
            Style::default().fg(theme.invalid),
        ));
    }

    if let Some(keys) = panel.focus_hint() {
        spans.push(Span::styled(format!("│ {}", keys), dim));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
