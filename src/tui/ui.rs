// UI rendering logic
//
// Called once per frame. The table is measured before it is drawn so hit
// testing and collision detection always use what is on screen.

use super::app::App;
use super::components::{status_bar, LogsPanel};
use super::modal::Modal;
use super::traits::{Component, RenderContext};
use crate::config::VERSION;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Height of the logs panel when shown
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function
pub fn draw(f: &mut Frame, app: &mut App) {
    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let [main, logs, status] = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(logs_height),
        Constraint::Length(1),
    ])
    .areas(f.area());

    if app.theme.background != ratatui::style::Color::Reset {
        f.render_widget(
            Block::default().style(Style::default().bg(app.theme.background)),
            f.area(),
        );
    }

    // Table: one column of padding around it
    let table_area = main.inner(ratatui::layout::Margin::new(1, 0));
    app.table_panel.measure(table_area);

    let theme = app.theme.clone();
    let ctx = RenderContext::new(&theme, app.focused());
    app.table_panel.render(f, table_area, &ctx);

    if app.show_logs {
        let entries = app.log_buffer.tail(LogsPanel::capacity(logs));
        app.logs_panel.sync_entries(entries);
        app.logs_panel.render(f, logs, &ctx);
    }

    status_bar::render(f, status, app);

    if let Some(Modal::Help) = app.modal {
        render_help(f, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, main, &app.theme);
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.move_button);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.heading)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(theme.border);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let edit_line = if app.table_panel.editable() {
        kb("Enter, e", "Edit the focused cell")
    } else {
        kb("Enter, e", "Fields are read only")
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Table", header_style)),
        kb("↑/↓, j/k", "Focus row"),
        kb("←/→, h/l, Tab", "Focus cell"),
        kb("Home/End", "First / last row"),
        edit_line,
        Line::raw(""),
        Line::from(Span::styled("  Moving rows", header_style)),
        kb("Space", "Pick up / drop"),
        kb("↑/↓", "Move while held"),
        kb("Esc", "Cancel the move"),
        kb("Mouse drag", "Drag a row"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Cycle theme"),
        kb("L", "Toggle system logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.kind.name(), key_style),
            Span::styled(format!("  |  v{}", VERSION), desc_style),
        ]),
    ]);

    let area = centered_rect(46, 25, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focused))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn draws_table_and_status_line() {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        let lines = screen(&mut app, 90, 20);

        assert!(lines[0].contains("Student Data"));
        assert!(lines.iter().any(|l| l.contains("John Doe")));
        assert!(lines[19].contains("READ-ONLY"));
        assert!(lines[19].contains("3 students"));
        assert!(!lines.iter().any(|l| l.contains("System Logs")));
    }

    #[test]
    fn draw_measures_rows_for_hit_testing() {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        screen(&mut app, 90, 20);
        assert_eq!(app.table_panel.dnd().droppables().len(), 3);
    }

    #[test]
    fn logs_and_help_overlay() {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.show_logs = true;
        app.modal = Some(Modal::help());
        let lines = screen(&mut app, 90, 30);

        assert!(lines.iter().any(|l| l.contains("System Logs")));
        assert!(lines.iter().any(|l| l.contains("Pick up / drop")));
    }

    #[test]
    fn centered_rect_fits_small_areas() {
        let rect = centered_rect(46, 25, Rect::new(0, 0, 30, 10));
        assert_eq!(rect, Rect::new(0, 0, 30, 10));
    }
}
