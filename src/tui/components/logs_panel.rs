//! Logs panel component
//!
//! Shows the most recent entries of the in-memory log buffer, newest at the
//! bottom. The panel does not own the buffer: it is shared with the tracing
//! layer, so entries are passed in at render time.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Logs panel with a fixed tail view
#[derive(Debug, Default)]
pub struct LogsPanel {
    entries: Vec<LogEntry>,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows available for entries inside the border
    pub fn capacity(area: Rect) -> usize {
        usize::from(area.height.saturating_sub(2))
    }

    /// Replace the entries to show (call each frame with the buffer tail)
    pub fn sync_entries(&mut self, entries: Vec<LogEntry>) {
        self.entries = entries;
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let visible = Self::capacity(area);
        let skip = self.entries.len().saturating_sub(visible);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .skip(skip)
            .map(|entry| {
                ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
            })
            .collect();

        let border_color = if ctx.is_focused(self.id()) {
            theme.border_focused
        } else {
            theme.border
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color))
                .title(" System Logs "),
        );

        f.render_widget(list, area);
    }
}

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.log_debug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ratatui::{backend::TestBackend, Terminal};

    fn entry(n: u32) -> LogEntry {
        LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, n).unwrap(),
            level: LogLevel::Info,
            target: "student_table".to_string(),
            message: format!("entry {}", n),
        }
    }

    #[test]
    fn formats_time_level_and_message() {
        assert_eq!(format_log_entry(&entry(7)), "[12:00:07] INFO  entry 7");
    }

    #[test]
    fn shows_only_the_newest_entries_that_fit() {
        let mut panel = LogsPanel::new();
        panel.sync_entries((0..10).map(entry).collect());

        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, ComponentId::Table);
                panel.render(f, f.area(), &ctx);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let lines: Vec<String> = (0..5)
            .map(|y| (0..40).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect();
        assert!(lines[0].contains("System Logs"));
        assert!(lines[1].contains("entry 7"));
        assert!(lines[3].contains("entry 9"));
        assert!(!lines.iter().any(|l| l.contains("entry 6")));
    }
}
