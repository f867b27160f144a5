// TUI application state
//
// Holds the table panel and the shell around it: theme, logs panel, modal and
// toast. Input arrives here already filtered to key presses; routing between
// layers happens in `handle_key`.

use super::components::{LogsPanel, TablePanel, Toast};
use super::modal::{Modal, ModalAction};
use super::theme::{Theme, ThemeKind};
use super::traits::{ComponentId, Handled, Interactive};
use crate::config::Config;
use crate::logging::LogBuffer;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Instant;
use tracing::{debug, info};

/// Main application state for the TUI
pub struct App {
    pub table_panel: TablePanel,
    pub logs_panel: LogsPanel,

    /// Shared with the tracing layer
    pub log_buffer: LogBuffer,

    pub theme: Theme,
    pub show_logs: bool,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub should_quit: bool,

    pub start_time: Instant,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            debug!(theme = %config.theme, "unknown theme, using default");
            ThemeKind::default()
        });

        Self {
            table_panel: TablePanel::new(config),
            logs_panel: LogsPanel::new(),
            log_buffer,
            theme: kind.theme(),
            show_logs: config.table.show_logs,
            modal: None,
            toast: None,
            should_quit: false,
            start_time: Instant::now(),
        }
    }

    /// Component that currently receives input
    pub fn focused(&self) -> ComponentId {
        if self.modal.is_some() {
            ComponentId::Help
        } else {
            ComponentId::Table
        }
    }

    pub fn cycle_theme(&mut self) {
        let next = self.theme.kind.next();
        self.theme = next.theme();
        info!(theme = next.name(), "theme changed");
        self.show_toast(format!("Theme: {}", next.name()));
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic housekeeping: expire the toast, surface table notices
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
        self.drain_notices();
    }

    fn drain_notices(&mut self) {
        // Only the newest notice is worth showing
        if let Some(message) = self.table_panel.take_notices().pop() {
            self.show_toast(message);
        }
    }

    /// Layered dispatch: Modal → capturing panel → global keys → panel
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.route_key(key);
        self.drain_notices();
    }

    fn route_key(&mut self, key: KeyEvent) {
        // Layer 1: modal captures all input when open
        if let Some(modal) = self.modal.as_mut() {
            if modal.handle_input(key.code) == ModalAction::Close {
                self.modal = None;
            }
            return;
        }

        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Layer 2: an edit or drag in progress owns the keyboard
        if self.table_panel.captures_input() {
            self.table_panel.handle_key(key);
            return;
        }

        // Layer 3: global keys
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('t') => {
                self.cycle_theme();
                return;
            }
            KeyCode::Char('L') => {
                self.toggle_logs();
                return;
            }
            KeyCode::Char('?') => {
                self.modal = Some(Modal::help());
                return;
            }
            _ => {}
        }

        // Layer 4: the table
        if self.table_panel.handle_key(key) == Handled::No {
            debug!(code = ?key.code, "unbound key");
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.modal.is_some() {
            return;
        }
        self.table_panel.handle_mouse(event);
        self.drain_notices();
    }

    /// Uptime as H:MM:SS
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::students::StudentId;

    fn app(editable: bool) -> App {
        let mut config = Config::default();
        config.table.editable = editable;
        App::new(&config, LogBuffer::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn q_quits_when_idle() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn q_is_text_while_editing() {
        let mut app = app(true);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(
            app.table_panel.table().get(StudentId(1)).unwrap().name,
            "John Doeq"
        );
    }

    #[test]
    fn help_modal_swallows_keys_until_closed() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.focused(), ComponentId::Help);

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.table_panel.is_dragging());

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn theme_cycles_and_toasts() {
        let mut app = app(false);
        assert_eq!(app.theme.kind, ThemeKind::Dark);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.kind, ThemeKind::Light);
        assert_eq!(app.toast.as_ref().unwrap().message, "Theme: light");
    }

    #[test]
    fn logs_toggle() {
        let mut app = app(false);
        assert!(!app.show_logs);
        press(&mut app, KeyCode::Char('L'));
        assert!(app.show_logs);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let mut config = Config::default();
        config.theme = "solarized".to_string();
        let app = App::new(&config, LogBuffer::new());
        assert_eq!(app.theme.kind, ThemeKind::Dark);
    }

    #[test]
    fn uptime_format() {
        let app = app(false);
        assert_eq!(app.uptime(), "0:00:00");
    }
}
