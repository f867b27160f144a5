//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a new toast with the default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_duration(message, Duration::from_secs(2))
    }

    pub fn with_duration(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Where the toast lands inside `area`
    pub fn area(&self, area: Rect) -> Rect {
        // 2 columns of padding plus the border on each side
        let wanted = u16::try_from(self.message.width()).unwrap_or(u16::MAX);
        let width = wanted
            .saturating_add(4)
            .min(area.width.saturating_sub(4));
        let height = 3u16.min(area.height);

        let x = area.right().saturating_sub(width + 2).max(area.x);
        let y = area.bottom().saturating_sub(height + 2).max(area.y);
        Rect::new(x, y, width, height)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let toast_area = self.area(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border_focused))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sits_in_the_bottom_right_corner() {
        let toast = Toast::new("Moved John Doe to row 3");
        let area = toast.area(Rect::new(0, 0, 80, 24));
        assert_eq!(area.width, 27);
        assert_eq!(area.right(), 78);
        assert_eq!(area.bottom(), 22);
    }

    #[test]
    fn zero_duration_expires_immediately() {
        assert!(Toast::with_duration("x", Duration::ZERO).is_expired());
        assert!(!Toast::new("x").is_expired());
    }
}
