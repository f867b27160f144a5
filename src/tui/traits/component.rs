//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// The student table (always focused)
    Table,
    /// System logs panel
    Logs,
    /// Key binding overlay
    Help,
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need: no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId) -> Self {
        Self { theme, focus }
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
pub trait Component {
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
