//! Interactive trait for components that handle keyboard input
//!
//! The App routes input to the focused component.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (help overlay, then global keys: q, t, L, ?)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
/// ```
///
/// Components that are mid-gesture (editing a cell, dragging a row)
/// report [`Interactive::captures_input`] so they see keys before the
/// global handlers do.
pub trait Interactive: Component {
    /// Returns `Handled::Yes` if the component consumed the event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Whether this component wants every key before global handling
    fn captures_input(&self) -> bool {
        false
    }

    /// Hint text for the status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
