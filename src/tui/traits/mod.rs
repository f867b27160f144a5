//! Component trait system for the TUI
//!
//! Components declare their own capabilities through traits instead of the
//! App knowing how to render or route input for every panel.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │  (orchestrator: routes input, owns panels)   │
//! └──────────────────────────────────────────────┘
//!               │                  │
//!               ▼                  ▼
//!        ┌────────────┐     ┌────────────┐
//!        │   Table    │     │    Logs    │
//!        │   Panel    │     │   Panel    │
//!        └────────────┘     └────────────┘
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Interactive`] - keyboard input

mod component;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
