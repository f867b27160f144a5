//! Input sensors that turn raw terminal events into drag signals
//!
//! Sensors know nothing about collision or the items being sorted. They
//! only decide when a drag starts, how far it has moved, and how it ends.

use super::Transform;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// What a sensor asks the drag context to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorSignal<Id> {
    /// Pick up `id`
    Activate { id: Id },
    /// Active item is now `transform` away from where it was picked up
    Move { transform: Transform },
    /// Release over whatever is currently hovered
    Drop,
    /// Abandon the drag, nothing changes
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerState<Id> {
    Idle,
    /// Button is down on `id` but has not moved far enough yet
    Pending { id: Id, origin: (u16, u16) },
    Active { origin: (u16, u16) },
}

/// Mouse-driven dragging with an activation distance
///
/// A press that is released before moving `activation_distance` cells is a
/// plain click and never starts a drag.
#[derive(Debug, Clone)]
pub struct PointerSensor<Id> {
    activation_distance: u16,
    state: PointerState<Id>,
}

impl<Id: Copy> PointerSensor<Id> {
    pub fn new(activation_distance: u16) -> Self {
        Self {
            activation_distance,
            state: PointerState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PointerState::Active { .. })
    }

    /// Feed a mouse event. `hit` resolves a cell to a draggable id.
    pub fn handle(
        &mut self,
        event: &MouseEvent,
        hit: impl Fn(u16, u16) -> Option<Id>,
    ) -> Vec<SensorSignal<Id>> {
        let at = (event.column, event.row);

        match (event.kind, self.state) {
            (MouseEventKind::Down(MouseButton::Left), PointerState::Idle) => {
                if let Some(id) = hit(at.0, at.1) {
                    self.state = PointerState::Pending { id, origin: at };
                }
                Vec::new()
            }
            (MouseEventKind::Drag(MouseButton::Left), PointerState::Pending { id, origin }) => {
                if distance(origin, at) < self.activation_distance {
                    return Vec::new();
                }
                self.state = PointerState::Active { origin };
                vec![
                    SensorSignal::Activate { id },
                    SensorSignal::Move {
                        transform: offset(origin, at),
                    },
                ]
            }
            (MouseEventKind::Drag(MouseButton::Left), PointerState::Active { origin }) => {
                vec![SensorSignal::Move {
                    transform: offset(origin, at),
                }]
            }
            (MouseEventKind::Up(MouseButton::Left), PointerState::Active { .. }) => {
                self.state = PointerState::Idle;
                vec![SensorSignal::Drop]
            }
            (MouseEventKind::Up(MouseButton::Left), PointerState::Pending { .. }) => {
                self.state = PointerState::Idle;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Forget any press in progress (e.g. a keyboard drag took over)
    pub fn reset(&mut self) {
        self.state = PointerState::Idle;
    }
}

/// Keyboard-driven dragging
///
/// Space or Enter picks up the focused item, Up/Down move it by `step`
/// cells, Space or Enter drops it and Esc cancels. Vertical motion stays
/// inside `travel`, the `(min, max)` offsets reported by the drag context.
#[derive(Debug, Clone)]
pub struct KeyboardSensor {
    step: u16,
    offset: Option<Transform>,
}

impl KeyboardSensor {
    pub fn new(step: u16) -> Self {
        Self {
            step: step.max(1),
            offset: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.offset.is_some()
    }

    /// Feed a key press. `focused` is the item that would be picked up.
    pub fn handle<Id>(
        &mut self,
        key: &KeyEvent,
        focused: Option<Id>,
        travel: Option<(i32, i32)>,
    ) -> Option<SensorSignal<Id>> {
        let step = i32::from(self.step);
        let bound = |y: i32| match travel {
            Some((min, max)) => y.clamp(min, max.max(min)),
            None => y,
        };

        if self.offset.is_none() {
            return match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    let id = focused?;
                    self.offset = Some(Transform::NONE);
                    Some(SensorSignal::Activate { id })
                }
                _ => None,
            };
        }
        let offset = self.offset.get_or_insert(Transform::NONE);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                offset.y = bound(offset.y - step);
                Some(SensorSignal::Move { transform: *offset })
            }
            KeyCode::Down | KeyCode::Char('j') => {
                offset.y = bound(offset.y + step);
                Some(SensorSignal::Move { transform: *offset })
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.offset = None;
                Some(SensorSignal::Drop)
            }
            KeyCode::Esc => {
                self.offset = None;
                Some(SensorSignal::Cancel)
            }
            _ => None,
        }
    }
}

/// Chebyshev distance in cells
fn distance(a: (u16, u16), b: (u16, u16)) -> u16 {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

fn offset(origin: (u16, u16), at: (u16, u16)) -> Transform {
    Transform::new(
        i32::from(at.0) - i32::from(origin.0),
        i32::from(at.1) - i32::from(origin.1),
    )
}
