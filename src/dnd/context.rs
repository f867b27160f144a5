//! Drag coordination: one active item, its transform, and its drop target

use super::collision::{ClosestCenter, CollisionDetector, Droppable};
use super::sensor::SensorSignal;
use super::Transform;
use ratatui::layout::Rect;
use tracing::trace;

/// Lifecycle notifications, in the order they happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent<Id> {
    Start { active: Id },
    /// The hovered target changed
    Over { active: Id, over: Option<Id> },
    End { active: Id, over: Option<Id> },
    Cancel { active: Id },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState<Id> {
    Idle,
    Dragging {
        active: Id,
        transform: Transform,
        over: Option<Id>,
    },
}

/// Coordinates sensors, measured droppables and collision detection
#[derive(Debug, Clone)]
pub struct DndContext<Id, C = ClosestCenter> {
    detector: C,
    droppables: Vec<Droppable<Id>>,
    state: DragState<Id>,
}

impl<Id: Copy + PartialEq> DndContext<Id, ClosestCenter> {
    pub fn new() -> Self {
        Self::with_detector(ClosestCenter)
    }
}

impl<Id: Copy + PartialEq> Default for DndContext<Id, ClosestCenter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Copy + PartialEq, C: CollisionDetector> DndContext<Id, C> {
    pub fn with_detector(detector: C) -> Self {
        Self {
            detector,
            droppables: Vec::new(),
            state: DragState::Idle,
        }
    }

    /// Replace the measured item positions (call after every layout pass)
    pub fn set_droppables(&mut self, droppables: Vec<Droppable<Id>>) {
        self.droppables = droppables;
    }

    pub fn droppables(&self) -> &[Droppable<Id>] {
        &self.droppables
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn active(&self) -> Option<Id> {
        match self.state {
            DragState::Dragging { active, .. } => Some(active),
            DragState::Idle => None,
        }
    }

    pub fn over(&self) -> Option<Id> {
        match self.state {
            DragState::Dragging { over, .. } => over,
            DragState::Idle => None,
        }
    }

    /// Offset to draw `id` at, or `None` when it is not being dragged
    pub fn transform(&self, id: Id) -> Option<Transform> {
        match self.state {
            DragState::Dragging {
                active, transform, ..
            } if active == id => Some(transform),
            _ => None,
        }
    }

    /// Vertical offsets `(min, max)` that keep the active item's center
    /// between the first and last droppable centers
    pub fn travel(&self) -> Option<(i32, i32)> {
        let active = self.active()?;
        let rect = self.droppables.iter().find(|d| d.id == active)?.rect;
        let center = |r: Rect| i32::from(r.y) + i32::from(r.height) / 2;
        let origin = center(rect);
        let (min, max) = self
            .droppables
            .iter()
            .map(|d| center(d.rect))
            .fold((origin, origin), |(lo, hi), c| (lo.min(c), hi.max(c)));
        Some((min - origin, max - origin))
    }

    /// Draggable at a screen cell, using the last measured positions
    pub fn hit(&self, x: u16, y: u16) -> Option<Id> {
        self.droppables
            .iter()
            .find(|d| d.rect.contains(ratatui::layout::Position::new(x, y)))
            .map(|d| d.id)
    }

    /// Apply one sensor signal and report what happened
    pub fn apply(&mut self, signal: SensorSignal<Id>) -> Vec<DragEvent<Id>> {
        match (signal, self.state) {
            (SensorSignal::Activate { id }, DragState::Idle) => {
                let over = self.detect(id, Transform::NONE);
                self.state = DragState::Dragging {
                    active: id,
                    transform: Transform::NONE,
                    over,
                };
                vec![
                    DragEvent::Start { active: id },
                    DragEvent::Over { active: id, over },
                ]
            }
            (
                SensorSignal::Move { transform },
                DragState::Dragging {
                    active,
                    over: previous,
                    ..
                },
            ) => {
                let over = self.detect(active, transform);
                self.state = DragState::Dragging {
                    active,
                    transform,
                    over,
                };
                if over != previous {
                    trace!(?transform, "drag target changed");
                    vec![DragEvent::Over { active, over }]
                } else {
                    Vec::new()
                }
            }
            (SensorSignal::Drop, DragState::Dragging { active, over, .. }) => {
                self.state = DragState::Idle;
                vec![DragEvent::End { active, over }]
            }
            (SensorSignal::Cancel, DragState::Dragging { active, .. }) => {
                self.state = DragState::Idle;
                vec![DragEvent::Cancel { active }]
            }
            // Activate while dragging, or move/drop/cancel while idle
            _ => Vec::new(),
        }
    }

    fn detect(&self, active: Id, transform: Transform) -> Option<Id> {
        let rect = self.droppables.iter().find(|d| d.id == active)?.rect;
        self.detector.detect(rect, transform, &self.droppables)
    }
}
