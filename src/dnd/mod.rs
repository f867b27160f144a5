//! Drag-and-drop engine
//!
//! A small sortable-list engine for terminal UIs:
//!
//! ```text
//!  crossterm events ──► PointerSensor / KeyboardSensor ──► SensorSignal
//!                                                              │
//!                           measured Droppables ──► DndContext (+ CollisionDetector)
//!                                                              │
//!                                                              ▼
//!                                         DragEvent::{Start, Over, End, Cancel}
//! ```
//!
//! The engine is generic over the item id and knows nothing about what is
//! being sorted. Callers measure item rects after layout, feed input to a
//! sensor, forward its signals to the context, and react to drag events.

mod collision;
mod context;
mod sensor;

pub use collision::Droppable;
pub use context::{DndContext, DragEvent};
pub use sensor::{KeyboardSensor, PointerSensor, SensorSignal};

/// Translation of the dragged item from its resting position, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transform {
    pub x: i32,
    pub y: i32,
}

impl Transform {
    pub const NONE: Transform = Transform { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
