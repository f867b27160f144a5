//! Collision detection: which droppable is the dragged item over?

use super::Transform;
use ratatui::layout::Rect;

/// A measured drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Droppable<Id> {
    pub id: Id,
    pub rect: Rect,
}

impl<Id> Droppable<Id> {
    pub fn new(id: Id, rect: Rect) -> Self {
        Self { id, rect }
    }
}

/// Strategy that picks the current drop target for a dragged rect
pub trait CollisionDetector {
    /// `active` is the dragged item's rect at rest; `transform` is how far
    /// it has moved. Returns the target among `droppables`, if any.
    fn detect<Id: Copy>(
        &self,
        active: Rect,
        transform: Transform,
        droppables: &[Droppable<Id>],
    ) -> Option<Id>;
}

/// Nearest bounding-box center wins
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestCenter;

impl CollisionDetector for ClosestCenter {
    fn detect<Id: Copy>(
        &self,
        active: Rect,
        transform: Transform,
        droppables: &[Droppable<Id>],
    ) -> Option<Id> {
        let (cx, cy) = center(active);
        let cx = cx + f64::from(transform.x);
        let cy = cy + f64::from(transform.y);

        let mut best: Option<(Id, f64)> = None;
        for droppable in droppables {
            let (dx, dy) = center(droppable.rect);
            let distance = ((dx - cx).powi(2) + (dy - cy).powi(2)).sqrt();
            // Strict less-than: ties keep the earlier droppable
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((droppable.id, distance));
            }
        }
        best.map(|(id, _)| id)
    }
}

fn center(rect: Rect) -> (f64, f64) {
    (
        f64::from(rect.x) + f64::from(rect.width) / 2.0,
        f64::from(rect.y) + f64::from(rect.height) / 2.0,
    )
}
