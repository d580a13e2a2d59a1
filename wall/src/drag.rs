//! Drag-to-reposition.
//!
//! A drag session remembers where its item was when the gesture began and the
//! sum of every pointer delta since. Each move writes `origin + delta`,
//! clamped, into the store so the item follows the pointer live. Release
//! repeats the same clamp-and-write once more, which is a no-op when the last
//! move already wrote it.
//!
//! Sessions are keyed by pointer, so two pointers dragging two items never
//! share state. An item can be held by at most one pointer at a time.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use std::collections::HashMap;

use crate::doc::{ItemId, ItemStore, PartialTransform};
use crate::geom::Point;
use crate::input::PointerId;

/// One active drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Item being dragged.
    pub item: ItemId,
    /// Item position when the gesture began.
    pub origin: Point,
    /// Sum of all pointer deltas received so far.
    pub delta: Point,
}

impl DragSession {
    /// Unclamped position the pointer is asking for.
    #[must_use]
    pub fn candidate(&self) -> Point {
        self.origin.offset(self.delta)
    }
}

/// Tracks active drag sessions, one per pointer.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    sessions: HashMap<PointerId, DragSession>,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `item` from `origin`. Refused (false) if the pointer is
    /// already dragging or another pointer holds the item.
    pub fn begin(&mut self, pointer: PointerId, item: ItemId, origin: Point) -> bool {
        if self.sessions.contains_key(&pointer) || self.is_dragging(item) {
            return false;
        }
        self.sessions.insert(pointer, DragSession { item, origin, delta: Point::default() });
        tracing::debug!(pointer, item, x = origin.x, y = origin.y, "drag started");
        true
    }

    /// Feed one relative pointer delta. Writes the clamped position and
    /// returns it, or `None` when the pointer has no session or the item has
    /// since been deleted.
    pub fn drag(&mut self, pointer: PointerId, delta: Point, store: &mut ItemStore) -> Option<(ItemId, Point)> {
        let session = self.sessions.get_mut(&pointer)?;
        session.delta = session.delta.offset(delta);
        let session = *session;
        let pos = write_clamped(&session, store)?;
        tracing::trace!(pointer, item = session.item, x = pos.x, y = pos.y, "drag moved");
        Some((session.item, pos))
    }

    /// Finish the gesture with one last clamp-and-write.
    pub fn end(&mut self, pointer: PointerId, store: &mut ItemStore) -> Option<(ItemId, Point)> {
        let session = self.sessions.remove(&pointer)?;
        let pos = write_clamped(&session, store)?;
        tracing::debug!(pointer, item = session.item, x = pos.x, y = pos.y, "drag ended");
        Some((session.item, pos))
    }

    /// Abandon a gesture without writing anything.
    pub fn cancel(&mut self, pointer: PointerId) -> Option<DragSession> {
        self.sessions.remove(&pointer)
    }

    /// Abandon every gesture holding `item`.
    pub fn release_item(&mut self, item: ItemId) {
        self.sessions.retain(|_, s| s.item != item);
    }

    /// Abandon every gesture.
    pub fn cancel_all(&mut self) {
        self.sessions.clear();
    }

    #[must_use]
    pub fn session(&self, pointer: PointerId) -> Option<&DragSession> {
        self.sessions.get(&pointer)
    }

    #[must_use]
    pub fn is_dragging(&self, item: ItemId) -> bool {
        self.sessions.values().any(|s| s.item == item)
    }

    /// Items currently held by some pointer.
    pub fn dragged_items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.sessions.values().map(|s| s.item)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn write_clamped(session: &DragSession, store: &mut ItemStore) -> Option<Point> {
    let item = store.get(session.item)?;
    let pos = store.clamp_for(item, session.candidate());
    store.update(session.item, &PartialTransform::position(pos));
    Some(pos)
}
