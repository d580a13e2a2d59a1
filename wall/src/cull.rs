//! Visibility culling for long boards.
//!
//! Items whose bounding box lies entirely outside the viewport (grown by a
//! generous buffer on every side) are left out of the scene altogether. The
//! buffer keeps items mounted a little past the edge so fast scrolling does
//! not make them pop in and out. Culling only decides what to draw; it never
//! touches stored state.

#[cfg(test)]
#[path = "cull_test.rs"]
mod cull_test;

use crate::consts::{VIRTUAL_PADDING, VIRTUAL_ROW_HEIGHT};
use crate::doc::{Item, ItemId};
use crate::geom::Viewport;
use crate::layout::Placement;

/// An item's resolved bounding box in board space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBox {
    pub id: ItemId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ItemBox {
    /// Box for `item` drawn at `placement`.
    #[must_use]
    pub fn new(item: &Item, placement: &Placement) -> Self {
        let size = item.footprint();
        Self { id: item.id, x: placement.x, y: placement.y, width: size.width, height: size.height }
    }
}

/// Whether `b` intersects the viewport grown by `buffer`.
#[must_use]
pub fn is_visible(b: &ItemBox, viewport: &Viewport, buffer: f64) -> bool {
    let vp = viewport.resolved();
    let buffer = if buffer.is_finite() { buffer.max(0.0) } else { 0.0 };
    let top = vp.scroll_offset - buffer;
    let bottom = vp.scroll_offset + vp.height + buffer;
    !(b.x + b.width < -buffer || b.x > vp.width + buffer || b.y + b.height < top || b.y > bottom)
}

/// Ids of the boxes that should be rendered, in input order.
#[must_use]
pub fn visible(boxes: &[ItemBox], viewport: &Viewport, buffer: f64) -> Vec<ItemId> {
    boxes
        .iter()
        .filter(|b| is_visible(b, viewport, buffer))
        .map(|b| b.id)
        .collect()
}

/// Contiguous index range of a fixed-row list that intersects the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualWindow {
    /// First index to render.
    pub start: usize,
    /// One past the last index to render.
    pub end: usize,
    /// Height of the whole list.
    pub total_height: f64,
    /// Offset of `start` from the top of the list.
    pub offset_y: f64,
}

impl VirtualWindow {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Index window for a list of `len` rows of equal height.
#[must_use]
pub fn virtual_window(len: usize, viewport: &Viewport, row_height: f64, padding: f64) -> VirtualWindow {
    let vp = viewport.resolved();
    let row_height = if row_height.is_finite() && row_height > 0.0 { row_height } else { VIRTUAL_ROW_HEIGHT };
    let padding = if padding.is_finite() { padding.max(0.0) } else { VIRTUAL_PADDING };

    let first = ((vp.scroll_offset - padding) / row_height).floor().max(0.0);
    let last = ((vp.scroll_offset + vp.height + padding) / row_height).ceil().max(0.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (first, last) = (first as usize, last as usize);
    let end = last.min(len);
    let start = first.min(end);

    #[allow(clippy::cast_precision_loss)]
    let (total_height, offset_y) = (len as f64 * row_height, start as f64 * row_height);
    VirtualWindow { start, end, total_height, offset_y }
}
