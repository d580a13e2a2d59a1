//! Auto-layout for items that have never been placed.
//!
//! Unplaced items are stacked in rows down the board, one row per item in list
//! order, and scattered horizontally around the board center by a weighted sum
//! of three seeded draws (one wide, two narrow). The result clusters toward the
//! middle without forming a visible grid. Each row then gets a small seeded
//! vertical jitter.
//!
//! Layout never writes back into the store. Items that carry a stored
//! position pass through untouched.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BOARD_HEIGHT_PADDING, BOARD_HEIGHT_PER_ITEM, DEFAULT_BOARD_WIDTH, DEFAULT_SEED, FALLBACK_SPACING, LAYOUT_BASE_Y,
    LAYOUT_HORIZONTAL_RANGE, LAYOUT_JITTER_Y, LAYOUT_PERTURB_NARROW, LAYOUT_PERTURB_WIDE, LAYOUT_ROW_SPACING,
    MIN_BOARD_HEIGHT,
};
use crate::doc::{Item, ItemId, resolved_recency};
use crate::geom::{Bounds, Point, resolve_board_width};
use crate::prng::SeededRng;

/// Inputs to a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub seed: u64,
    /// Host-reported board width; zero means unknown.
    pub board_width: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED, board_width: DEFAULT_BOARD_WIDTH }
    }
}

/// Resolved display transform for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: ItemId,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub recency: i64,
    /// True when the position came from this pass rather than the store.
    pub derived: bool,
}

impl Placement {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Resolve a placement for every item, in input order.
#[must_use]
pub fn layout(items: &[Item], params: &LayoutParams) -> Vec<Placement> {
    let width = resolve_board_width(params.board_width);
    let bounds = Bounds::new(width);
    let center_x = width / 2.0;
    let range = width * LAYOUT_HORIZONTAL_RANGE;

    let mut rng = SeededRng::new(params.seed);
    let mut row_y = LAYOUT_BASE_Y;
    let mut out = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let recency = resolved_recency(item, index);
        let rotation = item
            .rotation
            .unwrap_or_else(|| SeededRng::for_item(params.seed, item.id).rotation());

        if let Some(p) = item.position() {
            out.push(Placement { id: item.id, x: p.x, y: p.y, rotation, recency, derived: false });
            continue;
        }

        let r1 = rng.next();
        let r2 = rng.next();
        let r3 = rng.next();
        let offset = (r1 - 0.5) * range + (r2 - 0.5) * LAYOUT_PERTURB_WIDE + (r3 - 0.5) * LAYOUT_PERTURB_NARROW;

        let item_width = item.footprint().width;
        let x = center_x + offset - item_width / 2.0;
        let y = row_y + rng.between(-LAYOUT_JITTER_Y, LAYOUT_JITTER_Y);
        row_y += LAYOUT_ROW_SPACING;

        let pos = bounds.clamp(Point::new(x, y), item_width);
        out.push(Placement { id: item.id, x: pos.x, y: pos.y, rotation, recency, derived: true });
    }

    tracing::trace!(count = out.len(), seed = params.seed, "layout pass");
    out
}

/// Where a newly created item goes when the placement click carried no
/// usable position: centered, one row below the lowest item.
///
/// Unplaced items count at the lowest y their derived row can reach, so the
/// result clears them whatever the layout seed.
#[must_use]
pub fn fallback_position(existing: &[Item], item_width: f64, board_width: f64) -> Point {
    let width = resolve_board_width(board_width);
    let stored = existing.iter().filter_map(|i| i.y).fold(f64::NEG_INFINITY, f64::max);
    let unplaced = existing.iter().filter(|i| i.position().is_none()).count();
    let derived = lowest_derived_row(unplaced);
    let lowest = if existing.is_empty() { LAYOUT_BASE_Y } else { stored.max(derived) };
    Point::new(width / 2.0 - item_width / 2.0, lowest + FALLBACK_SPACING)
}

/// Upper bound on the y of the last of `count` derived rows.
fn lowest_derived_row(count: usize) -> f64 {
    let Some(last) = count.checked_sub(1) else {
        return f64::NEG_INFINITY;
    };
    #[allow(clippy::cast_precision_loss)]
    let rows = last as f64;
    LAYOUT_BASE_Y + rows * LAYOUT_ROW_SPACING + LAYOUT_JITTER_Y
}

/// Scrollable height of a board holding `item_count` items.
#[must_use]
pub fn board_height(item_count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = item_count as f64;
    (n * BOARD_HEIGHT_PER_ITEM + BOARD_HEIGHT_PADDING).max(MIN_BOARD_HEIGHT)
}
