//! Board geometry: points, footprints, horizontal bounds and the viewport.
//!
//! All coordinates are board pixels with the origin at the top-left of the
//! board; `y` grows downward as the board scrolls. Every fallback for a
//! missing or degenerate host measurement lives here so no caller can produce
//! NaN or negative layout coordinates from a detached environment.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BOUND_MARGIN, DEFAULT_BOARD_WIDTH, DEFAULT_VIEWPORT_DIM};

/// A point (or a delta) in board space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[must_use]
    pub fn offset(self, delta: Point) -> Self {
        Self { x: self.x + delta.x, y: self.y + delta.y }
    }
}

/// Width and height of an item's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resolve a host-reported board width, falling back to the default when the
/// host reports nothing usable.
#[must_use]
pub fn resolve_board_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 { width } else { DEFAULT_BOARD_WIDTH }
}

/// Horizontal containment rule for one board width.
///
/// `x` must stay within `[BOUND_MARGIN, width - item_width - BOUND_MARGIN]`
/// and `y` must not go above the top of the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    board_width: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(board_width: f64) -> Self {
        Self { board_width: resolve_board_width(board_width) }
    }

    #[must_use]
    pub fn board_width(&self) -> f64 {
        self.board_width
    }

    /// Largest legal `x` for an item of the given width. Never below the
    /// left margin, so a board narrower than the item pins it to the margin.
    #[must_use]
    pub fn max_x(&self, item_width: f64) -> f64 {
        (self.board_width - item_width - BOUND_MARGIN).max(BOUND_MARGIN)
    }

    /// Clamp a top-left position into the legal region. Idempotent.
    #[must_use]
    pub fn clamp(&self, pos: Point, item_width: f64) -> Point {
        let x = if pos.x.is_finite() { pos.x } else { BOUND_MARGIN };
        let y = if pos.y.is_finite() { pos.y } else { 0.0 };
        Point { x: x.clamp(BOUND_MARGIN, self.max_x(item_width)), y: y.max(0.0) }
    }

    /// Whether `pos` already satisfies the containment rule.
    #[must_use]
    pub fn contains(&self, pos: Point, item_width: f64) -> bool {
        pos.x >= BOUND_MARGIN && pos.x <= self.max_x(item_width) && pos.y >= 0.0
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH)
    }
}

/// The visible window onto the board, as reported by the host on each
/// scroll or resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Distance the board has been scrolled down.
    pub scroll_offset: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(scroll_offset: f64, width: f64, height: f64) -> Self {
        Self { scroll_offset, width, height }
    }

    /// Copy with zero or non-finite measurements replaced by defaults.
    #[must_use]
    pub fn resolved(self) -> Self {
        let dim = |v: f64| if v.is_finite() && v > 0.0 { v } else { DEFAULT_VIEWPORT_DIM };
        Self {
            scroll_offset: if self.scroll_offset.is_finite() { self.scroll_offset.max(0.0) } else { 0.0 },
            width: dim(self.width),
            height: dim(self.height),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scroll_offset: 0.0, width: DEFAULT_VIEWPORT_DIM, height: DEFAULT_VIEWPORT_DIM }
    }
}
