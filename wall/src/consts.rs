//! Shared numeric constants for the wall crate.

// ── Board ───────────────────────────────────────────────────────

/// Board width used when the host reports none (or a degenerate one).
pub const DEFAULT_BOARD_WIDTH: f64 = 800.0;

/// Horizontal margin kept clear on both sides of the board.
pub const BOUND_MARGIN: f64 = 50.0;

/// Minimum scrollable board height.
pub const MIN_BOARD_HEIGHT: f64 = 1500.0;

/// Board height contributed by each item.
pub const BOARD_HEIGHT_PER_ITEM: f64 = 400.0;

/// Extra board height below the last row.
pub const BOARD_HEIGHT_PADDING: f64 = 300.0;

// ── Layout ──────────────────────────────────────────────────────

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 12345;

/// Vertical position of the first auto-placed row.
pub const LAYOUT_BASE_Y: f64 = 100.0;

/// Vertical distance between successive auto-placed rows.
pub const LAYOUT_ROW_SPACING: f64 = 350.0;

/// Fraction of the board width covered by the wide horizontal draw.
pub const LAYOUT_HORIZONTAL_RANGE: f64 = 0.6;

/// Span of the first small horizontal perturbation.
pub const LAYOUT_PERTURB_WIDE: f64 = 100.0;

/// Span of the second small horizontal perturbation.
pub const LAYOUT_PERTURB_NARROW: f64 = 50.0;

/// Maximum vertical jitter applied to a row, in either direction.
pub const LAYOUT_JITTER_Y: f64 = 30.0;

/// Maximum tilt of an item, in degrees, in either direction.
pub const MAX_ROTATION_DEG: f64 = 4.0;

/// Vertical gap left below the lowest item by the creation fallback.
pub const FALLBACK_SPACING: f64 = 350.0;

// ── Identity ────────────────────────────────────────────────────

/// First id handed out by a fresh store.
pub const FIRST_ITEM_ID: u64 = 1000;

// ── Footprints ──────────────────────────────────────────────────

pub const BADGE_SIZE: f64 = 225.0;
pub const STICKY_NOTE_SIZE: f64 = 170.0;
pub const MAP_PIN_SIZE: f64 = 32.0;
pub const ID_CARD_WIDTH: f64 = 320.0;
pub const ID_CARD_HEIGHT: f64 = 200.0;

/// Frame border around and between photos in a strip.
pub const PHOTO_BORDER: f64 = 8.0;
pub const PHOTO_WIDTH: f64 = 100.0;
pub const PHOTO_HEIGHT: f64 = 120.0;

// ── Viewport / culling ──────────────────────────────────────────

/// Viewport dimension used when the host reports none.
pub const DEFAULT_VIEWPORT_DIM: f64 = 800.0;

/// Slack around the viewport inside which items stay mounted.
pub const CULL_BUFFER: f64 = 200.0;

/// Row height assumed by the index-window virtualizer.
pub const VIRTUAL_ROW_HEIGHT: f64 = 350.0;

/// Padding above and below the viewport for the index-window virtualizer.
pub const VIRTUAL_PADDING: f64 = 100.0;

// ── Z-order ─────────────────────────────────────────────────────

/// Lowest z assigned to the item under interaction.
pub const INTERACTION_Z: i64 = 1000;
