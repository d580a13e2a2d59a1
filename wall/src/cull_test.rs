#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::CULL_BUFFER;
use crate::doc::ItemKind;

fn badge_box(id: ItemId, x: f64, y: f64) -> ItemBox {
    ItemBox { id, x, y, width: 225.0, height: 225.0 }
}

fn vp(scroll: f64) -> Viewport {
    Viewport::new(scroll, 800.0, 600.0)
}

// =============================================================
// is_visible
// =============================================================

#[test]
fn item_inside_viewport_is_visible() {
    assert!(is_visible(&badge_box(1, 100.0, 100.0), &vp(0.0), CULL_BUFFER));
}

#[test]
fn item_far_below_is_culled() {
    assert!(!is_visible(&badge_box(1, 100.0, 1500.0), &vp(0.0), CULL_BUFFER));
}

#[test]
fn item_far_above_is_culled() {
    assert!(!is_visible(&badge_box(1, 100.0, 100.0), &vp(2000.0), CULL_BUFFER));
}

#[test]
fn item_within_buffer_below_is_kept() {
    // Viewport bottom at 600; buffer reaches 800.
    assert!(is_visible(&badge_box(1, 100.0, 790.0), &vp(0.0), CULL_BUFFER));
    assert!(!is_visible(&badge_box(1, 100.0, 801.0), &vp(0.0), CULL_BUFFER));
}

#[test]
fn item_within_buffer_above_is_kept() {
    // Scroll 1000; top of window at 800; item bottom at 780 + 225 = 1005.
    assert!(is_visible(&badge_box(1, 100.0, 780.0), &vp(1000.0), CULL_BUFFER));
    // Item bottom at 570 + 225 = 795 < 800.
    assert!(!is_visible(&badge_box(1, 100.0, 570.0), &vp(1000.0), CULL_BUFFER));
}

#[test]
fn item_far_left_or_right_is_culled() {
    assert!(!is_visible(&badge_box(1, -500.0, 100.0), &vp(0.0), CULL_BUFFER));
    assert!(!is_visible(&badge_box(1, 1001.0, 100.0), &vp(0.0), CULL_BUFFER));
    assert!(is_visible(&badge_box(1, 999.0, 100.0), &vp(0.0), CULL_BUFFER));
}

#[test]
fn zero_viewport_uses_defaults() {
    let zero = Viewport::new(0.0, 0.0, 0.0);
    assert!(is_visible(&badge_box(1, 100.0, 900.0), &zero, CULL_BUFFER));
    assert!(!is_visible(&badge_box(1, 100.0, 1100.0), &zero, CULL_BUFFER));
}

#[test]
fn zero_buffer_is_tight() {
    assert!(!is_visible(&badge_box(1, 100.0, 601.0), &vp(0.0), 0.0));
    assert!(is_visible(&badge_box(1, 100.0, 600.0), &vp(0.0), 0.0));
}

// =============================================================
// visible
// =============================================================

#[test]
fn visible_filters_in_order() {
    let boxes = [badge_box(1, 100.0, 0.0), badge_box(2, 100.0, 5000.0), badge_box(3, 300.0, 400.0)];
    assert_eq!(visible(&boxes, &vp(0.0), CULL_BUFFER), vec![1, 3]);
}

#[test]
fn visible_empty_input() {
    assert!(visible(&[], &vp(0.0), CULL_BUFFER).is_empty());
}

#[test]
fn scrolling_reveals_lower_items() {
    let boxes: Vec<ItemBox> = (0..20u32).map(|i| badge_box(u64::from(i), 100.0, f64::from(i) * 350.0)).collect();
    let top = visible(&boxes, &vp(0.0), CULL_BUFFER);
    let lower = visible(&boxes, &vp(3500.0), CULL_BUFFER);
    assert!(top.contains(&0));
    assert!(!lower.contains(&0));
    assert!(lower.contains(&10));
}

#[test]
fn item_box_uses_footprint() {
    let item = Item::new(4, ItemKind::StickyNote);
    let placement = Placement { id: 4, x: 10.0, y: 20.0, rotation: 0.0, recency: 0, derived: true };
    let b = ItemBox::new(&item, &placement);
    assert_eq!(b, ItemBox { id: 4, x: 10.0, y: 20.0, width: 170.0, height: 170.0 });
}

// =============================================================
// virtual_window
// =============================================================

#[test]
fn window_at_top() {
    let w = virtual_window(50, &vp(0.0), 350.0, 100.0);
    assert_eq!(w.start, 0);
    assert_eq!(w.end, 2);
    assert_eq!(w.total_height, 50.0 * 350.0);
    assert_eq!(w.offset_y, 0.0);
}

#[test]
fn window_after_scroll() {
    let w = virtual_window(50, &vp(1000.0), 350.0, 100.0);
    assert_eq!(w.start, 2);
    assert_eq!(w.end, 5);
    assert_eq!(w.offset_y, 700.0);
    assert_eq!(w.len(), 3);
}

#[test]
fn window_clamped_to_list_length() {
    let w = virtual_window(2, &vp(5000.0), 350.0, 100.0);
    assert_eq!(w.end, 2);
    assert!(w.is_empty());
}

#[test]
fn window_empty_list() {
    let w = virtual_window(0, &vp(0.0), 350.0, 100.0);
    assert!(w.is_empty());
    assert_eq!(w.total_height, 0.0);
}

#[test]
fn window_bad_row_height_falls_back() {
    let w = virtual_window(10, &vp(0.0), 0.0, 100.0);
    assert_eq!(w.total_height, 10.0 * VIRTUAL_ROW_HEIGHT);
}
