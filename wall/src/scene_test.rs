#![allow(clippy::float_cmp)]

use super::*;

fn badge_at(id: ItemId, x: f64, y: f64, recency: i64) -> Item {
    Item { x: Some(x), y: Some(y), rotation: Some(1.0), recency: Some(recency), ..Item::new(id, ItemKind::Badge) }
}

fn ids(scene: &Scene) -> Vec<ItemId> {
    scene.items.iter().map(|s| s.id).collect()
}

fn build(items: &[Item], ui: &UiState, viewport: &Viewport) -> Scene {
    build_scene(items, ui, viewport, &LayoutParams::default(), &[])
}

#[test]
fn empty_board_scene() {
    let scene = build(&[], &UiState::default(), &Viewport::default());
    assert!(scene.items.is_empty());
    assert_eq!(scene.board_height, 1500.0);
}

#[test]
fn scene_is_bottom_first() {
    let items = [badge_at(1, 100.0, 100.0, 0), badge_at(2, 200.0, 150.0, 1)];
    let scene = build(&items, &UiState::default(), &Viewport::default());
    assert_eq!(ids(&scene), vec![2, 1]);
}

#[test]
fn consecutive_frames_agree_on_tilt() {
    let item = Item { x: Some(300.0), y: Some(200.0), ..Item::new(8, ItemKind::StickyNote) };
    let items = [item];
    let first = build(&items, &UiState::default(), &Viewport::default());
    let second = build(&items, &UiState::default(), &Viewport::default());
    assert_eq!(first.items[0].rotation, second.items[0].rotation);
    assert!((-4.0..4.0).contains(&first.items[0].rotation));
}

#[test]
fn offscreen_items_are_left_out() {
    let items = [badge_at(1, 100.0, 100.0, 0), badge_at(2, 100.0, 9000.0, 1)];
    let scene = build(&items, &UiState::default(), &Viewport::new(0.0, 800.0, 800.0));
    assert_eq!(ids(&scene), vec![1]);
}

#[test]
fn culling_does_not_touch_items() {
    let items = vec![badge_at(1, 100.0, 9000.0, 0)];
    let before = items.clone();
    let scene = build(&items, &UiState::default(), &Viewport::default());
    assert!(scene.items.is_empty());
    assert_eq!(items, before);
}

#[test]
fn hovered_item_is_on_top_and_flagged() {
    let items = [badge_at(1, 100.0, 100.0, 0), badge_at(2, 200.0, 150.0, 5)];
    let ui = UiState { hovered: Some(2), ..Default::default() };
    let scene = build(&items, &ui, &Viewport::default());
    let top = scene.items.last().unwrap();
    assert_eq!(top.id, 2);
    assert!(top.interacting);
    assert!(!scene.items[0].interacting);
}

#[test]
fn dragged_item_is_on_top() {
    let items = [badge_at(1, 100.0, 100.0, 0), badge_at(2, 200.0, 150.0, 5)];
    let scene = build_scene(&items, &UiState::default(), &Viewport::default(), &LayoutParams::default(), &[2]);
    assert_eq!(scene.items.last().map(|s| s.id), Some(2));
}

#[test]
fn focus_flags_related_and_dimmed() {
    let mut a = badge_at(1, 100.0, 100.0, 0);
    a.related.insert(2);
    let items = [a, badge_at(2, 100.0, 300.0, 1), badge_at(3, 100.0, 500.0, 2)];
    let ui = UiState { focused: Some(1), ..Default::default() };
    let scene = build(&items, &ui, &Viewport::default());
    let get = |id| scene.items.iter().find(|s| s.id == id).unwrap();
    assert!(get(1).focused && !get(1).dimmed);
    assert!(get(2).related && !get(2).dimmed);
    assert!(get(3).dimmed && !get(3).related);
}

#[test]
fn unplaced_items_get_derived_positions() {
    let items = [Item::new(1, ItemKind::StickyNote)];
    let scene = build(&items, &UiState::default(), &Viewport::default());
    let s = &scene.items[0];
    assert!(s.y >= 70.0 && s.y <= 130.0);
    assert_eq!(s.width, 170.0);
}

#[test]
fn decoration_is_carried() {
    let mut item = badge_at(1, 100.0, 100.0, 0);
    item.decoration = Decoration::Magnet;
    let scene = build(&[item], &UiState::default(), &Viewport::default());
    assert_eq!(scene.items[0].decoration, Decoration::Magnet);
}
