//! End-to-end walkthroughs across the public API.
#![allow(clippy::float_cmp)]

use std::collections::BTreeSet;

use serde_json::json;
use wall::doc::{Decoration, Item, ItemKind, ItemStore, PartialTransform};
use wall::drag::DragController;
use wall::engine::{Action, EngineCore};
use wall::geom::Point;
use wall::input::PlacementMode;
use wall::layout::{LayoutParams, layout};
use wall::order::dimmed_ids;

#[test]
fn single_unplaced_badge_on_default_board() {
    let items = [Item::new(1, ItemKind::Badge)];
    let placements = layout(&items, &LayoutParams { seed: 12345, board_width: 800.0 });
    let p = placements[0];
    assert!(p.derived);
    assert!((70.0..=130.0).contains(&p.y), "y = {}", p.y);
    assert!((50.0..=525.0).contains(&p.x), "x = {}", p.x);
    assert!((-4.0..4.0).contains(&p.rotation));
    assert!((p.x - 189.81).abs() < 0.01, "x = {}", p.x);
    assert!((p.y - 83.24).abs() < 0.01, "y = {}", p.y);
}

#[test]
fn drag_accumulates_relative_deltas() {
    let mut store = ItemStore::new();
    store.load_snapshot(vec![Item { x: Some(400.0), y: Some(200.0), ..Item::new(7, ItemKind::Badge) }]);
    let mut drags = DragController::new();
    assert!(drags.begin(1, 7, Point::new(400.0, 200.0)));
    for delta in [Point::new(10.0, 0.0), Point::new(10.0, 0.0), Point::new(-5.0, 5.0)] {
        drags.drag(1, delta, &mut store);
    }
    assert_eq!(drags.end(1, &mut store), Some((7, Point::new(415.0, 205.0))));
    assert_eq!(store.get(7).and_then(Item::position), Some(Point::new(415.0, 205.0)));
}

#[test]
fn removing_missing_id_changes_nothing() {
    let mut store = ItemStore::new();
    store.create(ItemKind::Badge, json!({}), Some(Point::new(100.0, 100.0))).unwrap();
    store.create(ItemKind::StickyNote, json!({}), Some(Point::new(100.0, 500.0))).unwrap();
    let before = store.list().to_vec();
    assert!(store.remove(424_242).is_none());
    assert!(!store.update(424_242, &PartialTransform::position(Point::new(1.0, 1.0))));
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn focusing_a_related_pair_dims_the_rest() {
    let a = Item { related: BTreeSet::from([2]), ..Item::new(1, ItemKind::Badge) };
    let b = Item { related: BTreeSet::from([1]), ..Item::new(2, ItemKind::Badge) };
    let items = [a, b, Item::new(3, ItemKind::StickyNote), Item::new(4, ItemKind::IdCard)];
    assert_eq!(dimmed_ids(&items, Some(1)), BTreeSet::from([3, 4]));
}

#[test]
fn place_drag_decorate_delete() {
    let mut engine = EngineCore::new();

    engine.set_placement_mode(PlacementMode::StickyNote);
    let created = engine.on_board_click(Point::new(200.0, 200.0));
    let [Action::ItemCreated(note)] = created.as_slice() else {
        panic!("note not created");
    };
    let id = note.id;

    assert!(engine.on_drag_start(1, id));
    engine.on_drag_move(1, Point::new(50.0, 75.0));
    assert_eq!(engine.on_drag_end(1), vec![Action::ItemUpdated { id, x: 250.0, y: 275.0 }]);

    engine.toggle_decoration(id, Decoration::Magnet);
    let scene = engine.scene();
    assert_eq!(scene.items.len(), 1);
    assert_eq!(scene.items[0].decoration, Decoration::Magnet);

    assert_eq!(engine.delete(id), vec![Action::ItemDeleted { id }]);
    assert!(engine.scene().items.is_empty());
}

#[test]
fn long_board_only_draws_near_items() {
    let items: Vec<Item> = (1..=40).map(|id| Item::new(id, ItemKind::Badge)).collect();
    let mut engine = EngineCore::new();
    engine.load_snapshot(items);
    engine.set_viewport(5000.0, 800.0, 800.0);
    let scene = engine.scene();
    assert!(!scene.items.is_empty());
    assert!(scene.items.len() < 10);
    assert!(scene.items.iter().all(|s| s.y + s.height >= 4800.0 && s.y <= 6000.0));
    assert_eq!(scene.board_height, 40.0 * 400.0 + 300.0);
}
