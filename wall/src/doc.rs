//! Document model: wall items, their transforms, and the in-memory store.
//!
//! This module defines what is pinned to the wall (`Item`, `ItemKind`,
//! `Decoration`), a sparse-update type for position/recency edits
//! (`PartialTransform`), a typed accessor for the open-ended `props` JSON bag
//! (`Props`), and the store that owns every live item (`ItemStore`).
//!
//! The store is the single source of truth. Every position it accepts is
//! clamped into the board bounds before it is written, whichever operation
//! wrote it. Operations addressed to an unknown id are silent no-ops: UI
//! events routinely race with deletions and must not fail because of it.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BADGE_SIZE, FIRST_ITEM_ID, ID_CARD_HEIGHT, ID_CARD_WIDTH, MAP_PIN_SIZE, PHOTO_BORDER, PHOTO_HEIGHT, PHOTO_WIDTH,
    STICKY_NOTE_SIZE,
};
use crate::geom::{Bounds, Point, Size};
use crate::layout;
use crate::prng::ambient_rotation;

/// Unique identifier for a wall item. Assigned by the store, never reused.
pub type ItemId = u64;

/// The kind of a wall item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Event badge with an optional image.
    Badge,
    /// Editable paper note.
    StickyNote,
    /// Vertical strip of one or more photos.
    PhotoStrip,
    /// Location pin.
    MapPin,
    /// Profile card.
    IdCard,
}

impl ItemKind {
    /// Width of an item of this kind. Independent of payload for every kind.
    #[must_use]
    pub fn width(self) -> f64 {
        match self {
            Self::Badge => BADGE_SIZE,
            Self::StickyNote => STICKY_NOTE_SIZE,
            Self::PhotoStrip => PHOTO_BORDER * 2.0 + PHOTO_WIDTH,
            Self::MapPin => MAP_PIN_SIZE,
            Self::IdCard => ID_CARD_WIDTH,
        }
    }
}

/// Cosmetic overlay attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
    #[default]
    None,
    Pin,
    Tape,
    Magnet,
}

/// A wall item as stored and as read from board files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    /// Left edge in board coordinates; absent until the item is placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Top edge in board coordinates; absent until the item is placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Tilt in degrees, fixed at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub decoration: Decoration,
    /// Prominence rank; lower is drawn on top. Falls back to list index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recency: Option<i64>,
    /// Ids this item declares as related.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub related: BTreeSet<ItemId>,
    /// Per-kind payload (text, images, profile fields). Opaque to layout.
    #[serde(default)]
    pub props: serde_json::Value,
}

impl Item {
    /// A bare, unplaced item.
    #[must_use]
    pub fn new(id: ItemId, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            x: None,
            y: None,
            rotation: None,
            decoration: Decoration::None,
            recency: None,
            related: BTreeSet::new(),
            props: serde_json::json!({}),
        }
    }

    /// Stored position, if both coordinates are present.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }

    /// Bounding box size. Photo strips grow with their image count.
    #[must_use]
    pub fn footprint(&self) -> Size {
        match self.kind {
            ItemKind::Badge => Size::new(BADGE_SIZE, BADGE_SIZE),
            ItemKind::StickyNote => Size::new(STICKY_NOTE_SIZE, STICKY_NOTE_SIZE),
            ItemKind::MapPin => Size::new(MAP_PIN_SIZE, MAP_PIN_SIZE),
            ItemKind::IdCard => Size::new(ID_CARD_WIDTH, ID_CARD_HEIGHT),
            ItemKind::PhotoStrip => {
                #[allow(clippy::cast_precision_loss)]
                let n = Props::new(&self.props).image_count().max(1) as f64;
                let height = PHOTO_BORDER * 2.0 + n * PHOTO_HEIGHT + (n - 1.0) * PHOTO_BORDER;
                Size::new(self.kind.width(), height)
            }
        }
    }
}

/// Sparse update for an item's transform. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialTransform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recency: Option<i64>,
}

impl PartialTransform {
    /// Move to an absolute position.
    #[must_use]
    pub fn position(p: Point) -> Self {
        Self { x: Some(p.x), y: Some(p.y), recency: None }
    }
}

/// Typed access to common props fields from an `Item.props` JSON value.
pub struct Props<'a> {
    value: &'a serde_json::Value,
}

impl<'a> Props<'a> {
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Badge label. Defaults to `"Event"` when absent.
    #[must_use]
    pub fn label(&self) -> &str {
        self.value
            .get("label")
            .and_then(|v| v.as_str())
            .unwrap_or("Event")
    }

    /// Note body. Empty string when absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.value
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Paper color of a note. Defaults to `"yellow"` when absent.
    #[must_use]
    pub fn color(&self) -> &str {
        self.value
            .get("color")
            .and_then(|v| v.as_str())
            .unwrap_or("yellow")
    }

    /// Image references of a photo strip (or a badge's single image).
    #[must_use]
    pub fn images(&self) -> Vec<&str> {
        if let Some(list) = self.value.get("images").and_then(|v| v.as_array()) {
            return list.iter().filter_map(|v| v.as_str()).collect();
        }
        self.value
            .get("image")
            .and_then(|v| v.as_str())
            .into_iter()
            .collect()
    }

    /// Number of images; zero for an empty or missing list.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images().len()
    }
}

/// In-memory store of wall items, kept in insertion order.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    /// Next id to hand out; `None` once the id space is used up.
    next_id: Option<ItemId>,
    bounds: Bounds,
}

impl ItemStore {
    /// Create an empty store for the default board width.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: Some(FIRST_ITEM_ID), bounds: Bounds::default() }
    }

    /// Create an empty store for a host-reported board width.
    #[must_use]
    pub fn with_board_width(width: f64) -> Self {
        Self { bounds: Bounds::new(width), ..Self::new() }
    }

    /// Create a new item and return its id, or `None` when no unused id is
    /// left.
    ///
    /// `explicit` is honored only when both coordinates are positive; anything
    /// else falls back to placing the item below the lowest item. The item
    /// gets an ambient tilt and the most prominent recency.
    pub fn create(&mut self, kind: ItemKind, props: serde_json::Value, explicit: Option<Point>) -> Option<ItemId> {
        let Some(id) = self.next_id else {
            tracing::warn!(?kind, "item ids exhausted; create refused");
            return None;
        };
        self.next_id = id.checked_add(1);

        let mut item = Item::new(id, kind);
        item.props = if props.is_null() { serde_json::json!({}) } else { props };
        item.rotation = Some(ambient_rotation());
        item.recency = Some(self.top_recency());

        let width = item.footprint().width;
        let wanted = explicit
            .filter(|p| p.x > 0.0 && p.y > 0.0)
            .unwrap_or_else(|| layout::fallback_position(&self.items, width, self.bounds.board_width()));
        let pos = self.bounds.clamp(wanted, width);
        item.x = Some(pos.x);
        item.y = Some(pos.y);

        tracing::debug!(id, ?kind, x = pos.x, y = pos.y, "item created");
        self.items.push(item);
        Some(id)
    }

    /// Apply a partial transform. Returns false (and changes nothing) if the
    /// item doesn't exist.
    ///
    /// When an unplaced item receives only one coordinate, the other is taken
    /// as zero before clamping.
    pub fn update(&mut self, id: ItemId, partial: &PartialTransform) -> bool {
        let bounds = self.bounds;
        let Some(item) = self.get_mut(id) else {
            tracing::debug!(id, "update for unknown item ignored");
            return false;
        };
        if partial.x.is_some() || partial.y.is_some() {
            let wanted = Point::new(
                partial.x.or(item.x).unwrap_or(0.0),
                partial.y.or(item.y).unwrap_or(0.0),
            );
            let pos = bounds.clamp(wanted, item.footprint().width);
            item.x = Some(pos.x);
            item.y = Some(pos.y);
        }
        if let Some(r) = partial.recency {
            item.recency = Some(r);
        }
        true
    }

    /// Remove an item, returning it if it was present. Also drops the id from
    /// every other item's relation set.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        let removed = self.items.remove(idx);
        for item in &mut self.items {
            item.related.remove(&id);
        }
        tracing::debug!(id, "item removed");
        Some(removed)
    }

    /// Set an item's decoration. Returns false if the item doesn't exist.
    pub fn set_decoration(&mut self, id: ItemId, decoration: Decoration) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.decoration = decoration;
        true
    }

    /// Merge keys into an item's props; null values delete keys. Returns false
    /// if the item doesn't exist or the patch isn't a JSON object.
    pub fn update_props(&mut self, id: ItemId, patch: &serde_json::Value) -> bool {
        let Some(incoming) = patch.as_object() else {
            return false;
        };
        let Some(item) = self.get_mut(id) else {
            return false;
        };

        if !item.props.is_object() {
            item.props = serde_json::json!({});
        }

        if let Some(existing) = item.props.as_object_mut() {
            for (k, v) in incoming {
                if v.is_null() {
                    existing.remove(k);
                } else {
                    existing.insert(k.clone(), v.clone());
                }
            }
        }
        true
    }

    /// Give an item a fresh ambient tilt, returning it.
    pub fn rerandomize_rotation(&mut self, id: ItemId) -> Option<f64> {
        let item = self.get_mut(id)?;
        let rotation = ambient_rotation();
        item.rotation = Some(rotation);
        Some(rotation)
    }

    /// Declare `b` as related to `a`. Both must exist and differ.
    pub fn relate(&mut self, a: ItemId, b: ItemId) -> bool {
        if a == b || !self.contains(b) {
            return false;
        }
        let Some(item) = self.get_mut(a) else {
            return false;
        };
        item.related.insert(b);
        true
    }

    /// Remove the relation between `a` and `b`, whichever side declared it.
    pub fn unrelate(&mut self, a: ItemId, b: ItemId) -> bool {
        let mut changed = false;
        if let Some(item) = self.get_mut(a) {
            changed |= item.related.remove(&b);
        }
        if let Some(item) = self.get_mut(b) {
            changed |= item.related.remove(&a);
        }
        changed
    }

    /// Make an item the most prominent one.
    pub fn promote(&mut self, id: ItemId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let top = self.top_recency();
        self.update(id, &PartialTransform { recency: Some(top), ..Default::default() })
    }

    /// Replace all items with a snapshot. Later duplicates of an id replace
    /// earlier ones in place; stored positions are clamped.
    pub fn load_snapshot(&mut self, items: Vec<Item>) {
        self.items.clear();
        for mut item in items {
            if let Some(p) = item.position() {
                let pos = self.bounds.clamp(p, item.footprint().width);
                item.x = Some(pos.x);
                item.y = Some(pos.y);
            }
            self.next_id = match (self.next_id, item.id.checked_add(1)) {
                (Some(next), Some(after)) => Some(next.max(after)),
                _ => None,
            };
            match self.items.iter_mut().find(|i| i.id == item.id) {
                Some(slot) => *slot = item,
                None => self.items.push(item),
            }
        }
        tracing::debug!(count = self.items.len(), "snapshot loaded");
    }

    /// Update the board width used for clamping subsequent writes.
    pub fn set_board_width(&mut self, width: f64) {
        self.bounds = Bounds::new(width);
    }

    #[must_use]
    pub fn board_width(&self) -> f64 {
        self.bounds.board_width()
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Clamp a candidate position for `item` into the current bounds.
    #[must_use]
    pub fn clamp_for(&self, item: &Item, pos: Point) -> Point {
        self.bounds.clamp(pos, item.footprint().width)
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// All items in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A recency strictly lower than every current item's. When the lowest
    /// recency is already `i64::MIN`, recencies are first renumbered to their
    /// rank, keeping the stacking order.
    fn top_recency(&mut self) -> i64 {
        let Some(min) = self.resolved_recencies().into_iter().min() else {
            return 0;
        };
        if let Some(top) = min.checked_sub(1) {
            return top;
        }
        self.renumber_recency();
        -1
    }

    fn resolved_recencies(&self) -> Vec<i64> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| resolved_recency(item, idx))
            .collect()
    }

    /// Replace recencies with their rank `0..n`, ties broken by id.
    fn renumber_recency(&mut self) {
        let recencies = self.resolved_recencies();
        let mut ranked: Vec<(i64, ItemId, usize)> = recencies
            .iter()
            .zip(&self.items)
            .enumerate()
            .map(|(idx, (r, item))| (*r, item.id, idx))
            .collect();
        ranked.sort_unstable();
        for (rank, (_, _, idx)) in ranked.into_iter().enumerate() {
            self.items[idx].recency = Some(i64::try_from(rank).unwrap_or(i64::MAX));
        }
        tracing::debug!(count = self.items.len(), "recency renumbered");
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Recency of `item`, falling back to its list index.
#[must_use]
pub fn resolved_recency(item: &Item, index: usize) -> i64 {
    item.recency
        .unwrap_or_else(|| i64::try_from(index).unwrap_or(i64::MAX))
}
