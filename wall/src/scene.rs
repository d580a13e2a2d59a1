//! Scene building: everything the presentation layer needs for one frame.
//!
//! Combines the layout pass, visibility culling, draw order and relation
//! dimming into a flat list of records, bottom first. It receives read-only
//! views of the store and UI state and never writes to either; the host draws
//! the records however its toolkit likes.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::consts::CULL_BUFFER;
use crate::cull::{ItemBox, is_visible};
use crate::doc::{Decoration, Item, ItemId, ItemKind};
use crate::geom::Viewport;
use crate::input::UiState;
use crate::layout::{LayoutParams, Placement, board_height, layout};
use crate::order::{dimmed_ids, draw_order, related_ids};

/// One item as it should be drawn this frame.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub z: i64,
    pub decoration: Decoration,
    /// Faded out because another item's relations are highlighted.
    pub dimmed: bool,
    /// Related to the focused item.
    pub related: bool,
    /// The focused item itself.
    pub focused: bool,
    /// Hovered, selected, or being dragged.
    pub interacting: bool,
}

/// A frame: visible items bottom first, plus the scrollable board height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub items: Vec<SceneItem>,
    pub board_height: f64,
}

/// Build the scene for the given store contents and UI state.
#[must_use]
pub fn build_scene(
    items: &[Item],
    ui: &UiState,
    viewport: &Viewport,
    params: &LayoutParams,
    dragging: &[ItemId],
) -> Scene {
    let placements = layout(items, params);
    let by_id: HashMap<ItemId, (&Item, &Placement)> =
        items.iter().zip(placements.iter()).map(|(i, p)| (i.id, (i, p))).collect();

    let mut interacting: Vec<ItemId> = dragging.to_vec();
    interacting.extend(ui.hovered);
    interacting.extend(ui.selected);

    let dimmed = dimmed_ids(items, ui.focused);
    let related = ui
        .focused
        .map_or_else(BTreeSet::new, |focus| related_ids(items, focus));

    let scene_items = draw_order(items, &interacting)
        .into_iter()
        .filter_map(|entry| {
            let (item, placement) = by_id.get(&entry.id)?;
            let bbox = ItemBox::new(item, placement);
            if !is_visible(&bbox, viewport, CULL_BUFFER) {
                return None;
            }
            Some(SceneItem {
                id: item.id,
                kind: item.kind,
                x: placement.x,
                y: placement.y,
                width: bbox.width,
                height: bbox.height,
                rotation: placement.rotation,
                z: entry.z,
                decoration: item.decoration,
                dimmed: dimmed.contains(&item.id),
                related: related.contains(&item.id),
                focused: ui.focused == Some(item.id),
                interacting: interacting.contains(&item.id),
            })
        })
        .collect();

    Scene { items: scene_items, board_height: board_height(items.len()) }
}
