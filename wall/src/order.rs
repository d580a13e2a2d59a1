//! Draw order and relation highlighting.
//!
//! Items stack by recency: the lowest recency is drawn last, so the newest
//! (or most recently promoted) item sits on top. Items under interaction
//! (hovered, selected, dragged) jump to a reserved band above every
//! recency-derived z.
//!
//! Relations are symmetric: if either item lists the other, they are related.
//! Everything here is recomputed from the store on demand and never cached.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::consts::INTERACTION_Z;
use crate::doc::{Item, ItemId, resolved_recency};

/// One item's slot in the draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawEntry {
    pub id: ItemId,
    /// Stacking value; higher draws above lower.
    pub z: i64,
}

/// Z of the interaction band for a board of `item_count` items.
#[must_use]
pub fn interaction_z(item_count: usize) -> i64 {
    let above_all = i64::try_from(item_count).map_or(i64::MAX, |n| n.saturating_add(1));
    INTERACTION_Z.max(above_all)
}

/// Draw order, bottom first. Ties are broken by id.
#[must_use]
pub fn draw_order(items: &[Item], interacting: &[ItemId]) -> Vec<DrawEntry> {
    let n = items.len();
    let mut by_recency: Vec<(i64, ItemId)> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| (resolved_recency(item, idx), item.id))
        .collect();
    by_recency.sort_unstable();

    let band = interaction_z(n);
    let mut entries: Vec<DrawEntry> = by_recency
        .iter()
        .enumerate()
        .map(|(rank, &(_, id))| {
            let z = if interacting.contains(&id) {
                band
            } else {
                i64::try_from(n - rank).unwrap_or(i64::MAX)
            };
            DrawEntry { id, z }
        })
        .collect();

    entries.sort_by(|a, b| a.z.cmp(&b.z).then_with(|| a.id.cmp(&b.id)));
    entries
}

/// Ids related to `focus`, excluding `focus` itself and ids not on the board.
#[must_use]
pub fn related_ids(items: &[Item], focus: ItemId) -> BTreeSet<ItemId> {
    let Some(focused) = items.iter().find(|i| i.id == focus) else {
        return BTreeSet::new();
    };
    items
        .iter()
        .filter(|i| i.id != focus)
        .filter(|i| focused.related.contains(&i.id) || i.related.contains(&focus))
        .map(|i| i.id)
        .collect()
}

/// Ids to draw dimmed while `focus` is highlighted: everything except the
/// focus and its relations. Empty when nothing is focused.
#[must_use]
pub fn dimmed_ids(items: &[Item], focus: Option<ItemId>) -> BTreeSet<ItemId> {
    let Some(focus) = focus.filter(|f| items.iter().any(|i| i.id == *f)) else {
        return BTreeSet::new();
    };
    let related = related_ids(items, focus);
    items
        .iter()
        .map(|i| i.id)
        .filter(|id| *id != focus && !related.contains(id))
        .collect()
}
