//! Input model: placement mode and the UI state visible to the scene builder.
//!
//! `PlacementMode` captures what the next board click means. `UiState` holds
//! everything about the user's current attention (hover, selection, focus)
//! that affects how items are drawn but is never written into the store.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::{ItemId, ItemKind};

/// What a click on empty board space does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Clicks select / deselect (default).
    #[default]
    None,
    /// Next click places a badge.
    Badge,
    /// Next click places a sticky note.
    StickyNote,
    /// Next click opens the photo editor for a strip at that spot.
    Photo,
}

impl PlacementMode {
    /// Whether a placement is pending. Dragging is disabled while it is.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Kind of item the next click creates, if any.
    #[must_use]
    pub fn kind(self) -> Option<ItemKind> {
        match self {
            Self::None => None,
            Self::Badge => Some(ItemKind::Badge),
            Self::StickyNote => Some(ItemKind::StickyNote),
            Self::Photo => Some(ItemKind::PhotoStrip),
        }
    }
}

/// Identifier of one pointer (mouse, pen, or a single touch).
pub type PointerId = u32;

/// Persistent UI state visible to the scene builder.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub placement: PlacementMode,
    /// Item under the pointer.
    pub hovered: Option<ItemId>,
    /// Item whose detail overlay is open.
    pub selected: Option<ItemId>,
    /// Item whose relations are highlighted; everything else is dimmed.
    pub focused: Option<ItemId>,
    /// View mode (false) disables dragging.
    pub edit_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { placement: PlacementMode::None, hovered: None, selected: None, focused: None, edit_mode: true }
    }
}

impl UiState {
    /// Whether drag gestures may start.
    #[must_use]
    pub fn drag_enabled(&self) -> bool {
        self.edit_mode && !self.placement.is_active()
    }

    /// Drop every reference to `id` (after it was deleted).
    pub fn forget(&mut self, id: ItemId) {
        for slot in [&mut self.hovered, &mut self.selected, &mut self.focused] {
            if *slot == Some(id) {
                *slot = None;
            }
        }
    }
}
