use serde::Serialize;

use crate::consts::DEFAULT_SEED;
use crate::doc::{Decoration, Item, ItemId, ItemKind, ItemStore, PartialTransform};
use crate::drag::DragController;
use crate::geom::{Point, Viewport};
use crate::input::{PlacementMode, PointerId, UiState};
use crate::layout::{LayoutParams, Placement, layout};
use crate::scene::{Scene, build_scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    ItemCreated(Item),
    ItemUpdated { id: ItemId, x: f64, y: f64 },
    ItemDeleted { id: ItemId },
    DecorationChanged { id: ItemId, decoration: Decoration },
    /// The host should open its photo editor; the strip is created by
    /// [`EngineCore::commit_photo`] once the user saves.
    PhotoEditorRequested { position: Point },
}

/// Core engine state: the store plus everything needed to interpret input
/// against it.
pub struct EngineCore {
    pub store: ItemStore,
    pub ui: UiState,
    pub drags: DragController,
    pub viewport: Viewport,
    pub seed: u64,
    pending_photo: Option<Point>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            store: ItemStore::new(),
            ui: UiState::default(),
            drags: DragController::new(),
            viewport: Viewport::default(),
            seed: DEFAULT_SEED,
            pending_photo: None,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a specific layout seed and board width.
    #[must_use]
    pub fn with_config(seed: u64, board_width: f64) -> Self {
        Self { store: ItemStore::with_board_width(board_width), seed, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the board contents. Abandons drags and UI references.
    pub fn load_snapshot(&mut self, items: Vec<Item>) {
        self.drags.cancel_all();
        self.ui.hovered = None;
        self.ui.selected = None;
        self.ui.focused = None;
        self.pending_photo = None;
        self.store.load_snapshot(items);
    }

    /// Delete an item and everything that referenced it.
    pub fn delete(&mut self, id: ItemId) -> Vec<Action> {
        self.drags.release_item(id);
        self.ui.forget(id);
        match self.store.remove(id) {
            Some(_) => {
                tracing::debug!(id, "item deleted");
                vec![Action::ItemDeleted { id }]
            }
            None => Vec::new(),
        }
    }

    /// Merge a props patch into an item (null values delete keys).
    pub fn update_props(&mut self, id: ItemId, patch: &serde_json::Value) -> bool {
        self.store.update_props(id, patch)
    }

    pub fn relate(&mut self, a: ItemId, b: ItemId) -> bool {
        self.store.relate(a, b)
    }

    pub fn unrelate(&mut self, a: ItemId, b: ItemId) -> bool {
        self.store.unrelate(a, b)
    }

    /// Give an item a fresh ambient tilt.
    pub fn shuffle_rotation(&mut self, id: ItemId) -> Option<f64> {
        self.store.rerandomize_rotation(id)
    }

    // --- Placement ---

    /// Arm or disarm placement. Arming abandons any drag in progress.
    pub fn set_placement_mode(&mut self, mode: PlacementMode) {
        self.ui.placement = mode;
        if mode != PlacementMode::Photo {
            self.pending_photo = None;
        }
        if mode.is_active() {
            self.drags.cancel_all();
        }
    }

    /// A click on empty board space, in board coordinates.
    pub fn on_board_click(&mut self, point: Point) -> Vec<Action> {
        match self.ui.placement {
            PlacementMode::None => {
                self.ui.selected = None;
                Vec::new()
            }
            PlacementMode::Badge => {
                let props = serde_json::json!({ "label": "Event" });
                self.place(ItemKind::Badge, props, point)
            }
            PlacementMode::StickyNote => {
                let props = serde_json::json!({ "text": "New Note", "color": "yellow" });
                self.place(ItemKind::StickyNote, props, point)
            }
            PlacementMode::Photo => {
                self.pending_photo = Some(point);
                tracing::debug!(x = point.x, y = point.y, "photo editor requested");
                vec![Action::PhotoEditorRequested { position: point }]
            }
        }
    }

    /// Create the photo strip the editor was opened for.
    pub fn commit_photo(&mut self, images: Vec<String>) -> Vec<Action> {
        let Some(point) = self.pending_photo.take() else {
            return Vec::new();
        };
        let props = serde_json::json!({ "images": images });
        self.place(ItemKind::PhotoStrip, props, point)
    }

    /// Close the photo editor without creating anything.
    pub fn cancel_photo(&mut self) {
        self.pending_photo = None;
        self.ui.placement = PlacementMode::None;
    }

    fn place(&mut self, kind: ItemKind, props: serde_json::Value, point: Point) -> Vec<Action> {
        let created = self.store.create(kind, props, Some(point));
        self.ui.placement = PlacementMode::None;
        created
            .and_then(|id| self.store.get(id).cloned())
            .map(Action::ItemCreated)
            .into_iter()
            .collect()
    }

    // --- Dragging ---

    /// Begin dragging `id` with `pointer`. Refused in view mode, while a
    /// placement is pending, and for items already held.
    pub fn on_drag_start(&mut self, pointer: PointerId, id: ItemId) -> bool {
        if !self.ui.drag_enabled() {
            return false;
        }
        let Some(origin) = self.resolved_position(id) else {
            return false;
        };
        self.drags.begin(pointer, id, origin)
    }

    pub fn on_drag_move(&mut self, pointer: PointerId, delta: Point) -> Vec<Action> {
        if !self.ui.drag_enabled() {
            return Vec::new();
        }
        self.drags
            .drag(pointer, delta, &mut self.store)
            .map(|(id, pos)| Action::ItemUpdated { id, x: pos.x, y: pos.y })
            .into_iter()
            .collect()
    }

    pub fn on_drag_end(&mut self, pointer: PointerId) -> Vec<Action> {
        if !self.ui.drag_enabled() {
            self.drags.cancel(pointer);
            return Vec::new();
        }
        self.drags
            .end(pointer, &mut self.store)
            .map(|(id, pos)| Action::ItemUpdated { id, x: pos.x, y: pos.y })
            .into_iter()
            .collect()
    }

    pub fn on_drag_cancel(&mut self, pointer: PointerId) {
        self.drags.cancel(pointer);
    }

    // --- Decoration / attention ---

    /// Apply `decoration`, or clear it if it is already the active one.
    pub fn toggle_decoration(&mut self, id: ItemId, decoration: Decoration) -> Vec<Action> {
        let Some(item) = self.store.get(id) else {
            return Vec::new();
        };
        let next = if item.decoration == decoration { Decoration::None } else { decoration };
        self.store.set_decoration(id, next);
        tracing::debug!(id, ?next, "decoration changed");
        vec![Action::DecorationChanged { id, decoration: next }]
    }

    pub fn set_hovered(&mut self, id: Option<ItemId>) {
        self.ui.hovered = id.filter(|id| self.store.contains(*id));
    }

    /// Open (or close, with `None`) an item's detail overlay. Selecting an
    /// item also makes it the most prominent.
    pub fn select(&mut self, id: Option<ItemId>) {
        let id = id.filter(|id| self.store.contains(*id));
        if let Some(id) = id {
            self.store.promote(id);
        }
        self.ui.selected = id;
    }

    /// Highlight `id`'s relations, or stop highlighting if it already is.
    pub fn toggle_focus(&mut self, id: ItemId) {
        if self.ui.focused == Some(id) {
            self.ui.focused = None;
        } else if self.store.contains(id) {
            self.ui.focused = Some(id);
        }
    }

    /// Switch between edit mode and view mode. Leaving edit mode abandons
    /// in-flight drags.
    pub fn set_edit_mode(&mut self, edit: bool) {
        self.ui.edit_mode = edit;
        if !edit {
            self.drags.cancel_all();
        }
    }

    // --- Viewport ---

    pub fn set_viewport(&mut self, scroll_offset: f64, width: f64, height: f64) {
        self.viewport = Viewport::new(scroll_offset, width, height);
    }

    pub fn set_board_width(&mut self, width: f64) {
        self.store.set_board_width(width);
    }

    // --- Queries ---

    #[must_use]
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams { seed: self.seed, board_width: self.store.board_width() }
    }

    /// Resolved position and rotation of every item, in store order.
    #[must_use]
    pub fn placements(&self) -> Vec<Placement> {
        layout(self.store.list(), &self.layout_params())
    }

    /// Everything to draw for the current viewport.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let dragging: Vec<ItemId> = self.drags.dragged_items().collect();
        build_scene(self.store.list(), &self.ui, &self.viewport, &self.layout_params(), &dragging)
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    /// Stored position, or the derived one for an unplaced item.
    #[must_use]
    pub fn resolved_position(&self, id: ItemId) -> Option<Point> {
        let item = self.store.get(id)?;
        if let Some(p) = item.position() {
            return Some(p);
        }
        self.placements().into_iter().find(|p| p.id == id).map(|p| p.position())
    }

    /// Persist a derived position so it no longer moves with the layout.
    pub fn pin_position(&mut self, id: ItemId) -> Vec<Action> {
        let Some(pos) = self.resolved_position(id) else {
            return Vec::new();
        };
        if !self.store.update(id, &PartialTransform::position(pos)) {
            return Vec::new();
        }
        self.store
            .get(id)
            .and_then(Item::position)
            .map(|p| Action::ItemUpdated { id, x: p.x, y: p.y })
            .into_iter()
            .collect()
    }
}
