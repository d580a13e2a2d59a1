//! Layout and spatial-interaction engine for a sticker wall.
//!
//! A sticker wall is a tall, vertically scrolling board covered in items
//! (badges, sticky notes, photo strips and a few decorative pieces) that sit
//! slightly tilted, can be dragged around, and overlap by recency. This crate
//! owns the state and the geometry: it decides where unplaced items go, keeps
//! every stored position inside the board, tracks drags, culls what is off
//! screen and works out stacking and relation highlighting. Drawing is left
//! to the host, which consumes [`scene::Scene`] records and persists the
//! [`engine::Action`]s the engine returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Input-driven facade, [`engine::EngineCore`] |
//! | [`doc`] | Item types and the in-memory [`doc::ItemStore`] |
//! | [`layout`] | Deterministic placement of unplaced items |
//! | [`prng`] | Seeded sequence generator and ambient rotation |
//! | [`drag`] | Pointer-keyed drag sessions with live clamping |
//! | [`cull`] | Viewport visibility tests and list virtualization |
//! | [`order`] | Draw order, interaction band, relation dimming |
//! | [`scene`] | Per-frame records for the presentation layer |
//! | [`input`] | Placement mode and UI attention state |
//! | [`geom`] | Points, board bounds and the viewport |
//! | [`consts`] | Shared numeric constants (footprints, spacing, buffers) |

pub mod consts;
pub mod cull;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod geom;
pub mod input;
pub mod layout;
pub mod order;
pub mod prng;
pub mod scene;
