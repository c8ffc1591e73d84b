//! # slidegrid-core
//!
//! Shared library for slide layouts: the layout description parser, the
//! geometry resolver that turns a description into normalized regions, the
//! built-in preset catalogue, and the per-area content slots stored with each
//! slide.
//!
//! This crate performs no I/O and holds no global state.  Every parse call
//! allocates and returns fresh data, so it can be used from any thread.
//!
//! # Architecture overview (for beginners)
//!
//! A slide is divided into rectangular *areas*.  The arrangement is stored as
//! a compact string such as `"3S|20:60:20/2R|50:50/1R|100/2R|50:50"`: three
//! columns at 20 %, 60 % and 20 % width, where the outer columns are split
//! into two rows each.
//!
//! - **`parser`** – Reads a layout description and resolves it into a flat
//!   list of [`LayoutCell`]s in the unit square, each with a stable positive
//!   area id.  Malformed input never fails the caller: it degrades to a
//!   single full-bleed cell.
//!
//! - **`domain`** – The value types built on top of the parser: the cell type
//!   itself, the preset catalogue shown in the layout picker, and the content
//!   slots that map area ids to media paths.

pub mod domain;
pub mod parser;

// Re-export the most-used items at the crate root so callers can write
// `slidegrid_core::parse_layout_description` instead of the full path.
pub use domain::catalogue::{builtin_presets, default_images_for_layout, find_preset, LayoutItem};
pub use domain::cell::{find_cell, hit_test, LayoutCell};
pub use domain::slots::{
    content_to_images, images_to_content, SlideLayoutPayload, SlotError, MAX_CONTENT_SLOTS,
};
pub use parser::{parse_layout_description, try_parse_layout_description, LayoutError};
