//! Resolved layout region.
//!
//! A [`LayoutCell`] is one axis-aligned rectangle of a parsed layout, expressed
//! in the normalized unit square: `(0, 0)` is the top-left corner of the slide
//! and `(1, 1)` the bottom-right.  Renderers scale these values to pixels.

use serde::{Deserialize, Serialize};

/// One rectangular region of a parsed layout.
///
/// Within a single parse result every `area_id` is positive and unique.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutCell {
    /// X coordinate of the top-left corner (0.0–1.0).
    pub x: f64,
    /// Y coordinate of the top-left corner (0.0–1.0).
    pub y: f64,
    /// Width as a fraction of the slide width.
    pub width: f64,
    /// Height as a fraction of the slide height.
    pub height: f64,
    /// Stable identifier of the area within its layout.
    pub area_id: u32,
}

impl LayoutCell {
    /// Creates a cell.
    pub const fn new(x: f64, y: f64, width: f64, height: f64, area_id: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            area_id,
        }
    }

    /// The single region covering the whole slide, area id 1.
    pub const fn full_bleed() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0, 1)
    }

    /// Returns `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the right edge (exclusive).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottom edge (exclusive).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns `true` if the normalized point lies inside this cell.
    ///
    /// The left and top edges are inclusive, the right and bottom edges
    /// exclusive, so a point on a shared border belongs to exactly one cell.
    pub fn contains(&self, nx: f64, ny: f64) -> bool {
        nx >= self.x && nx < self.right() && ny >= self.y && ny < self.bottom()
    }
}

/// Returns the area id of the first cell containing the normalized point.
///
/// Cells are searched in flattening order.  Returns `None` when the point is
/// outside every cell (including anything outside the unit square).
pub fn hit_test(cells: &[LayoutCell], nx: f64, ny: f64) -> Option<u32> {
    cells
        .iter()
        .find(|cell| cell.contains(nx, ny))
        .map(|cell| cell.area_id)
}

/// Looks up the cell with the given area id.
pub fn find_cell(cells: &[LayoutCell], area_id: u32) -> Option<&LayoutCell> {
    cells.iter().find(|cell| cell.area_id == area_id)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
