//! Per-area content slots of a slide.
//!
//! A slide stores its layout as a [`SlideLayoutPayload`]: the active layout
//! description plus a dense `content` list where index `i` holds the media
//! path shown in area id `i + 1`.  An empty string marks an empty slot.
//!
//! The same assignments are often easier to work with as a sparse map from
//! area id to path; [`content_to_images`] and [`images_to_content`] convert
//! between the two shapes.
//!
//! Area ids can be pinned to any `u32`, but the dense list only holds
//! [`MAX_CONTENT_SLOTS`] entries.  Ids above that never get a slot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::cell::LayoutCell;
use crate::parser::parse_layout_description;

/// Highest area id that can hold content.
pub const MAX_CONTENT_SLOTS: u32 = 1024;

/// Errors that can occur when editing content slots.
#[derive(Debug, Error, PartialEq)]
pub enum SlotError {
    /// Area ids start at 1.
    #[error("invalid area id {0}: area ids start at 1")]
    InvalidArea(u32),

    /// The active layout has no area with this id.
    #[error("layout {layout:?} has no area {area_id}")]
    UnknownArea { area_id: u32, layout: String },

    /// The area exists but is beyond the content list bound.
    #[error("area id {0} exceeds the content slot limit of {max}", max = MAX_CONTENT_SLOTS)]
    AreaOutOfRange(u32),
}

/// The persisted `layout` payload of a slide.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlideLayoutPayload {
    /// Layout description currently applied to the slide.
    pub active_layout: String,
    /// Rendered thumbnail, if one has been generated.
    #[serde(default)]
    pub thumbnail_url: String,
    /// Media path per area, `content[i]` belongs to area id `i + 1`.
    #[serde(default)]
    pub content: Vec<String>,
}

impl SlideLayoutPayload {
    /// Creates a payload for `layout` with no content.
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            active_layout: layout.into(),
            ..Self::default()
        }
    }

    /// Resolves the active layout.
    pub fn cells(&self) -> Vec<LayoutCell> {
        parse_layout_description(&self.active_layout)
    }

    /// Returns the non-empty slots keyed by area id.
    pub fn images(&self) -> BTreeMap<u32, String> {
        content_to_images(&self.content)
    }

    /// Puts `source` into the slot for `area_id`, growing the content list
    /// with empty slots as needed.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidArea`] if `area_id` is 0,
    /// [`SlotError::UnknownArea`] if the active layout has no such area, and
    /// [`SlotError::AreaOutOfRange`] if `area_id` is above
    /// [`MAX_CONTENT_SLOTS`].
    pub fn assign_area(
        &mut self,
        area_id: u32,
        source: impl Into<String>,
    ) -> Result<BTreeMap<u32, String>, SlotError> {
        if area_id == 0 {
            return Err(SlotError::InvalidArea(area_id));
        }
        if !self.cells().iter().any(|cell| cell.area_id == area_id) {
            return Err(SlotError::UnknownArea {
                area_id,
                layout: self.active_layout.clone(),
            });
        }
        if area_id > MAX_CONTENT_SLOTS {
            return Err(SlotError::AreaOutOfRange(area_id));
        }
        let index = (area_id - 1) as usize;
        if self.content.len() <= index {
            self.content.resize(index + 1, String::new());
        }
        self.content[index] = source.into();
        Ok(self.images())
    }

    /// Switches to `layout`.
    ///
    /// Existing content is kept.  When the slide has no content yet, it is
    /// seeded from `defaults` (typically the preset's default images).
    pub fn set_layout(
        &mut self,
        layout: impl Into<String>,
        defaults: &BTreeMap<u32, String>,
    ) -> BTreeMap<u32, String> {
        self.active_layout = layout.into();
        if self.content.is_empty() {
            self.content = images_to_content(defaults);
        }
        self.images()
    }
}

/// Converts a dense content list into a map of non-empty slots.
pub fn content_to_images(content: &[String]) -> BTreeMap<u32, String> {
    content
        .iter()
        .zip(1u32..)
        .filter(|(path, _)| !path.is_empty())
        .map(|(path, area_id)| (area_id, path.clone()))
        .collect()
}

/// Converts a slot map into a dense content list.
///
/// The list is as long as the highest area id; missing areas become empty
/// strings.  Area id 0, ids above [`MAX_CONTENT_SLOTS`] and empty paths are
/// ignored.
pub fn images_to_content(images: &BTreeMap<u32, String>) -> Vec<String> {
    let slots = 1..=MAX_CONTENT_SLOTS;
    let Some(max_area) = images.keys().copied().filter(|id| slots.contains(id)).max() else {
        return Vec::new();
    };
    let mut content = vec![String::new(); max_area as usize];
    for (&area_id, path) in images {
        if area_id > MAX_CONTENT_SLOTS {
            debug!("dropping image for area {area_id}: beyond slot limit");
            continue;
        }
        if area_id == 0 || path.is_empty() {
            continue;
        }
        content[(area_id - 1) as usize] = path.clone();
    }
    content
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(u32, &str)]) -> BTreeMap<u32, String> {
        entries
            .iter()
            .map(|&(id, path)| (id, path.to_string()))
            .collect()
    }

    // ── content_to_images / images_to_content ─────────────────────────────────

    #[test]
    fn test_content_to_images_numbers_from_one_and_skips_empty() {
        let content = vec!["a.png".to_string(), String::new(), "c.png".to_string()];
        assert_eq!(content_to_images(&content), map(&[(1, "a.png"), (3, "c.png")]));
    }

    #[test]
    fn test_images_to_content_fills_gaps_with_empty_slots() {
        let content = images_to_content(&map(&[(1, "a.png"), (3, "c.png")]));
        assert_eq!(content, vec!["a.png", "", "c.png"]);
    }

    #[test]
    fn test_images_to_content_ignores_area_zero() {
        let content = images_to_content(&map(&[(0, "zero.png"), (2, "b.png")]));
        assert_eq!(content, vec!["", "b.png"]);
    }

    #[test]
    fn test_images_to_content_empty_map_gives_empty_list() {
        assert!(images_to_content(&BTreeMap::new()).is_empty());
        assert!(images_to_content(&map(&[(0, "zero.png")])).is_empty());
    }

    #[test]
    fn test_images_to_content_drops_ids_beyond_slot_limit() {
        let content = images_to_content(&map(&[(2, "b.png"), (u32::MAX, "huge.png")]));
        assert_eq!(content, vec!["", "b.png"]);
    }

    // ── assign_area ───────────────────────────────────────────────────────────

    #[test]
    fn test_assign_area_grows_content() {
        let mut payload = SlideLayoutPayload::new("3S|20:60:20");

        let images = payload.assign_area(3, "media/right.png").unwrap();

        assert_eq!(payload.content, vec!["", "", "media/right.png"]);
        assert_eq!(images, map(&[(3, "media/right.png")]));
    }

    #[test]
    fn test_assign_area_replaces_existing_slot() {
        let mut payload = SlideLayoutPayload::new("1S|100");
        payload.assign_area(1, "old.png").unwrap();

        payload.assign_area(1, "new.png").unwrap();

        assert_eq!(payload.content, vec!["new.png"]);
    }

    #[test]
    fn test_assign_area_rejects_zero() {
        let mut payload = SlideLayoutPayload::new("1S|100");
        assert_eq!(payload.assign_area(0, "x.png"), Err(SlotError::InvalidArea(0)));
        assert!(payload.content.is_empty());
    }

    #[test]
    fn test_assign_area_rejects_id_missing_from_layout() {
        let mut payload = SlideLayoutPayload::new("2S|50:50");

        let result = payload.assign_area(3, "x.png");

        assert_eq!(
            result,
            Err(SlotError::UnknownArea {
                area_id: 3,
                layout: "2S|50:50".to_string()
            })
        );
        assert!(payload.content.is_empty());
    }

    #[test]
    fn test_assign_area_rejects_huge_pinned_id_without_allocating() {
        // Arrange: a valid layout whose only area is pinned to u32::MAX.
        let mut payload = SlideLayoutPayload::new("1S|100/1R|100#4294967295");
        assert_eq!(payload.cells()[0].area_id, u32::MAX);

        // Act
        let result = payload.assign_area(u32::MAX, "a.png");

        // Assert
        assert_eq!(result, Err(SlotError::AreaOutOfRange(u32::MAX)));
        assert!(payload.content.is_empty());
    }

    #[test]
    fn test_assign_area_accepts_pinned_id_within_limit() {
        let mut payload = SlideLayoutPayload::new("2S|50:50/1R|100#40/1R|100");

        payload.assign_area(40, "pinned.png").unwrap();

        assert_eq!(payload.content.len(), 40);
        assert_eq!(payload.images(), map(&[(40, "pinned.png")]));
    }

    // ── set_layout ────────────────────────────────────────────────────────────

    #[test]
    fn test_set_layout_seeds_empty_content_from_defaults() {
        let mut payload = SlideLayoutPayload::new("1S|100/1R|100");

        let images = payload.set_layout("2S|60:40/1R:100/1R:100", &map(&[(2, "side.png")]));

        assert_eq!(payload.active_layout, "2S|60:40/1R:100/1R:100");
        assert_eq!(payload.content, vec!["", "side.png"]);
        assert_eq!(images, map(&[(2, "side.png")]));
    }

    #[test]
    fn test_set_layout_keeps_existing_content() {
        let mut payload = SlideLayoutPayload::new("1S|100/1R|100");
        payload.assign_area(1, "mine.png").unwrap();

        payload.set_layout("2S|50:50", &map(&[(1, "default.png")]));

        assert_eq!(payload.content, vec!["mine.png"]);
    }

    #[test]
    fn test_cells_resolve_active_layout() {
        let payload = SlideLayoutPayload::new("2S|50:50");
        assert_eq!(payload.cells().len(), 2);
    }

    // ── Persisted shape ───────────────────────────────────────────────────────

    #[test]
    fn test_payload_deserializes_with_missing_optional_fields() {
        let json = r#"{ "active_layout": "1S|100/1R|100" }"#;

        let payload: SlideLayoutPayload = serde_json::from_str(json).expect("deserialize");

        assert_eq!(payload.active_layout, "1S|100/1R|100");
        assert!(payload.thumbnail_url.is_empty());
        assert!(payload.content.is_empty());
    }

    #[test]
    fn test_payload_serializes_field_names() {
        let mut payload = SlideLayoutPayload::new("1S|100");
        payload.assign_area(1, "a.png").unwrap();

        let value = serde_json::to_value(&payload).expect("serialize");

        assert_eq!(value["active_layout"], "1S|100");
        assert_eq!(value["content"][0], "a.png");
        assert_eq!(value["thumbnail_url"], "");
    }
}
