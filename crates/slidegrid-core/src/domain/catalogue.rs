//! Built-in layout presets.
//!
//! The layout picker offers a fixed catalogue of presets.  A preset may carry
//! default images keyed by area id; when a slide switches to that preset with
//! no content of its own, the defaults seed its content slots.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::cell::LayoutCell;
use crate::parser::parse_layout_description;

/// `(title, subtitle, layout, group)` of each built-in preset.
const BUILTIN_PRESETS: [(&str, &str, &str, &str); 6] = [
    ("Single column", "Full-bleed display", "1S|100/1R|100", "Standard"),
    ("Two columns", "Balanced 60/40", "2S|60:40/1R:100/1R:100", "Standard"),
    (
        "Three columns",
        "Sidebars left and right",
        "3S|20:60:20/1R:100/1R:100/1R:100",
        "Standard",
    ),
    (
        "Presenter panel",
        "Wide stage with four slots",
        "2S|75:25/1R|100/4R|25:25:25:25",
        "Show",
    ),
    (
        "Focus 3-1-3",
        "Central stage with sidebars",
        "3S|20:60:20/2R|50:50/1R|100/2R|50:50",
        "Show",
    ),
    (
        "Matrix 3-1-3",
        "Three columns with 3/1/3 rows",
        "3S|12.5:75:12.5/3R|34:33:33/1R|100/3R|34:33:33",
        "Show",
    ),
];

/// A layout preset offered in the layout picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Display name.
    pub title: String,
    /// One-line description shown under the title.
    pub subtitle: String,
    /// Layout description string.
    pub layout: String,
    /// Picker group the preset is listed under.
    pub group: String,
    /// Optional preview image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PathBuf>,
    /// Default media path per area id.
    #[serde(default)]
    pub images: BTreeMap<u32, String>,
}

impl LayoutItem {
    /// Creates a preset with no preview and no default images.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        layout: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            layout: layout.into(),
            group: group.into(),
            preview: None,
            images: BTreeMap::new(),
        }
    }

    /// Resolves the preset's layout description.
    pub fn cells(&self) -> Vec<LayoutCell> {
        parse_layout_description(&self.layout)
    }
}

/// Returns the built-in presets in picker order.
pub fn builtin_presets() -> Vec<LayoutItem> {
    BUILTIN_PRESETS
        .iter()
        .map(|&(title, subtitle, layout, group)| LayoutItem::new(title, subtitle, layout, group))
        .collect()
}

/// Finds the first preset whose description equals `layout` exactly.
pub fn find_preset<'a>(items: &'a [LayoutItem], layout: &str) -> Option<&'a LayoutItem> {
    items.iter().find(|item| item.layout == layout)
}

/// Returns a copy of the default images of the preset matching `layout`.
///
/// Unknown layouts have no defaults and yield an empty map.
pub fn default_images_for_layout(items: &[LayoutItem], layout: &str) -> BTreeMap<u32, String> {
    find_preset(items, layout)
        .map(|item| item.images.clone())
        .unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
