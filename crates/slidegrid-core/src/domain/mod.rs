//! Domain value types for slide layouts.
//!
//! - **`cell`** – One resolved rectangular region of a layout.
//! - **`catalogue`** – The built-in layout presets offered to the author.
//! - **`slots`** – The persisted per-area media assignments of a slide.

pub mod catalogue;
pub mod cell;
pub mod slots;
