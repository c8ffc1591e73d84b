//! Layout description parser and geometry resolver.
//!
//! Two entry points share the same grammar and geometry:
//!
//! - [`parse_layout_description`] never fails.  Empty or malformed input
//!   yields the single full-bleed cell, so a corrupted or hand-edited
//!   description can never break slide rendering.
//! - [`try_parse_layout_description`] returns the reason a description was
//!   rejected, for editors and diagnostics.

pub mod grammar;
pub mod ratio;
pub mod resolve;

use thiserror::Error;
use tracing::debug;

use crate::domain::cell::LayoutCell;

pub use ratio::RatioSpec;

/// Reasons a layout description is rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LayoutError {
    /// The header segment does not have the `<N>S|<ratios>` shape.
    #[error("invalid header {0:?}: expected \"<N>S|<ratios>\"")]
    InvalidHeader(String),

    /// The column count token does not end in `S` or is not an integer.
    #[error("invalid column count token {0:?}")]
    InvalidColumnToken(String),

    /// The header declares zero or fewer columns.
    #[error("column count must be positive, got {0}")]
    NonPositiveColumnCount(i64),

    /// The number of column widths differs from the declared column count.
    #[error("header declares {declared} columns but lists {found} widths")]
    ColumnCountMismatch { declared: u64, found: usize },

    /// A row segment has neither the pipe form nor a usable legacy colon.
    #[error("invalid row segment {0:?}")]
    InvalidRowSegment(String),

    /// The row count token does not end in `R` or is not an integer.
    #[error("invalid row count token {0:?}")]
    InvalidRowToken(String),

    /// A row segment declares zero or fewer rows.
    #[error("row count must be positive, got {0}")]
    NonPositiveRowCount(i64),

    /// The number of row heights differs from the declared row count.
    #[error("column {column} declares {declared} rows but lists {found} heights")]
    RowCountMismatch {
        column: usize,
        declared: u64,
        found: usize,
    },

    /// A ratio component is neither `*` nor a finite number.
    #[error("invalid ratio {0:?}")]
    InvalidRatio(String),

    /// The text after `#` is not an integer area id.
    #[error("invalid area id {0:?}")]
    InvalidAreaId(String),

    /// A wildcard component carries an explicit area id.
    #[error("wildcard cannot carry an area id: {0:?}")]
    WildcardWithAreaId(String),

    /// A ratio list resolves to a total of zero or less.
    #[error("ratios {0:?} do not add up to a positive total")]
    NonPositiveTotal(String),
}

/// Parses a layout description into cells, falling back to a single
/// full-bleed cell when the description is empty or malformed.
///
/// The result is never empty and every `area_id` in it is positive and
/// unique.
///
/// # Examples
///
/// ```rust
/// use slidegrid_core::{parse_layout_description, LayoutCell};
///
/// let cells = parse_layout_description("2S|60:40/1R:100/1R:100");
/// assert_eq!(cells.len(), 2);
///
/// let fallback = parse_layout_description("not a layout");
/// assert_eq!(fallback, vec![LayoutCell::full_bleed()]);
/// ```
pub fn parse_layout_description(description: &str) -> Vec<LayoutCell> {
    match try_parse_layout_description(description) {
        Ok(cells) => cells,
        Err(e) => {
            debug!("layout description {description:?} rejected ({e}); using full-bleed cell");
            vec![LayoutCell::full_bleed()]
        }
    }
}

/// Parses a layout description, reporting why it was rejected.
///
/// Empty or whitespace-only descriptions, and descriptions made only of `/`
/// separators, are valid and resolve to the full-bleed cell.  On success the
/// cells are identical to what [`parse_layout_description`] returns.
///
/// # Errors
///
/// Returns the first [`LayoutError`] found in the description.
///
/// # Examples
///
/// ```rust
/// use slidegrid_core::{try_parse_layout_description, LayoutError};
///
/// let cells = try_parse_layout_description("2S|50:50/1R|100#5/1R|100").unwrap();
/// assert_eq!(cells[0].area_id, 5);
///
/// assert_eq!(
///     try_parse_layout_description("0S|100"),
///     Err(LayoutError::NonPositiveColumnCount(0))
/// );
/// ```
pub fn try_parse_layout_description(description: &str) -> Result<Vec<LayoutCell>, LayoutError> {
    let description = description.trim();
    if description.is_empty() {
        return Ok(vec![LayoutCell::full_bleed()]);
    }

    let Some(grid) = grammar::parse_grid(description)? else {
        return Ok(vec![LayoutCell::full_bleed()]);
    };

    let cells = resolve::resolve_cells(&grid);
    if cells.is_empty() {
        return Ok(vec![LayoutCell::full_bleed()]);
    }
    Ok(cells)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
