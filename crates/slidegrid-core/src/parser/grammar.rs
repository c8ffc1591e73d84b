//! Layout description grammar.
//!
//! ```text
//! <header> "/" <row-segment> "/" <row-segment> ...
//!
//! header       = <N> "S|" <ratios>            e.g. "3S|20:60:20"
//! row-segment  = <M> "R|" <ratio-specs>       e.g. "2R|50:50"
//!              | <M> "R:" <ratio-specs>       legacy form, e.g. "1R:100"
//! ```
//!
//! Row segments are assigned to columns left to right.  Segments beyond the
//! declared column count are ignored; columns without a segment get a single
//! full-height row.

use super::ratio::{parse_ratio_specs, parse_ratios, RatioSpec};
use super::LayoutError;

/// Suffix of the column count token in the header.
const COLUMN_SUFFIX: char = 'S';

/// Suffix of the row count token in a row segment.
const ROW_SUFFIX: char = 'R';

/// A syntactically valid layout, before geometry is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGrid {
    /// Normalized column widths, one per declared column.
    pub column_widths: Vec<f64>,
    /// Row specs per column.  Empty when the description had no segment for
    /// that column.
    pub rows: Vec<Vec<RatioSpec>>,
}

/// Parses a trimmed, non-empty layout description.
///
/// Returns `Ok(None)` when the description contains only separators and
/// whitespace (e.g. `"//"`), which callers treat like an empty description.
///
/// # Errors
///
/// Returns the first [`LayoutError`] encountered; any error means the whole
/// description is unusable.
pub fn parse_grid(description: &str) -> Result<Option<LayoutGrid>, LayoutError> {
    let segments: Vec<&str> = description
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    let Some((header, row_segments)) = segments.split_first() else {
        return Ok(None);
    };

    let column_widths = parse_header(header)?;
    let column_count = column_widths.len();

    let mut rows = vec![Vec::new(); column_count];
    for (column, segment) in row_segments.iter().take(column_count).enumerate() {
        rows[column] = parse_row_segment(column, segment)?;
    }

    Ok(Some(LayoutGrid {
        column_widths,
        rows,
    }))
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Parses `"<N>S|<ratios>"` into `N` normalized column widths.
fn parse_header(header: &str) -> Result<Vec<f64>, LayoutError> {
    let parts: Vec<&str> = header.split('|').map(str::trim).collect();
    if parts.len() < 2 {
        return Err(LayoutError::InvalidHeader(header.to_string()));
    }

    let declared = parse_count(parts[0], COLUMN_SUFFIX)
        .ok_or_else(|| LayoutError::InvalidColumnToken(parts[0].to_string()))?;
    if declared <= 0 {
        return Err(LayoutError::NonPositiveColumnCount(declared));
    }

    let widths = parse_ratios(parts[1])?;
    if widths.len() as i64 != declared {
        return Err(LayoutError::ColumnCountMismatch {
            declared: declared.unsigned_abs(),
            found: widths.len(),
        });
    }
    Ok(widths)
}

/// Parses one row segment in either the pipe or the legacy colon form.
fn parse_row_segment(column: usize, segment: &str) -> Result<Vec<RatioSpec>, LayoutError> {
    let parts: Vec<&str> = segment.split('|').map(str::trim).collect();
    let (rows_token, ratios_token) = if let [rows_token, ratios_token] = parts.as_slice() {
        (*rows_token, *ratios_token)
    } else {
        // Legacy form: the row count ends at the first colon.
        match segment.find(':') {
            Some(index) if index > 0 => (segment[..index].trim(), segment[index + 1..].trim()),
            _ => return Err(LayoutError::InvalidRowSegment(segment.to_string())),
        }
    };

    let declared = parse_count(rows_token, ROW_SUFFIX)
        .ok_or_else(|| LayoutError::InvalidRowToken(rows_token.to_string()))?;
    if declared <= 0 {
        return Err(LayoutError::NonPositiveRowCount(declared));
    }

    let specs = parse_ratio_specs(ratios_token)?;
    if specs.len() as i64 != declared {
        return Err(LayoutError::RowCountMismatch {
            column,
            declared: declared.unsigned_abs(),
            found: specs.len(),
        });
    }
    Ok(specs)
}

/// Parses a count token such as `"3S"`; the sign is checked by the caller.
fn parse_count(token: &str, suffix: char) -> Option<i64> {
    token.strip_suffix(suffix)?.trim().parse().ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(description: &str) -> LayoutGrid {
        parse_grid(description)
            .expect("description must parse")
            .expect("description must have segments")
    }

    // ── Header ────────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_grid_reads_column_widths() {
        let grid = grid("3S|20:60:20");
        assert_eq!(grid.column_widths.len(), 3);
        assert!((grid.column_widths[1] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_parse_grid_header_only_leaves_rows_empty() {
        let grid = grid("2S|30:*");
        assert_eq!(grid.rows, vec![Vec::new(), Vec::new()]);
    }

    #[test]
    fn test_parse_grid_only_separators_returns_none() {
        assert_eq!(parse_grid(" / / "), Ok(None));
    }

    #[test]
    fn test_parse_grid_rejects_header_without_pipe() {
        assert_eq!(
            parse_grid("3S:20:60:20"),
            Err(LayoutError::InvalidHeader("3S:20:60:20".to_string()))
        );
    }

    #[test]
    fn test_parse_grid_ignores_extra_header_parts() {
        let grid = grid("2S|50:50|ignored");
        assert_eq!(grid.column_widths.len(), 2);
    }

    #[test]
    fn test_parse_grid_rejects_column_token_without_suffix() {
        assert_eq!(
            parse_grid("3C|20:60:20"),
            Err(LayoutError::InvalidColumnToken("3C".to_string()))
        );
    }

    #[test]
    fn test_parse_grid_rejects_lowercase_column_suffix() {
        assert!(matches!(
            parse_grid("2s|50:50"),
            Err(LayoutError::InvalidColumnToken(_))
        ));
    }

    #[test]
    fn test_parse_grid_rejects_non_numeric_column_count() {
        assert!(matches!(
            parse_grid("xS|100"),
            Err(LayoutError::InvalidColumnToken(_))
        ));
    }

    #[test]
    fn test_parse_grid_rejects_zero_columns() {
        assert_eq!(
            parse_grid("0S|100/1R|100"),
            Err(LayoutError::NonPositiveColumnCount(0))
        );
    }

    #[test]
    fn test_parse_grid_rejects_negative_columns() {
        assert_eq!(
            parse_grid("-2S|50:50"),
            Err(LayoutError::NonPositiveColumnCount(-2))
        );
    }

    #[test]
    fn test_parse_grid_rejects_column_ratio_count_mismatch() {
        assert_eq!(
            parse_grid("3S|50:50"),
            Err(LayoutError::ColumnCountMismatch {
                declared: 3,
                found: 2
            })
        );
    }

    // ── Row segments ──────────────────────────────────────────────────────────

    #[test]
    fn test_parse_grid_reads_pipe_row_segments_in_column_order() {
        let grid = grid("2S|50:50/2R|25:75/1R|100");
        assert_eq!(grid.rows[0].len(), 2);
        assert_eq!(grid.rows[1].len(), 1);
        assert!((grid.rows[0][1].ratio - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_parse_grid_reads_legacy_colon_row_segments() {
        let grid = grid("2S|60:40/1R:100/2R:50:50");
        assert_eq!(grid.rows[0].len(), 1);
        assert_eq!(grid.rows[1].len(), 2);
    }

    #[test]
    fn test_parse_grid_ignores_segments_beyond_column_count() {
        let grid = grid("1S|100/1R|100/2R|50:50");
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0].len(), 1);
    }

    #[test]
    fn test_parse_grid_missing_row_segments_stay_empty() {
        let grid = grid("3S|20:60:20/2R|50:50");
        assert_eq!(grid.rows[0].len(), 2);
        assert!(grid.rows[1].is_empty());
        assert!(grid.rows[2].is_empty());
    }

    #[test]
    fn test_parse_grid_rejects_row_segment_without_separator() {
        assert_eq!(
            parse_grid("1S|100/1R100"),
            Err(LayoutError::InvalidRowSegment("1R100".to_string()))
        );
    }

    #[test]
    fn test_parse_grid_rejects_row_segment_starting_with_colon() {
        assert!(matches!(
            parse_grid("1S|100/:100"),
            Err(LayoutError::InvalidRowSegment(_))
        ));
    }

    #[test]
    fn test_parse_grid_falls_back_to_colon_when_pipe_count_is_not_two() {
        // Three pipe parts select the legacy form, and there is no colon to split on.
        assert!(matches!(
            parse_grid("1S|100/1R|100|x"),
            Err(LayoutError::InvalidRowSegment(_))
        ));
    }

    #[test]
    fn test_parse_grid_rejects_row_token_without_suffix() {
        assert_eq!(
            parse_grid("1S|100/1X|100"),
            Err(LayoutError::InvalidRowToken("1X".to_string()))
        );
    }

    #[test]
    fn test_parse_grid_rejects_zero_rows() {
        assert_eq!(
            parse_grid("1S|100/0R|100"),
            Err(LayoutError::NonPositiveRowCount(0))
        );
    }

    #[test]
    fn test_parse_grid_rejects_row_ratio_count_mismatch() {
        assert_eq!(
            parse_grid("2S|50:50/1R|100/3R|50:50"),
            Err(LayoutError::RowCountMismatch {
                column: 1,
                declared: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_grid_keeps_explicit_row_ids() {
        let grid = grid("1S|100/2R|50#4:50");
        assert_eq!(grid.rows[0][0].area_id, Some(4));
        assert_eq!(grid.rows[0][1].area_id, None);
    }
}
