//! Geometry flattening and area id assignment.
//!
//! Columns are laid out left to right and each column's rows top to bottom.
//! Every (column, row) pair with a positive extent becomes one
//! [`LayoutCell`].  Rows pinned with `#N` keep their id; the remaining cells
//! are numbered by descending area so the largest region gets the lowest
//! free id.

use std::collections::HashSet;

use tracing::trace;

use super::grammar::LayoutGrid;
use super::ratio::RatioSpec;
use crate::domain::cell::LayoutCell;

/// Marker for a cell that has not been given an area id yet.
const UNASSIGNED: u32 = 0;

/// Flattens a grid into cells and assigns every cell a unique positive id.
///
/// Returns an empty vector only when every column or row has a non-positive
/// extent.
pub fn resolve_cells(grid: &LayoutGrid) -> Vec<LayoutCell> {
    let mut cells = flatten(grid);
    assign_auto_ids(&mut cells);
    cells
}

/// Lays out the grid, leaving unpinned cells at [`UNASSIGNED`].
///
/// A pinned id that was already used by an earlier cell is dropped so the
/// later cell is numbered automatically.
fn flatten(grid: &LayoutGrid) -> Vec<LayoutCell> {
    let full_height = [RatioSpec::unpinned(1.0)];
    let mut cells = Vec::new();
    let mut pinned = HashSet::new();

    let mut x = 0.0;
    for (column, &width) in grid.column_widths.iter().enumerate() {
        if width <= 0.0 {
            continue;
        }
        let rows: &[RatioSpec] = match grid.rows.get(column) {
            Some(rows) if !rows.is_empty() => rows.as_slice(),
            _ => &full_height,
        };

        let mut y = 0.0;
        for spec in rows {
            if spec.ratio <= 0.0 {
                continue;
            }
            let area_id = match spec.area_id {
                Some(id) if pinned.insert(id) => id,
                Some(id) => {
                    trace!("area id {id} pinned twice, renumbering column {column} row at y={y}");
                    UNASSIGNED
                }
                None => UNASSIGNED,
            };
            cells.push(LayoutCell::new(x, y, width, spec.ratio, area_id));
            y += spec.ratio;
        }
        x += width;
    }
    cells
}

/// Numbers every [`UNASSIGNED`] cell with the smallest free positive id.
///
/// Cells are visited largest first.  The sort is stable, so cells of equal
/// area are numbered in flattening order.
fn assign_auto_ids(cells: &mut [LayoutCell]) {
    let mut used: HashSet<u32> = cells
        .iter()
        .map(|cell| cell.area_id)
        .filter(|&id| id != UNASSIGNED)
        .collect();

    let mut pending: Vec<usize> = (0..cells.len())
        .filter(|&index| cells[index].area_id == UNASSIGNED)
        .collect();
    pending.sort_by(|&a, &b| cells[b].area().total_cmp(&cells[a].area()));

    let mut candidate = 1;
    for index in pending {
        while used.contains(&candidate) {
            candidate += 1;
        }
        cells[index].area_id = candidate;
        used.insert(candidate);
        trace!("assigned area id {candidate} to cell {index}");
        candidate += 1;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn pinned(ratio: f64, id: u32) -> RatioSpec {
        RatioSpec {
            ratio,
            area_id: Some(id),
        }
    }

    fn ids(cells: &[LayoutCell]) -> Vec<u32> {
        cells.iter().map(|cell| cell.area_id).collect()
    }

    #[test]
    fn test_resolve_cells_defaults_missing_rows_to_full_height() {
        let grid = LayoutGrid {
            column_widths: vec![0.3, 0.7],
            rows: vec![Vec::new(), Vec::new()],
        };

        let cells = resolve_cells(&grid);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].height, 1.0);
        assert_eq!(cells[1].x, 0.3);
        assert_eq!(cells[1].height, 1.0);
    }

    #[test]
    fn test_resolve_cells_advances_y_within_column() {
        let grid = LayoutGrid {
            column_widths: vec![1.0],
            rows: vec![vec![RatioSpec::unpinned(0.25), RatioSpec::unpinned(0.75)]],
        };

        let cells = resolve_cells(&grid);

        assert_eq!(cells[0].y, 0.0);
        assert_eq!(cells[1].y, 0.25);
    }

    #[test]
    fn test_resolve_cells_skips_zero_width_column_without_advancing_x() {
        let grid = LayoutGrid {
            column_widths: vec![0.0, 1.0],
            rows: vec![Vec::new(), Vec::new()],
        };

        let cells = resolve_cells(&grid);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].x, 0.0);
    }

    #[test]
    fn test_resolve_cells_skips_zero_height_row() {
        let grid = LayoutGrid {
            column_widths: vec![1.0],
            rows: vec![vec![RatioSpec::unpinned(0.0), RatioSpec::unpinned(1.0)]],
        };

        let cells = resolve_cells(&grid);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].y, 0.0);
    }

    #[test]
    fn test_resolve_cells_largest_area_gets_lowest_id() {
        // Column 0: 0.2 wide, column 1: 0.8 wide – flattened order is small first.
        let grid = LayoutGrid {
            column_widths: vec![0.2, 0.8],
            rows: vec![Vec::new(), Vec::new()],
        };

        let cells = resolve_cells(&grid);

        assert_eq!(ids(&cells), vec![2, 1]);
    }

    #[test]
    fn test_resolve_cells_equal_areas_keep_flattening_order() {
        let grid = LayoutGrid {
            column_widths: vec![0.5, 0.5],
            rows: vec![
                vec![RatioSpec::unpinned(0.5), RatioSpec::unpinned(0.5)],
                vec![RatioSpec::unpinned(0.5), RatioSpec::unpinned(0.5)],
            ],
        };

        let cells = resolve_cells(&grid);

        assert_eq!(ids(&cells), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_resolve_cells_auto_ids_skip_pinned_ids() {
        let grid = LayoutGrid {
            column_widths: vec![0.5, 0.5],
            rows: vec![
                vec![pinned(0.5, 1), RatioSpec::unpinned(0.5)],
                vec![pinned(0.5, 3), RatioSpec::unpinned(0.5)],
            ],
        };

        let cells = resolve_cells(&grid);

        assert_eq!(ids(&cells), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_resolve_cells_duplicate_pin_is_renumbered() {
        let grid = LayoutGrid {
            column_widths: vec![0.5, 0.5],
            rows: vec![vec![pinned(1.0, 5)], vec![pinned(1.0, 5)]],
        };

        let cells = resolve_cells(&grid);

        assert_eq!(ids(&cells), vec![5, 1]);
    }

    #[test]
    fn test_resolve_cells_returns_empty_when_nothing_has_extent() {
        let grid = LayoutGrid {
            column_widths: vec![0.0],
            rows: vec![Vec::new()],
        };

        assert!(resolve_cells(&grid).is_empty());
    }
}
