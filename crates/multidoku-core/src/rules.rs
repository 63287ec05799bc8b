//! Row/column/sub-block uniqueness rules.
//!
//! Two views of the same constraint: [`fits`] answers "may this value go
//! here" during search, and [`conflicts`] reports every cell currently
//! violating a rule for display purposes. Both are pure functions of the
//! grid; nothing is cached between calls.

use crate::{Grid, Position};
use std::collections::HashSet;

/// Whether `value` may be placed at `pos` without duplicating a value in the
/// same row, column, or sub-block.
///
/// The cell at `pos` itself is not examined; callers place only into empty
/// cells, so an existing value there would be a caller bug.
pub fn fits(grid: &Grid, pos: Position, value: u8) -> bool {
    let info = grid.info();

    for col in 0..info.cols {
        if col != pos.col && grid.get(Position::new(pos.row, col)) == Some(value) {
            return false;
        }
    }

    for row in 0..info.rows {
        if row != pos.row && grid.get(Position::new(row, pos.col)) == Some(value) {
            return false;
        }
    }

    // Sub-block tiling is anchored at (0, 0).
    let block_row = pos.row - pos.row % info.sub_rows;
    let block_col = pos.col - pos.col % info.sub_cols;
    for row in block_row..block_row + info.sub_rows {
        for col in block_col..block_col + info.sub_cols {
            if (row, col) != (pos.row, pos.col) && grid.get(Position::new(row, col)) == Some(value)
            {
                return false;
            }
        }
    }

    true
}

/// All positions currently violating a row, column, or sub-block constraint.
///
/// Each unit is scanned independently; every filled cell sharing its value
/// with another cell in the same unit is flagged, and the result is the union
/// over all units. Recomputed from scratch on every call — intended for live
/// conflict highlighting, not for search (which uses [`fits`]).
pub fn conflicts(grid: &Grid) -> HashSet<Position> {
    let info = grid.info();
    let mut out = HashSet::new();

    for row in 0..info.rows {
        let cells = (0..info.cols).map(|col| Position::new(row, col));
        mark_duplicates(grid, cells, &mut out);
    }

    for col in 0..info.cols {
        let cells = (0..info.rows).map(|row| Position::new(row, col));
        mark_duplicates(grid, cells, &mut out);
    }

    for block_row in (0..info.rows).step_by(info.sub_rows) {
        for block_col in (0..info.cols).step_by(info.sub_cols) {
            let cells = (block_row..block_row + info.sub_rows).flat_map(move |row| {
                (block_col..block_col + info.sub_cols).map(move |col| Position::new(row, col))
            });
            mark_duplicates(grid, cells, &mut out);
        }
    }

    out
}

/// Group the filled cells of one unit by value and flag every cell whose
/// value occurs more than once.
fn mark_duplicates(
    grid: &Grid,
    cells: impl Iterator<Item = Position>,
    out: &mut HashSet<Position>,
) {
    let max_val = grid.info().max_val as usize;
    let mut by_value: Vec<Vec<Position>> = vec![Vec::new(); max_val + 1];

    for pos in cells {
        if let Some(value) = grid.get(pos) {
            by_value[value as usize].push(pos);
        }
    }

    for group in by_value {
        if group.len() > 1 {
            out.extend(group);
        }
    }
}
