use crate::{GridInfo, GridSize};
use serde::{Deserialize, Serialize};

/// A cell coordinate, 0-indexed, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A square Sudoku board.
///
/// Cells are stored row-major as `Option<u8>`: `None` is an empty cell,
/// `Some(v)` holds a value in `1..=max_val`. The grid carries its own
/// [`GridInfo`] so every operation knows the sub-block tiling without a
/// separate geometry argument. Dimensions are fixed at creation; solving and
/// generation mutate cells in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Option<u8>>,
    info: GridInfo,
}

impl Grid {
    /// Create an empty grid for the given size.
    pub fn new(size: GridSize) -> Self {
        let info = size.info();
        Self {
            cells: vec![None; info.rows * info.cols],
            info,
        }
    }

    /// The geometry of this grid.
    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    /// Get the value at a position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[self.index(pos)]
    }

    /// Set or clear the value at a position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds or `value` is outside `1..=max_val`.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        if let Some(v) = value {
            assert!(
                v >= 1 && v <= self.info.max_val,
                "value {} out of range 1..={}",
                v,
                self.info.max_val
            );
        }
        let idx = self.index(pos);
        self.cells[idx] = value;
    }

    /// Whether the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// First empty position in row-major scan order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(|idx| Position::new(idx / self.info.cols, idx % self.info.cols))
    }

    /// Whether every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.filled_count()
    }

    /// Iterate over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.info.cols;
        let rows = self.info.rows;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.info.rows && pos.col < self.info.cols,
            "position ({}, {}) out of bounds for {}x{} grid",
            pos.row,
            pos.col,
            self.info.rows,
            self.info.cols
        );
        pos.row * self.info.cols + pos.col
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Cell width grows to 2 for 16x16 values.
        let width = if self.info.max_val >= 10 { 2 } else { 1 };
        let band = (width + 1) * self.info.sub_cols + 1;
        let rule = {
            let mut s = String::new();
            for _ in 0..self.info.rows / self.info.sub_rows {
                s.push('+');
                s.push_str(&"-".repeat(band));
            }
            s.push('+');
            s
        };

        for row in 0..self.info.rows {
            if row % self.info.sub_rows == 0 {
                writeln!(f, "{}", rule)?;
            }
            for col in 0..self.info.cols {
                if col % self.info.sub_cols == 0 {
                    write!(f, "| ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(v) => write!(f, "{:>w$} ", v, w = width)?,
                    None => write!(f, "{:>w$} ", ".", w = width)?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(GridSize::Nine);
        assert_eq!(grid.empty_count(), 81);
        assert_eq!(grid.filled_count(), 0);
        assert!(!grid.is_complete());
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_set_get_clear() {
        let mut grid = Grid::new(GridSize::Six);
        let pos = Position::new(2, 4);
        grid.set(pos, Some(5));
        assert_eq!(grid.get(pos), Some(5));
        assert_eq!(grid.filled_count(), 1);
        grid.set(pos, None);
        assert!(grid.is_empty(pos));
    }

    #[test]
    fn test_first_empty_scan_order() {
        let mut grid = Grid::new(GridSize::Six);
        for col in 0..6 {
            grid.set(Position::new(0, col), Some(col as u8 + 1));
        }
        assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));
    }

    #[test]
    #[should_panic]
    fn test_value_out_of_range_panics() {
        let mut grid = Grid::new(GridSize::Six);
        grid.set(Position::new(0, 0), Some(7));
    }

    #[test]
    fn test_positions_cover_grid() {
        let grid = Grid::new(GridSize::Nine);
        assert_eq!(grid.positions().count(), 81);
        let last = grid.positions().last().unwrap();
        assert_eq!(last, Position::new(8, 8));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut grid = Grid::new(GridSize::Nine);
        grid.set(Position::new(4, 4), Some(9));
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
