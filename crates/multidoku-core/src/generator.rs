use crate::{solver, Grid, GridSize, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Difficulty level of a generated puzzle.
///
/// Difficulty is a fixed clue-count heuristic per size, nothing more: fewer
/// clues, harder puzzle. There is no technique-based rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of clues left in the puzzle for this size and difficulty.
    pub fn target_clues(self, size: GridSize) -> usize {
        match (size, self) {
            (GridSize::Six, Difficulty::Easy) => 20,
            (GridSize::Six, Difficulty::Medium) => 16,
            (GridSize::Six, Difficulty::Hard) => 12,
            (GridSize::Nine, Difficulty::Easy) => 38,
            (GridSize::Nine, Difficulty::Medium) => 30,
            (GridSize::Nine, Difficulty::Hard) => 24,
            (GridSize::Sixteen, Difficulty::Easy) => 140,
            (GridSize::Sixteen, Difficulty::Medium) => 120,
            (GridSize::Sixteen, Difficulty::Hard) => 100,
        }
    }

    /// All difficulty levels.
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A generated puzzle together with its solution.
///
/// Both grids share dimensions, and every filled puzzle cell equals the
/// solution cell at the same position — the puzzle is the solution with
/// holes punched in it, so the invariant holds by construction. The consumer
/// owns the puzzle for user edits and keeps the solution only for
/// win-checking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub puzzle: Grid,
    pub solution: Grid,
}

/// Sudoku puzzle generator.
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle/solution pair.
    ///
    /// Seeds the main-diagonal sub-blocks with random values, completes the
    /// grid by randomized backtracking, then removes values at random
    /// positions until only the difficulty's clue count remains. For 6x6 and
    /// 9x9 every removal is checked to keep the solution unique; a removal
    /// that breaks uniqueness is reverted and the walk continues. 16x16
    /// skips that check and accepts every removal, trading a possible second
    /// solution for acceptable generation time.
    ///
    /// Runs to completion on the calling thread; interactive consumers
    /// should call this from a worker thread and swap the result in when it
    /// arrives.
    pub fn generate(&mut self, size: GridSize, difficulty: Difficulty) -> Puzzle {
        let mut grid = Grid::new(size);
        let info = *grid.info();

        // Diagonal sub-blocks never share a row, column, or block with each
        // other, so each can be filled independently before the solve. Only
        // possible when blocks are square; 6x6 blocks (2x3) are not, and its
        // solve simply starts from an empty grid.
        if info.sub_rows == info.sub_cols {
            for band in 0..info.rows / info.sub_rows {
                let origin = band * info.sub_rows;
                self.fill_block(&mut grid, origin, origin);
            }
        }

        let solved = solver::solve(&mut grid, &mut self.rng);
        assert!(solved, "diagonally seeded grid must be solvable");
        let solution = grid.clone();

        let target_clues = difficulty.target_clues(size);
        let budget = info.rows * info.cols - target_clues;
        let verify = size.verifies_uniqueness();

        let mut positions: Vec<Position> = grid.positions().collect();
        positions.shuffle(&mut self.rng);

        let mut removed = 0;
        for pos in positions {
            if removed == budget {
                break;
            }
            let value = grid.get(pos);
            grid.set(pos, None);
            if verify && !solver::has_unique_solution(&grid) {
                grid.set(pos, value);
            } else {
                removed += 1;
            }
        }

        Puzzle {
            puzzle: grid,
            solution,
        }
    }

    /// Fill one sub-block with a random permutation, by drawing values and
    /// rejecting any already placed in the block.
    fn fill_block(&mut self, grid: &mut Grid, start_row: usize, start_col: usize) {
        let info = *grid.info();
        for row in start_row..start_row + info.sub_rows {
            for col in start_col..start_col + info.sub_cols {
                loop {
                    let value = self.rng.gen_range(1..=info.max_val);
                    if !block_contains(grid, start_row, start_col, value) {
                        grid.set(Position::new(row, col), Some(value));
                        break;
                    }
                }
            }
        }
    }
}

fn block_contains(grid: &Grid, start_row: usize, start_col: usize, value: u8) -> bool {
    let info = grid.info();
    for row in start_row..start_row + info.sub_rows {
        for col in start_col..start_col + info.sub_cols {
            if grid.get(Position::new(row, col)) == Some(value) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rules, solver};
    use rand::rngs::StdRng;

    fn check_pair(puzzle: &Puzzle) {
        assert!(puzzle.solution.is_complete());
        assert!(rules::conflicts(&puzzle.solution).is_empty());
        assert_eq!(puzzle.puzzle.info(), puzzle.solution.info());
        for pos in puzzle.puzzle.positions() {
            if let Some(value) = puzzle.puzzle.get(pos) {
                assert_eq!(puzzle.solution.get(pos), Some(value));
            }
        }
    }

    #[test]
    fn test_generate_nine_easy() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(GridSize::Nine, Difficulty::Easy);

        check_pair(&puzzle);
        assert_eq!(puzzle.puzzle.filled_count(), 38);
        assert!(solver::has_unique_solution(&puzzle.puzzle));
    }

    #[test]
    fn test_generate_nine_medium_unique() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(GridSize::Nine, Difficulty::Medium);

        check_pair(&puzzle);
        assert!(solver::has_unique_solution(&puzzle.puzzle));
    }

    #[test]
    fn test_generate_six_hard_round_trip() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(GridSize::Six, Difficulty::Hard);

        check_pair(&puzzle);
        assert!(solver::has_unique_solution(&puzzle.puzzle));

        // Uniqueness means re-solving must land on the stored solution.
        let mut resolved = puzzle.puzzle.clone();
        let mut rng = StdRng::seed_from_u64(99);
        assert!(solver::solve(&mut resolved, &mut rng));
        assert_eq!(resolved, puzzle.solution);
    }

    #[test]
    fn test_generate_hard_never_exceeds_removal_budget() {
        let mut generator = Generator::with_seed(7);
        let puzzle = generator.generate(GridSize::Nine, Difficulty::Hard);

        check_pair(&puzzle);
        // Removal can run out of positions before hitting the target, but
        // never goes past it.
        assert!(puzzle.puzzle.filled_count() >= Difficulty::Hard.target_clues(GridSize::Nine));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Generator::with_seed(123).generate(GridSize::Nine, Difficulty::Medium);
        let b = Generator::with_seed(123).generate(GridSize::Nine, Difficulty::Medium);
        assert_eq!(a.puzzle, b.puzzle);
        assert_eq!(a.solution, b.solution);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Generator::with_seed(1).generate(GridSize::Nine, Difficulty::Medium);
        let b = Generator::with_seed(2).generate(GridSize::Nine, Difficulty::Medium);
        assert_ne!(a.puzzle, b.puzzle);
    }

    #[test]
    fn test_clue_table() {
        assert_eq!(Difficulty::Easy.target_clues(GridSize::Six), 20);
        assert_eq!(Difficulty::Hard.target_clues(GridSize::Six), 12);
        assert_eq!(Difficulty::Easy.target_clues(GridSize::Nine), 38);
        assert_eq!(Difficulty::Medium.target_clues(GridSize::Nine), 30);
        assert_eq!(Difficulty::Medium.target_clues(GridSize::Sixteen), 120);
    }

    // Backtracking over a 16x16 board takes real wall-clock time, so this
    // one runs on demand: cargo test -- --ignored
    #[test]
    #[ignore]
    fn test_generate_sixteen_skips_verification() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(GridSize::Sixteen, Difficulty::Easy);

        check_pair(&puzzle);
        // Without uniqueness checks every removal is accepted, so the clue
        // target is hit exactly.
        assert_eq!(puzzle.puzzle.filled_count(), 140);
    }

    #[test]
    fn test_puzzle_serde_round_trip() {
        let mut generator = Generator::with_seed(5);
        let puzzle = generator.generate(GridSize::Six, Difficulty::Easy);
        let json = serde_json::to_string(&puzzle).unwrap();
        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.puzzle, puzzle.puzzle);
        assert_eq!(back.solution, puzzle.solution);
    }
}
