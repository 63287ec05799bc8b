//! Recursive backtracking search over grid states.
//!
//! No constraint propagation: both entry points scan for the first empty
//! cell in row-major order, try candidates against [`rules::fits`], and
//! reset the cell before trying the next candidate. State lives entirely in
//! the grid being searched; there is nothing to carry between calls.

use crate::{rules, Grid};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fill `grid` in place to a complete valid solution.
///
/// Candidate values are tried in a freshly shuffled order at every cell, so
/// two calls on the same input produce different completions. That is the
/// point: generation derives all of its variety from this shuffle. Returns
/// `false` only if the grid as given admits no solution; callers seeding a
/// grid for generation are expected to keep it satisfiable.
pub fn solve<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    let pos = match grid.first_empty() {
        Some(pos) => pos,
        None => return true,
    };

    let mut candidates: Vec<u8> = (1..=grid.info().max_val).collect();
    candidates.shuffle(rng);

    for value in candidates {
        if rules::fits(grid, pos, value) {
            grid.set(pos, Some(value));
            if solve(grid, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }

    false
}

/// Count complete solutions of `grid`, stopping as soon as `limit` is
/// reached.
///
/// Explores every branch rather than returning on the first success, but the
/// cutoff makes uniqueness checks cheap: `limit = 2` answers "exactly one
/// solution?" without enumerating the full solution set of an ambiguous
/// puzzle. Candidates are tried in ascending order; only the count matters
/// here, so there is nothing to randomize. Works on a private clone, leaving
/// the input untouched.
pub fn count_solutions(grid: &Grid, limit: usize) -> usize {
    let mut working = grid.clone();
    let mut count = 0;
    count_recursive(&mut working, limit, &mut count);
    count
}

/// Whether `grid` has exactly one solution.
pub fn has_unique_solution(grid: &Grid) -> bool {
    count_solutions(grid, 2) == 1
}

fn count_recursive(grid: &mut Grid, limit: usize, count: &mut usize) {
    let pos = match grid.first_empty() {
        Some(pos) => pos,
        None => {
            *count += 1;
            return;
        }
    };

    for value in 1..=grid.info().max_val {
        if *count >= limit {
            return;
        }
        if rules::fits(grid, pos, value) {
            grid.set(pos, Some(value));
            count_recursive(grid, limit, count);
            grid.set(pos, None);
        }
    }
}
