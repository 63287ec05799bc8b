//! Variable-size Sudoku engine.
//!
//! Supports 6x6, 9x9, and 16x16 boards through a single [`GridSize`]
//! abstraction. The engine is deliberately small and stateless: every call
//! owns the grid it works on for the duration of the call, so there is no
//! shared state and nothing to lock. The four things it knows how to do:
//!
//! - describe a board geometry ([`GridSize::info`])
//! - check placements and report conflicting cells ([`rules`])
//! - solve a grid by randomized backtracking and count solutions up to a
//!   cutoff ([`solver`])
//! - generate a puzzle/solution pair at a given difficulty ([`Generator`])
//!
//! Generation runs to completion synchronously and can take a while on
//! 16x16 boards; interactive frontends should run it off the UI thread and
//! swap in the finished [`Puzzle`] atomically.

mod generator;
mod geometry;
mod grid;
pub mod rules;
pub mod solver;

pub use generator::{Difficulty, Generator, Puzzle};
pub use geometry::{GridInfo, GridSize};
pub use grid::{Grid, Position};
