//! Basic example of using the multidoku engine

use multidoku_core::{rules, solver, Difficulty, Generator, GridSize};

fn main() {
    // Generate a puzzle
    println!("Generating a Medium 9x9 puzzle...\n");
    let mut generator = Generator::new();
    let result = generator.generate(GridSize::Nine, Difficulty::Medium);

    println!("Generated puzzle:");
    println!("{}", result.puzzle);

    // Show some stats
    println!("Clue cells: {}", result.puzzle.filled_count());
    println!("Empty cells: {}", result.puzzle.empty_count());

    // Check uniqueness
    let solutions = solver::count_solutions(&result.puzzle, 2);
    println!("Number of solutions (up to 2): {}\n", solutions);

    println!("Solution:");
    println!("{}", result.solution);
    assert!(rules::conflicts(&result.solution).is_empty());

    // Geometry for every supported size
    for &size in GridSize::all() {
        let info = size.info();
        println!(
            "{}: {}x{} sub-blocks, values 1..={}",
            size, info.sub_rows, info.sub_cols, info.max_val
        );
    }
}
