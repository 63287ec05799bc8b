use clap::Parser;
use multidoku_core::{rules, solver, Difficulty, Generator, GridSize, Puzzle};

/// Generate variable-size Sudoku puzzles (6x6, 9x9, 16x16).
#[derive(Parser)]
#[command(name = "multidoku", version)]
struct Cli {
    /// Board edge length: 6, 9, or 16
    #[arg(short, long, default_value = "9", value_parser = parse_size)]
    size: GridSize,

    /// Puzzle difficulty: easy, medium, or hard
    #[arg(short, long, default_value = "medium", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Number of puzzles to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the solution of each puzzle
    #[arg(long)]
    solution: bool,

    /// Re-check each generated pair and report the result
    #[arg(long)]
    verify: bool,
}

fn parse_size(s: &str) -> Result<GridSize, String> {
    let edge: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    GridSize::from_edge(edge).ok_or_else(|| format!("unsupported size {} (try 6, 9, or 16)", edge))
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    match s.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        _ => Err(format!(
            "unknown difficulty '{}' (try easy, medium, or hard)",
            s
        )),
    }
}

fn main() {
    let cli = Cli::parse();

    let mut generator = match cli.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };

    for i in 0..cli.count {
        let result = generator.generate(cli.size, cli.difficulty);

        if cli.count > 1 {
            println!("--- Puzzle {} of {} ---", i + 1, cli.count);
        }
        println!(
            "{} {}, {} clues",
            cli.size,
            cli.difficulty,
            result.puzzle.filled_count()
        );
        print!("{}", result.puzzle);

        if cli.solution {
            println!("\nSolution:");
            print!("{}", result.solution);
        }

        if cli.verify {
            verify(&result, cli.size);
        }
        println!();
    }
}

/// Re-derive the invariants the generator promises and report them.
fn verify(result: &Puzzle, size: GridSize) {
    let solution_ok =
        result.solution.is_complete() && rules::conflicts(&result.solution).is_empty();
    println!(
        "solution complete and conflict-free: {}",
        if solution_ok { "yes" } else { "NO" }
    );

    let clues_match = result
        .puzzle
        .positions()
        .filter_map(|pos| result.puzzle.get(pos).map(|v| (pos, v)))
        .all(|(pos, v)| result.solution.get(pos) == Some(v));
    println!(
        "puzzle clues match solution: {}",
        if clues_match { "yes" } else { "NO" }
    );

    if size.verifies_uniqueness() {
        let unique = solver::has_unique_solution(&result.puzzle);
        println!("unique solution: {}", if unique { "yes" } else { "NO" });
    } else {
        println!("unique solution: not checked for {}", size);
    }
}
