use clap::Parser;
use crossing_solver::config::PuzzleConfig;
use crossing_solver::{console, SearchError, Solution, Strategy};
use std::collections::HashMap;
use std::process::ExitCode;

const STRATEGIES: [Strategy; 2] = [Strategy::DepthFirst, Strategy::BreadthFirst];

#[derive(Parser, Debug)]
#[clap(author, version, long_about = None)]
#[clap(about = "Runs both search strategies over seeded random puzzles")]
struct Args {
    /// Number of random puzzles to evaluate
    #[clap(short, long, default_value_t = 20)]
    puzzles: u64,

    /// Actors per puzzle
    #[clap(short, long, default_value_t = 4)]
    actors: usize,

    /// Seed of the first puzzle; later puzzles use the following seeds
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Increase log output (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    console::init(args.verbose);

    let mut checked: HashMap<Strategy, Vec<u64>> = HashMap::new();
    let mut unsolvable = 0u64;
    let mut failures = 0u64;

    println!("Comparing strategies on {} puzzles with {} actors...", args.puzzles, args.actors);

    for offset in 0..args.puzzles {
        let seed = args.seed + offset;
        let puzzle = match PuzzleConfig::random_with_seed(seed, args.actors).build() {
            Ok(puzzle) => puzzle,
            Err(e) => {
                eprintln!("Error: puzzle for seed {} is invalid: {}", seed, e);
                return ExitCode::from(2);
            }
        };
        let solver = puzzle.solver();

        let results: Vec<(Strategy, Result<Solution, SearchError>)> = STRATEGIES
            .iter()
            .map(|&strategy| (strategy, solver.find(strategy, &puzzle.initial)))
            .collect();

        let solved = results.iter().filter(|(_, r)| r.is_ok()).count();
        if solved == 0 {
            unsolvable += 1;
        } else if solved != results.len() {
            eprintln!("Error: strategies disagree on seed {} (initial {})", seed, puzzle.initial);
            failures += 1;
            continue;
        }

        for (strategy, result) in results {
            match result {
                Ok(solution) => {
                    if !solution.path.is_consistent() {
                        eprintln!("Error: {} returned a broken path for seed {}", strategy, seed);
                        failures += 1;
                    }
                    println!(
                        "  Seed: {:<6} Strategy: {:<14} Moves: {:<3} Checked: {}",
                        seed,
                        strategy,
                        solution.path.moves().len(),
                        solution.paths_checked
                    );
                    checked.entry(strategy).or_default().push(solution.paths_checked);
                }
                Err(SearchError::NoSolution { .. }) => {}
                Err(e) => {
                    eprintln!("Error: {} failed on seed {}: {}", strategy, seed, e);
                    failures += 1;
                }
            }
        }
    }

    println!("\n--- Comparison Complete ---");
    println!("Puzzles evaluated: {}", args.puzzles);
    println!("Unsolvable puzzles: {}", unsolvable);
    println!("\n--- Average Paths Checked ---");
    for strategy in STRATEGIES {
        match checked.get(&strategy) {
            Some(counts) if !counts.is_empty() => {
                let average = counts.iter().sum::<u64>() as f64 / counts.len() as f64;
                println!("Strategy {:<14}: {:.2}", strategy, average);
            }
            _ => println!("Strategy {:<14}: no solved puzzles", strategy),
        }
    }

    if failures > 0 {
        eprintln!("{} failures", failures);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
