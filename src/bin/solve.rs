use clap::Parser;
use crossing_solver::config::{ActorConfig, ConfigError, Puzzle, PuzzleConfig};
use crossing_solver::engine::Location;
use crossing_solver::report::{describe_solution, describe_state};
use crossing_solver::transitions::Pairing;
use crossing_solver::utils::{parse_actor_spec, parse_location};
use crossing_solver::{console, SearchError, Strategy};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy; asked for interactively when neither this nor the config sets one
    #[clap(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Path to a puzzle file (TOML); defaults to the astronaut puzzle
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Replace the roster, one actor per flag: NAME=COST[@origin|@target]
    #[clap(short, long = "actor", value_parser = parse_actor_spec)]
    actors: Vec<ActorConfig>,

    /// Override the starting budget
    #[clap(short, long, allow_negative_numbers = true)]
    budget: Option<i64>,

    /// Override where the item starts
    #[clap(short, long, value_parser = parse_location)]
    item: Option<Location>,

    /// Override how paired crossings are enumerated
    #[clap(short, long, value_enum)]
    pairing: Option<Pairing>,

    /// Print the effective puzzle as TOML and exit without searching
    #[clap(long)]
    print_config: bool,

    /// Increase log output (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(args: &Args) -> Result<PuzzleConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => PuzzleConfig::load(path)?,
        None => PuzzleConfig::reference(),
    };
    if !args.actors.is_empty() {
        config.actors = args.actors.clone();
    }
    if let Some(budget) = args.budget {
        config = config.with_budget(budget);
    }
    if let Some(item) = args.item {
        config.item = item;
    }
    if let Some(pairing) = args.pairing {
        config = config.with_pairing(pairing);
    }
    Ok(config)
}

fn prompt_strategy() -> io::Result<Strategy> {
    loop {
        print!("Depth-first or Breadth-first search? (d/b): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no strategy given",
            ));
        }

        match input.trim() {
            "d" => return Ok(Strategy::DepthFirst),
            "b" => return Ok(Strategy::BreadthFirst),
            _ => {
                println!("Invalid Selection");
                println!();
            }
        }
    }
}

fn run(puzzle: &Puzzle, strategy: Strategy) -> ExitCode {
    let started = Instant::now();
    let result = puzzle.solver().find(strategy, &puzzle.initial);
    let elapsed = started.elapsed();

    match result {
        Ok(solution) => {
            for line in describe_solution(&puzzle.roster, &solution) {
                println!("{}", line);
            }
            println!("Solution took {:?} to find", elapsed);
            ExitCode::SUCCESS
        }
        Err(SearchError::NoSolution { initial }) => {
            println!("Unable to find a solution for the given initial state:");
            for line in describe_state(&puzzle.roster, &initial) {
                println!("{}", line);
            }
            ExitCode::from(1)
        }
        Err(err @ SearchError::IllegalMove(_)) => {
            println!("Unable to find a solution, due to faulty logic");
            println!("{}", err);
            ExitCode::from(2)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    console::init(args.verbose);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load puzzle: {}", e);
            return ExitCode::from(2);
        }
    };
    if args.print_config {
        return match config.to_toml_string() {
            Ok(text) => {
                print!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to print puzzle: {}", e);
                ExitCode::from(2)
            }
        };
    }

    let puzzle = match config.build() {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Failed to load puzzle: {}", e);
            return ExitCode::from(2);
        }
    };

    let strategy = match args.strategy.or(config.strategy) {
        Some(strategy) => strategy,
        None => match prompt_strategy() {
            Ok(strategy) => strategy,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                return ExitCode::from(2);
            }
        },
    };

    run(&puzzle, strategy)
}
