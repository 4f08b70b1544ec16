//! # Crossing Solver Library
//!
//! This library models the crossing puzzle. A fixed crew has to get from `Origin` to
//! `Target`. Every crossing needs the single shared item, at most two actors cross
//! at once at the pace of the slower one, and every crossing eats into a shared time
//! budget. The library finds a sequence of crossings that gets everyone over before
//! the budget runs out.
//!
//! It is used by two binaries:
//! - `crossing_solver`: Loads a puzzle (the astronaut puzzle by default), asks for a
//!   search strategy and prints the steps of the solution it finds.
//! - `compare_strategies`: Runs both strategies over seeded random puzzles and checks
//!   that they agree.
//!
//! ## Modules
//! - `engine`: Locations, actors, the roster, immutable `State`s and `Move`s.
//! - `transitions`: Enumerates the legal moves from a state.
//! - `path`: `SolutionPath`, a move history with its states and classification.
//! - `solver`: Depth-first and breadth-first search over solution paths.
//! - `config`: TOML puzzle configuration, the reference instance and random instances.
//! - `report`: Human-readable descriptions of moves, states and solutions.
//! - `utils`: Parsing helpers for command-line actor descriptions.
//! - `console`: Log subscriber setup for the binaries.
//! - `error`: Error types shared by the modules above.

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod path;
pub mod report;
pub mod solver;
pub mod transitions;
pub mod utils;

pub use error::{IllegalMove, SearchError};
pub use solver::{Solution, Solver, Strategy};
