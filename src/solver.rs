use crate::engine::{Roster, State};
use crate::error::{Result, SearchError};
use crate::path::{Classification, SolutionPath};
use crate::transitions::Pairing;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use tracing::{debug, info, trace, warn};

/// Frontier discipline used to explore the puzzle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Stack of paths with full backtracking, cheapest move tried first.
    #[value(alias = "d")]
    DepthFirst,
    /// Whole generations at a time, cheapest moves first within each parent.
    #[value(alias = "b")]
    BreadthFirst,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => f.pad("depth-first"),
            Strategy::BreadthFirst => f.pad("breadth-first"),
        }
    }
}

/// Represents a solution found by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The first solved path the strategy reached.
    pub path: SolutionPath,
    /// How many paths were taken off the frontier and classified, this one included.
    pub paths_checked: u64,
}

/// Searches for a sequence of moves that brings everyone across within budget.
///
/// Both strategies are deterministic: the same roster, pairing and initial state
/// always yield the same path and the same count.
#[derive(Clone, Copy, Debug)]
pub struct Solver<'a> {
    roster: &'a Roster,
    pairing: Pairing,
}

impl<'a> Solver<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Solver {
            roster,
            pairing: Pairing::default(),
        }
    }

    pub fn with_pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }

    pub fn find(&self, strategy: Strategy, initial: &State) -> Result<Solution> {
        match strategy {
            Strategy::DepthFirst => self.find_depth(initial),
            Strategy::BreadthFirst => self.find_breadth(initial),
        }
    }

    /// Breadth-first search, one full generation at a time.
    ///
    /// Every path of the current generation is checked in frontier order before the
    /// next generation starts; the first solved one wins. Successors of each path are
    /// queued cheapest move first.
    ///
    /// # Errors
    /// - `SearchError::NoSolution` if every path dies out unsolved.
    /// - `SearchError::IllegalMove` if move generation breaks its own rules.
    pub fn find_breadth(&self, initial: &State) -> Result<Solution> {
        self.log_start(Strategy::BreadthFirst, initial);

        let mut paths_checked = 0u64;
        let mut depth = 0usize;
        let mut generation = vec![SolutionPath::root(initial.clone())];

        while !generation.is_empty() {
            debug!(depth, frontier = generation.len(), "expanding generation");
            let mut next_generation = Vec::new();

            for path in generation {
                paths_checked += 1;
                let classification = path.classification();
                trace!(depth, ?classification, "checking path");

                if classification == Classification::Solved {
                    return Ok(self.log_found(Strategy::BreadthFirst, path, paths_checked));
                }

                let mut successors = path.successors(self.roster, self.pairing)?;
                successors.sort_by_key(SolutionPath::last_move_cost);
                next_generation.extend(successors);
            }

            generation = next_generation;
            depth += 1;
        }

        Err(self.exhausted(Strategy::BreadthFirst, initial, paths_checked))
    }

    /// Depth-first search over a stack of paths with full backtracking.
    ///
    /// Successors are pushed most expensive first, so the cheapest one is popped next.
    ///
    /// # Errors
    /// - `SearchError::NoSolution` if the stack empties without a solved path.
    /// - `SearchError::IllegalMove` if move generation breaks its own rules.
    pub fn find_depth(&self, initial: &State) -> Result<Solution> {
        self.log_start(Strategy::DepthFirst, initial);

        let mut paths_checked = 0u64;
        let mut stack = vec![SolutionPath::root(initial.clone())];

        while let Some(path) = stack.pop() {
            paths_checked += 1;
            let classification = path.classification();
            trace!(depth = path.moves().len(), ?classification, "checking path");

            if classification == Classification::Solved {
                return Ok(self.log_found(Strategy::DepthFirst, path, paths_checked));
            }

            let mut successors = path.successors(self.roster, self.pairing)?;
            successors.sort_by_key(|p| Reverse(p.last_move_cost()));
            stack.extend(successors);
        }

        Err(self.exhausted(Strategy::DepthFirst, initial, paths_checked))
    }

    fn log_start(&self, strategy: Strategy, initial: &State) {
        info!(
            event = "search_start",
            %strategy,
            actors = self.roster.len(),
            budget = initial.budget_remaining(),
            pairing = ?self.pairing,
        );
    }

    fn log_found(&self, strategy: Strategy, path: SolutionPath, paths_checked: u64) -> Solution {
        info!(
            event = "search_end",
            %strategy,
            paths_checked,
            moves = path.moves().len(),
            budget_left = ?path.final_state().map(State::budget_remaining),
        );
        Solution {
            path,
            paths_checked,
        }
    }

    fn exhausted(&self, strategy: Strategy, initial: &State, paths_checked: u64) -> SearchError {
        warn!(
            event = "search_exhausted",
            %strategy,
            paths_checked,
            "frontier exhausted without a solution"
        );
        SearchError::NoSolution {
            initial: initial.clone(),
        }
    }
}
