//! Error types for the crossing puzzle.

use crate::engine::{Actor, Location, State};
use thiserror::Error;

/// A move whose preconditions do not hold against the state it is applied to.
///
/// The transition generator never produces one of these, so seeing it during a
/// search means the rules themselves are broken.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// The item is already at the target, so nobody here can carry it there.
    #[error("unable to move to {target}: the item is not here")]
    ItemNotHere { target: Location },

    #[error("unable to move actor {actor} to {target}: actor is already there")]
    AlreadyThere { actor: Actor, target: Location },

    #[error("actor {0} is not part of this puzzle")]
    UnknownActor(Actor),

    #[error("actor {0} cannot travel with itself")]
    SameActor(Actor),
}

/// Failure of a search entry point.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The frontier ran dry before any path reached a solved state.
    #[error("unable to find a solution for the given initial state")]
    NoSolution { initial: State },

    #[error("search aborted: {0}")]
    IllegalMove(#[from] IllegalMove),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
