//! Legal move generation.
//!
//! Actors only ever cross while carrying the item. From `Origin` they cross in
//! pairs; from `Target` exactly one actor brings the item back.
use crate::engine::{Actor, Location, Move, Roster, State};
use crate::error::IllegalMove;
use serde::{Deserialize, Serialize};

/// How two-actor crossings are enumerated.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// Every ordered pair `(a, b)` with `a != b`. Each crossing shows up twice, once
    /// per order; both lead to the same state at the same cost.
    #[default]
    Ordered,
    /// Each unordered pair once, lower roster index first.
    Unordered,
}

/// Enumerates every legal move from `state`.
///
/// With the item at `Origin`, every pair of actors standing beside it may cross. If
/// only one actor is there, no pair exists and that actor crosses alone. With the
/// item at `Target`, each actor beside it may carry it back on their own.
///
/// Moves come out in roster order, which keeps the searches deterministic.
///
/// # Errors
/// Returns an `IllegalMove` only if `state` holds actors that `roster` does not know.
///
/// # Examples
///
/// ```
/// use crossing_solver::engine::{Location, Roster, State};
/// use crossing_solver::transitions::{legal_moves, Pairing};
///
/// let roster = Roster::from_costs(&[1, 2, 5]);
/// let start = State::all_at(3, Location::Origin, 20);
/// assert_eq!(legal_moves(&start, &roster, Pairing::Ordered).unwrap().len(), 6);
/// assert_eq!(legal_moves(&start, &roster, Pairing::Unordered).unwrap().len(), 3);
/// ```
pub fn legal_moves(
    state: &State,
    roster: &Roster,
    pairing: Pairing,
) -> Result<Vec<Move>, IllegalMove> {
    let actors_here: Vec<Actor> = state.actors_at(state.item_location()).collect();
    let across = state.item_location().opposite();
    let mut moves = Vec::new();

    match state.item_location() {
        Location::Origin => {
            // An unsolved state with the item at Target still has someone at Origin, so
            // a return trip leaves at least two there. A lone actor beside the item can
            // only be an initial state; without this rule it would be stranded.
            if let [lone] = actors_here.as_slice() {
                moves.push(Move::move_one(roster, *lone, across)?);
                return Ok(moves);
            }
            for (i, &first) in actors_here.iter().enumerate() {
                for (j, &second) in actors_here.iter().enumerate() {
                    let wanted = match pairing {
                        Pairing::Ordered => i != j,
                        Pairing::Unordered => i < j,
                    };
                    if wanted {
                        moves.push(Move::move_two(roster, first, second, across)?);
                    }
                }
            }
        }
        Location::Target => {
            for &actor in &actors_here {
                moves.push(Move::move_one(roster, actor, across)?);
            }
        }
    }

    Ok(moves)
}
