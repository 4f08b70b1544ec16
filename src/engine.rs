//! Core model for the crossing puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Location`: The two sides of the crossing, `Origin` and `Target`.
//! - `Actor` and `Roster`: The fixed crew and each member's intrinsic crossing cost.
//! - `State`: An immutable snapshot of the remaining budget, every actor's location
//!   and the location of the shared item.
//! - `Move`: A single crossing of one or two actors carrying the item.
use crate::error::IllegalMove;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides of the crossing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Where everyone starts.
    #[default]
    Origin,
    /// Where everyone has to end up.
    Target,
}

impl Location {
    /// Returns the other side of the crossing.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossing_solver::engine::Location;
    /// assert_eq!(Location::Origin.opposite(), Location::Target);
    /// assert_eq!(Location::Target.opposite(), Location::Origin);
    /// ```
    pub fn opposite(self) -> Location {
        match self {
            Location::Origin => Location::Target,
            Location::Target => Location::Origin,
        }
    }

    /// Converts the location to its single character form, used in compact state dumps.
    pub fn to_char(self) -> char {
        match self {
            Location::Origin => 'O',
            Location::Target => 'T',
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Origin => write!(f, "Origin"),
            Location::Target => write!(f, "Target"),
        }
    }
}

/// Opaque handle for one member of a `Roster`.
///
/// Actors are numbered in the order they were added to the roster; that index is
/// also their slot in every `State`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Actor(usize);

impl Actor {
    pub fn new(index: usize) -> Self {
        Actor(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Member {
    name: String,
    cost: u32,
}

/// The fixed set of actors for one puzzle instance, with their names and costs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Roster::default()
    }

    /// Builds a roster of anonymous actors ("Actor 1", "Actor 2", ...) from their costs.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossing_solver::engine::{Actor, Roster};
    /// let roster = Roster::from_costs(&[1, 2]);
    /// assert_eq!(roster.len(), 2);
    /// assert_eq!(roster.cost(Actor::new(1)), Some(2));
    /// assert_eq!(roster.name(Actor::new(0)), Some("Actor 1"));
    /// ```
    pub fn from_costs(costs: &[u32]) -> Self {
        let mut roster = Roster::new();
        for (i, &cost) in costs.iter().enumerate() {
            roster.add(format!("Actor {}", i + 1), cost);
        }
        roster
    }

    /// Adds an actor and returns its handle.
    ///
    /// Costs are expected to be positive; `PuzzleConfig::validate` enforces this for
    /// rosters built from configuration.
    pub fn add(&mut self, name: impl Into<String>, cost: u32) -> Actor {
        self.members.push(Member {
            name: name.into(),
            cost,
        });
        Actor(self.members.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over every actor in roster order.
    pub fn actors(&self) -> impl Iterator<Item = Actor> + '_ {
        (0..self.members.len()).map(Actor)
    }

    pub fn name(&self, actor: Actor) -> Option<&str> {
        self.members.get(actor.0).map(|m| m.name.as_str())
    }

    pub fn cost(&self, actor: Actor) -> Option<u32> {
        self.members.get(actor.0).map(|m| m.cost)
    }
}

/// A single legal crossing: which actors move, where to, and how long it takes.
///
/// Moves can only be built through `Move::move_one` and `Move::move_two`, so the
/// cost always agrees with the roster the move was built against.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    actors: Vec<Actor>,
    target: Location,
    cost: u32,
}

impl Move {
    /// A single actor crosses to `target`, taking its own intrinsic cost.
    ///
    /// # Errors
    /// Returns `IllegalMove::UnknownActor` if `actor` is not in `roster`.
    pub fn move_one(
        roster: &Roster,
        actor: Actor,
        target: Location,
    ) -> Result<Move, IllegalMove> {
        let cost = roster.cost(actor).ok_or(IllegalMove::UnknownActor(actor))?;
        Ok(Move {
            actors: vec![actor],
            target,
            cost,
        })
    }

    /// Two actors cross together; they are limited by the slower of the two.
    ///
    /// The actor order is kept as given. It only affects how the move is displayed.
    ///
    /// # Errors
    /// Returns `IllegalMove::SameActor` if `first == second`, or
    /// `IllegalMove::UnknownActor` if either is not in `roster`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossing_solver::engine::{Actor, Location, Move, Roster};
    /// let roster = Roster::from_costs(&[1, 10]);
    /// let mv = Move::move_two(&roster, Actor::new(0), Actor::new(1), Location::Target).unwrap();
    /// assert_eq!(mv.cost(), 10);
    /// assert!(Move::move_two(&roster, Actor::new(0), Actor::new(0), Location::Target).is_err());
    /// ```
    pub fn move_two(
        roster: &Roster,
        first: Actor,
        second: Actor,
        target: Location,
    ) -> Result<Move, IllegalMove> {
        if first == second {
            return Err(IllegalMove::SameActor(first));
        }
        let first_cost = roster.cost(first).ok_or(IllegalMove::UnknownActor(first))?;
        let second_cost = roster
            .cost(second)
            .ok_or(IllegalMove::UnknownActor(second))?;
        Ok(Move {
            actors: vec![first, second],
            target,
            cost: first_cost.max(second_cost),
        })
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn target(&self) -> Location {
        self.target
    }

    /// Time spent on this crossing, in minutes.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

/// Immutable snapshot of the puzzle.
///
/// Equality and hashing are structural: two states are equal when the budget, the
/// item location and every actor's location all match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    budget_remaining: i64,
    actor_locations: Vec<Location>,
    item_location: Location,
}

impl State {
    /// Creates a state from explicit per-actor locations, indexed by `Actor::index`.
    pub fn new(
        budget_remaining: i64,
        actor_locations: Vec<Location>,
        item_location: Location,
    ) -> Self {
        State {
            budget_remaining,
            actor_locations,
            item_location,
        }
    }

    /// Creates a state with `actor_count` actors and the item all at `location`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossing_solver::engine::{Location, State};
    /// let state = State::all_at(3, Location::Origin, 10);
    /// assert_eq!(state.actor_locations().len(), 3);
    /// assert_eq!(state.item_location(), Location::Origin);
    /// assert!(!state.is_solution());
    /// ```
    pub fn all_at(actor_count: usize, location: Location, budget_remaining: i64) -> Self {
        State::new(budget_remaining, vec![location; actor_count], location)
    }

    pub fn budget_remaining(&self) -> i64 {
        self.budget_remaining
    }

    pub fn item_location(&self) -> Location {
        self.item_location
    }

    pub fn actor_locations(&self) -> &[Location] {
        &self.actor_locations
    }

    /// Iterates over the actors currently at `location`, in roster order.
    pub fn actors_at(&self, location: Location) -> impl Iterator<Item = Actor> + '_ {
        self.actor_locations
            .iter()
            .enumerate()
            .filter(move |&(_, &l)| l == location)
            .map(|(i, _)| Actor::new(i))
    }

    /// Applies `mv`, returning the resulting state. `self` is left untouched.
    ///
    /// The movers and the item must share a side, and the move must head to the
    /// other side. The budget is charged even if it goes negative; such a state is
    /// simply not valid.
    ///
    /// # Errors
    /// - `IllegalMove::ItemNotHere` if the item is already at the move's target.
    /// - `IllegalMove::AlreadyThere` if a moved actor is already at the target.
    /// - `IllegalMove::UnknownActor` if a moved actor has no slot in this state.
    pub fn apply(&self, mv: &Move) -> Result<State, IllegalMove> {
        let target = mv.target();
        if self.item_location == target {
            return Err(IllegalMove::ItemNotHere { target });
        }

        let mut actor_locations = self.actor_locations.clone();
        for &actor in mv.actors() {
            let slot = actor_locations
                .get_mut(actor.index())
                .ok_or(IllegalMove::UnknownActor(actor))?;
            if *slot == target {
                return Err(IllegalMove::AlreadyThere { actor, target });
            }
            *slot = target;
        }

        Ok(State {
            budget_remaining: self.budget_remaining - i64::from(mv.cost()),
            actor_locations,
            item_location: target,
        })
    }

    /// A state is valid while the budget has not gone negative.
    pub fn is_valid(&self) -> bool {
        self.budget_remaining >= 0
    }

    /// True when the item and every actor are at `Target` and the budget still holds.
    pub fn is_solution(&self) -> bool {
        self.item_location == Location::Target
            && self.is_valid()
            && self.actor_locations.iter().all(|&l| l == Location::Target)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actors: String = self.actor_locations.iter().map(|l| l.to_char()).collect();
        write!(
            f,
            "[{}] item:{} budget:{}",
            actors,
            self.item_location.to_char(),
            self.budget_remaining
        )
    }
}
