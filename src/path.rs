//! Solution paths: a move history together with every state it passed through.
use crate::engine::{Move, Roster, State};
use crate::error::IllegalMove;
use crate::transitions::{legal_moves, Pairing};

/// Where a path stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Ends in a state whose budget went negative. Never expanded.
    Invalid,
    /// Still has actors or the item to bring over.
    Unsolved,
    /// Ends with everyone at `Target` inside the budget.
    Solved,
}

/// An ordered record of moves and the states they produced.
///
/// `states[0]` is the initial state and `states[i + 1]` is `states[i]` with
/// `moves[i]` applied. Extending a path clones it; no two paths share history.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SolutionPath {
    moves: Vec<Move>,
    states: Vec<State>,
}

impl SolutionPath {
    /// A path that has not moved yet.
    pub fn root(initial: State) -> Self {
        SolutionPath {
            moves: Vec::new(),
            states: vec![initial],
        }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn initial_state(&self) -> Option<&State> {
        self.states.first()
    }

    pub fn final_state(&self) -> Option<&State> {
        self.states.last()
    }

    /// Cost of the most recent move; `None` for a root path.
    pub fn last_move_cost(&self) -> Option<u32> {
        self.moves.last().map(Move::cost)
    }

    /// Total time spent over every move.
    pub fn total_cost(&self) -> u64 {
        self.moves.iter().map(|m| u64::from(m.cost())).sum()
    }

    pub fn classification(&self) -> Classification {
        match self.states.last() {
            None => Classification::Invalid,
            Some(last) if !last.is_valid() => Classification::Invalid,
            Some(last) if last.is_solution() => Classification::Solved,
            Some(_) => Classification::Unsolved,
        }
    }

    /// Every path one move longer than this one.
    ///
    /// Invalid paths have no successors. A candidate whose resulting state already
    /// appears on this path is dropped, so no path ever revisits a state.
    ///
    /// # Errors
    /// Propagates an `IllegalMove` if a generated move does not apply, which means
    /// the move rules are broken.
    pub fn successors(
        &self,
        roster: &Roster,
        pairing: Pairing,
    ) -> Result<Vec<SolutionPath>, IllegalMove> {
        if self.classification() == Classification::Invalid {
            return Ok(Vec::new());
        }
        let Some(current) = self.states.last() else {
            return Ok(Vec::new());
        };

        let mut successors = Vec::new();
        for mv in legal_moves(current, roster, pairing)? {
            let next = current.apply(&mv)?;
            if self.states.contains(&next) {
                continue;
            }
            successors.push(self.extended(mv, next));
        }
        Ok(successors)
    }

    /// Replays every move from the initial state and checks it lands on the recorded states.
    pub fn is_consistent(&self) -> bool {
        if self.states.len() != self.moves.len() + 1 {
            return false;
        }
        self.moves
            .iter()
            .zip(self.states.windows(2))
            .all(|(mv, pair)| pair[0].apply(mv).as_ref() == Ok(&pair[1]))
    }

    fn extended(&self, mv: Move, next: State) -> SolutionPath {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(mv);

        let mut states = Vec::with_capacity(self.states.len() + 1);
        states.extend_from_slice(&self.states);
        states.push(next);

        SolutionPath { moves, states }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Actor, Location};
    use std::collections::HashSet;

    #[test]
    fn test_root_path() {
        let path = SolutionPath::root(State::all_at(2, Location::Origin, 5));
        assert!(path.moves().is_empty());
        assert_eq!(path.states().len(), 1);
        assert_eq!(path.last_move_cost(), None);
        assert_eq!(path.classification(), Classification::Unsolved);
        assert!(path.is_consistent());
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let path = SolutionPath {
            moves: Vec::new(),
            states: Vec::new(),
        };
        assert_eq!(path.classification(), Classification::Invalid);
        assert!(path.final_state().is_none());
    }

    #[test]
    fn test_classification() {
        let solved = SolutionPath::root(State::all_at(2, Location::Target, 0));
        assert_eq!(solved.classification(), Classification::Solved);

        let overdrawn = SolutionPath::root(State::all_at(2, Location::Target, -3));
        assert_eq!(overdrawn.classification(), Classification::Invalid);

        let halfway = SolutionPath::root(State::new(
            4,
            vec![Location::Target, Location::Origin],
            Location::Target,
        ));
        assert_eq!(halfway.classification(), Classification::Unsolved);
    }

    #[test]
    fn test_successors_extend_history() {
        let roster = Roster::from_costs(&[1, 2]);
        let root = SolutionPath::root(State::all_at(2, Location::Origin, 2));
        let successors = root.successors(&roster, Pairing::Ordered).unwrap();

        // Both orders of the only pair.
        assert_eq!(successors.len(), 2);
        for path in &successors {
            assert_eq!(path.moves().len(), 1);
            assert_eq!(path.states().len(), 2);
            assert_eq!(path.states()[0], root.states()[0]);
            assert_eq!(path.last_move_cost(), Some(2));
            assert_eq!(path.classification(), Classification::Solved);
            assert!(path.is_consistent());
        }
        assert_eq!(successors[1].moves()[0].actors(), &[Actor::new(1), Actor::new(0)]);

        // Parent is untouched.
        assert_eq!(root.moves().len(), 0);
    }

    #[test]
    fn test_invalid_path_has_no_successors() {
        let roster = Roster::from_costs(&[1, 2]);
        let root = SolutionPath::root(State::all_at(2, Location::Origin, 1));
        let successors = root.successors(&roster, Pairing::Ordered).unwrap();
        assert_eq!(successors.len(), 2);
        for path in successors {
            assert_eq!(path.classification(), Classification::Invalid);
            assert!(path.successors(&roster, Pairing::Ordered).unwrap().is_empty());
        }
    }

    #[test]
    fn test_successors_never_revisit_a_state() {
        let roster = Roster::from_costs(&[1, 2, 3, 5, 10]);
        let mut frontier = vec![SolutionPath::root(State::all_at(5, Location::Origin, 21))];
        for _ in 0..4 {
            let mut next = Vec::new();
            for path in &frontier {
                next.extend(path.successors(&roster, Pairing::Unordered).unwrap());
            }
            frontier = next;
        }
        assert!(!frontier.is_empty());
        for path in &frontier {
            let unique: HashSet<&State> = path.states().iter().collect();
            assert_eq!(unique.len(), path.states().len());
            assert!(path.is_consistent());
        }
    }

    #[test]
    fn test_successors_skip_states_already_on_path() {
        // With a zero-cost actor a return trip lands on the starting state again.
        let roster = Roster::from_costs(&[0]);
        let root = SolutionPath::root(State::all_at(1, Location::Origin, 3));
        let over = root.successors(&roster, Pairing::Ordered).unwrap();
        assert_eq!(over.len(), 1);

        let halfway = SolutionPath::root(State::new(3, vec![Location::Target], Location::Target));
        let back = over[0].successors(&roster, Pairing::Ordered).unwrap();
        assert!(back.is_empty());
        assert_eq!(halfway.successors(&roster, Pairing::Ordered).unwrap().len(), 1);
    }

    #[test]
    fn test_inconsistent_path_detected() {
        let roster = Roster::from_costs(&[1, 2]);
        let root = SolutionPath::root(State::all_at(2, Location::Origin, 5));
        let mut path = root.successors(&roster, Pairing::Ordered).unwrap().remove(0);
        path.states[1] = State::all_at(2, Location::Target, 4);
        assert!(!path.is_consistent());
    }

    #[test]
    fn test_total_cost() {
        let roster = Roster::from_costs(&[1, 3]);
        let root = SolutionPath::root(State::all_at(2, Location::Origin, 10));
        let path = root.successors(&roster, Pairing::Unordered).unwrap().remove(0);
        assert_eq!(path.total_cost(), 3);
    }
}
