//! Human-readable descriptions of moves, states and search outcomes.
use crate::engine::{Actor, Move, Roster, State};
use crate::solver::Solution;

fn plural(count: i64, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// The roster name of `actor`, or its handle when the roster does not know it.
pub fn actor_name(roster: &Roster, actor: Actor) -> String {
    roster
        .name(actor)
        .map(str::to_string)
        .unwrap_or_else(|| actor.to_string())
}

/// Describes one step, e.g. `"Neil and Michael spend 2 minutes moving to Target"`.
///
/// # Examples
/// ```
/// use crossing_solver::engine::{Actor, Location, Move, Roster};
/// use crossing_solver::report::describe_move;
///
/// let mut roster = Roster::new();
/// let neil = roster.add("Neil", 1);
/// let mv = Move::move_one(&roster, neil, Location::Origin).unwrap();
/// assert_eq!(describe_move(&roster, &mv), "Neil spends 1 minute moving to Origin");
/// ```
pub fn describe_move(roster: &Roster, mv: &Move) -> String {
    let names: Vec<String> = mv.actors().iter().map(|&a| actor_name(roster, a)).collect();
    let cost = i64::from(mv.cost());
    format!(
        "{} {} {} {} moving to {}",
        names.join(" and "),
        plural(names.len() as i64, "spends", "spend"),
        cost,
        plural(cost, "minute", "minutes"),
        mv.target()
    )
}

/// Describes how much budget is left, e.g. `"1 minute remains"`.
pub fn describe_budget(budget: i64) -> String {
    format!(
        "{} {} {}",
        budget,
        plural(budget, "minute", "minutes"),
        plural(budget, "remains", "remain")
    )
}

/// One line per actor location, then the item location and the remaining budget.
pub fn describe_state(roster: &Roster, state: &State) -> Vec<String> {
    let mut lines: Vec<String> = state
        .actor_locations()
        .iter()
        .enumerate()
        .map(|(i, location)| format!("{} is at {}", actor_name(roster, Actor::new(i)), location))
        .collect();
    lines.push(format!("Item is at {}", state.item_location()));
    lines.push(describe_budget(state.budget_remaining()));
    lines
}

/// The step list and summary printed for a found solution.
pub fn describe_solution(roster: &Roster, solution: &Solution) -> Vec<String> {
    let mut lines = vec!["Solution found".to_string(), "Steps:".to_string()];
    for mv in solution.path.moves() {
        lines.push(format!("\t{}", describe_move(roster, mv)));
    }
    let spent = solution.path.total_cost() as i64;
    lines.push(format!("{} {} spent", spent, plural(spent, "minute", "minutes")));
    if let Some(last) = solution.path.final_state() {
        lines.push(describe_budget(last.budget_remaining()));
    }
    lines.push(format!(
        "{} {} checked",
        solution.paths_checked,
        plural(solution.paths_checked as i64, "solution", "solutions")
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Location;
    use crate::path::SolutionPath;
    use crate::transitions::Pairing;

    fn roster() -> Roster {
        let mut roster = Roster::new();
        roster.add("Neil", 1);
        roster.add("Michael", 2);
        roster
    }

    #[test]
    fn test_describe_pair_move() {
        let roster = roster();
        let mv = Move::move_two(&roster, Actor::new(0), Actor::new(1), Location::Target).unwrap();
        assert_eq!(
            describe_move(&roster, &mv),
            "Neil and Michael spend 2 minutes moving to Target"
        );
    }

    #[test]
    fn test_describe_budget_plurals() {
        assert_eq!(describe_budget(1), "1 minute remains");
        assert_eq!(describe_budget(0), "0 minutes remain");
        assert_eq!(describe_budget(-3), "-3 minutes remain");
    }

    #[test]
    fn test_describe_state() {
        let roster = roster();
        let state = State::new(4, vec![Location::Target, Location::Origin], Location::Target);
        assert_eq!(
            describe_state(&roster, &state),
            vec![
                "Neil is at Target",
                "Michael is at Origin",
                "Item is at Target",
                "4 minutes remain"
            ]
        );
    }

    #[test]
    fn test_unknown_actor_uses_handle() {
        let roster = roster();
        assert_eq!(actor_name(&roster, Actor::new(9)), "#9");
    }

    #[test]
    fn test_describe_solution() {
        let roster = roster();
        let root = SolutionPath::root(State::all_at(2, Location::Origin, 3));
        let path = root.successors(&roster, Pairing::Unordered).unwrap().remove(0);
        let solution = Solution {
            path,
            paths_checked: 2,
        };
        assert_eq!(
            describe_solution(&roster, &solution),
            vec![
                "Solution found",
                "Steps:",
                "\tNeil and Michael spend 2 minutes moving to Target",
                "2 minutes spent",
                "1 minute remains",
                "2 solutions checked"
            ]
        );
    }
}
