use crate::config::ActorConfig;
use crate::engine::Location;

/// Parses a command-line actor description into an `ActorConfig`.
///
/// The format is `NAME=COST`, optionally followed by `@origin` or `@target` to choose
/// where the actor starts (the default is `origin`). Surrounding whitespace around each
/// part is ignored and the location is case-insensitive.
///
/// # Arguments
/// * `s`: The actor description, e.g. `"Neil=1"` or `"Edwin=10@target"`.
///
/// # Returns
/// * `Ok(ActorConfig)` if parsing is successful.
/// * `Err(String)` if:
///     - There is no `=` separating the name from the cost.
///     - The name is empty.
///     - The cost is not a positive integer.
///     - The location after `@` is neither `origin` nor `target`.
///
/// # Examples
/// ```
/// use crossing_solver::utils::parse_actor_spec;
/// use crossing_solver::engine::Location;
///
/// let neil = parse_actor_spec("Neil=1").unwrap();
/// assert_eq!(neil.name, "Neil");
/// assert_eq!(neil.cost, 1);
/// assert_eq!(neil.location, Location::Origin);
///
/// let edwin = parse_actor_spec("Edwin=10@target").unwrap();
/// assert_eq!(edwin.location, Location::Target);
///
/// assert!(parse_actor_spec("Yuri").is_err());
/// assert!(parse_actor_spec("Yuri=0").is_err());
/// ```
pub fn parse_actor_spec(s: &str) -> Result<ActorConfig, String> {
    let (name, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected NAME=COST[@LOCATION], found '{}'", s))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("Missing actor name in '{}'", s));
    }

    let (cost_str, location) = match rest.split_once('@') {
        Some((cost_str, location_str)) => (cost_str, parse_location(location_str)?),
        None => (rest, Location::Origin),
    };

    let cost: u32 = cost_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid cost '{}' for actor '{}'", cost_str.trim(), name))?;
    if cost == 0 {
        return Err(format!("Cost for actor '{}' must be positive", name));
    }

    Ok(ActorConfig {
        name: name.to_string(),
        cost,
        location,
    })
}

/// Parses `origin` or `target` (case-insensitive) into a `Location`.
///
/// # Examples
/// ```
/// use crossing_solver::utils::parse_location;
/// use crossing_solver::engine::Location;
/// assert_eq!(parse_location("Target"), Ok(Location::Target));
/// assert!(parse_location("moon").is_err());
/// ```
pub fn parse_location(s: &str) -> Result<Location, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "origin" | "o" => Ok(Location::Origin),
        "target" | "t" => Ok(Location::Target),
        other => Err(format!("Unrecognized location '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actor_spec_valid() {
        let actor = parse_actor_spec("Valentina=3").unwrap();
        assert_eq!(actor, ActorConfig::new("Valentina", 3));
    }

    #[test]
    fn test_parse_actor_spec_with_location_and_spaces() {
        let actor = parse_actor_spec(" Yuri = 5 @ Target ").unwrap();
        assert_eq!(actor.name, "Yuri");
        assert_eq!(actor.cost, 5);
        assert_eq!(actor.location, Location::Target);
    }

    #[test]
    fn test_parse_actor_spec_short_location() {
        assert_eq!(parse_actor_spec("Neil=1@o").unwrap().location, Location::Origin);
        assert_eq!(parse_actor_spec("Neil=1@t").unwrap().location, Location::Target);
    }

    #[test]
    fn test_parse_actor_spec_missing_separator() {
        let result = parse_actor_spec("Neil1");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Expected NAME=COST"));
    }

    #[test]
    fn test_parse_actor_spec_missing_name() {
        let result = parse_actor_spec("=4");
        assert!(result.unwrap_err().contains("Missing actor name"));
    }

    #[test]
    fn test_parse_actor_spec_invalid_cost() {
        let result = parse_actor_spec("Neil=fast");
        assert!(result.unwrap_err().contains("Invalid cost 'fast' for actor 'Neil'"));

        let result = parse_actor_spec("Neil=-2");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_actor_spec_zero_cost() {
        let result = parse_actor_spec("Neil=0");
        assert!(result.unwrap_err().contains("must be positive"));
    }

    #[test]
    fn test_parse_actor_spec_unknown_location() {
        let result = parse_actor_spec("Neil=1@moon");
        assert!(result.unwrap_err().contains("Unrecognized location 'moon'"));
    }
}
