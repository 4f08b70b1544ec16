//! Puzzle configuration.
//!
//! A puzzle instance is the roster (names and crossing costs), where everyone starts,
//! where the item starts, and the shared budget. Instances load from TOML:
//!
//! ```
//! use crossing_solver::config::PuzzleConfig;
//! use crossing_solver::engine::Location;
//!
//! let config = PuzzleConfig::from_toml_str(r#"
//!     budget = 17
//!
//!     [[actors]]
//!     name = "Ann"
//!     cost = 1
//!
//!     [[actors]]
//!     name = "Bob"
//!     cost = 2
//!     location = "target"
//! "#).unwrap();
//!
//! assert_eq!(config.budget, 17);
//! assert_eq!(config.item, Location::Origin);
//! assert_eq!(config.actors[1].location, Location::Target);
//! ```
//!
//! Falls back to the reference astronaut instance when the file is missing:
//!
//! ```
//! use crossing_solver::config::PuzzleConfig;
//!
//! let config = PuzzleConfig::load("puzzle.toml").unwrap_or_default();
//! assert_eq!(config, PuzzleConfig::reference());
//! ```

use std::collections::HashSet;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{Location, Roster, State};
use crate::solver::{Solver, Strategy};
use crate::transitions::Pairing;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// One member of the crew.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActorConfig {
    pub name: String,

    /// Minutes this actor needs for one crossing. Must be positive.
    pub cost: u32,

    #[serde(default)]
    pub location: Location,
}

impl ActorConfig {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        ActorConfig {
            name: name.into(),
            cost,
            location: Location::Origin,
        }
    }
}

/// A complete puzzle instance as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PuzzleConfig {
    /// Shared time budget, in minutes.
    pub budget: i64,

    /// Where the item starts.
    #[serde(default)]
    pub item: Location,

    #[serde(default)]
    pub pairing: Pairing,

    /// Strategy the CLI uses when none is given on the command line.
    #[serde(default)]
    pub strategy: Option<Strategy>,

    // Kept last so it serializes as a trailing array of tables.
    pub actors: Vec<ActorConfig>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl PuzzleConfig {
    /// The astronaut puzzle: five astronauts, one set of suits, 21 minutes of air.
    pub fn reference() -> Self {
        PuzzleConfig {
            budget: 21,
            item: Location::Origin,
            actors: vec![
                ActorConfig::new("Neil", 1),
                ActorConfig::new("Michael", 2),
                ActorConfig::new("Valentina", 3),
                ActorConfig::new("Yuri", 5),
                ActorConfig::new("Edwin", 10),
            ],
            pairing: Pairing::Ordered,
            strategy: None,
        }
    }

    /// Creates a random instance with `actor_count` actors, all starting at `Origin`.
    ///
    /// Costs fall in `1..=10`. The budget lands somewhere between the slowest actor's
    /// cost and twice the total cost, so some instances are unsolvable. The same seed
    /// always produces the same instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossing_solver::config::PuzzleConfig;
    /// let a = PuzzleConfig::random_with_seed(7, 4);
    /// let b = PuzzleConfig::random_with_seed(7, 4);
    /// assert_eq!(a, b);
    /// assert_eq!(a.actors.len(), 4);
    /// assert!(a.validate().is_ok());
    /// ```
    pub fn random_with_seed(seed: u64, actor_count: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let actors: Vec<ActorConfig> = (0..actor_count)
            .map(|i| ActorConfig::new(format!("Actor {}", i + 1), rng.gen_range(1..=10)))
            .collect();

        let total: i64 = actors.iter().map(|a| i64::from(a.cost)).sum();
        let slowest: i64 = actors.iter().map(|a| i64::from(a.cost)).max().unwrap_or(0);
        let budget = rng.gen_range(slowest..=total.max(slowest) * 2);

        PuzzleConfig {
            budget,
            item: Location::Origin,
            actors,
            pairing: Pairing::Ordered,
            strategy: None,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn with_budget(mut self, budget: i64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }

    /// Checks the instance can be turned into a puzzle.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` when there are no actors, a cost is zero, or a
    /// name is empty or used twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actors.is_empty() {
            return Err(ConfigError::Invalid("at least one actor is required".into()));
        }

        let mut names = HashSet::new();
        for actor in &self.actors {
            if actor.name.trim().is_empty() {
                return Err(ConfigError::Invalid("actor names must not be empty".into()));
            }
            if actor.cost == 0 {
                return Err(ConfigError::Invalid(format!(
                    "actor '{}' must have a positive cost",
                    actor.name
                )));
            }
            if !names.insert(actor.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "actor '{}' is listed more than once",
                    actor.name
                )));
            }
        }
        Ok(())
    }

    /// Validates the configuration and builds the roster and initial state from it.
    pub fn build(&self) -> Result<Puzzle, ConfigError> {
        self.validate()?;

        let mut roster = Roster::new();
        for actor in &self.actors {
            roster.add(actor.name.clone(), actor.cost);
        }
        let locations = self.actors.iter().map(|a| a.location).collect();

        Ok(Puzzle {
            roster,
            initial: State::new(self.budget, locations, self.item),
            pairing: self.pairing,
        })
    }
}

/// A validated puzzle instance, ready to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub roster: Roster,
    pub initial: State,
    pub pairing: Pairing,
}

impl Puzzle {
    pub fn solver(&self) -> Solver<'_> {
        Solver::new(&self.roster).with_pairing(self.pairing)
    }
}
