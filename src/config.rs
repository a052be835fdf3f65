//! Configuration for building execution trees.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    identifiers::ActorId,
};

/// Configuration for generating an execution tree.
///
/// This type provides a builder-style API; the triple of actors, budget and
/// seed fully determines the generated tree.
///
/// # Examples
///
/// ```
/// use valency::TreeConfig;
///
/// let config = TreeConfig::new(['A', 'B'])
///     .with_budget(2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Actor identifiers, in child iteration order
    pub actors: Vec<ActorId>,
    /// Number of actions each actor performs in a complete execution
    #[serde(default = "default_budget")]
    pub budget: u32,
    /// Seed for the outcome generator
    #[serde(default)]
    pub seed: u64,
}

fn default_budget() -> u32 {
    1
}

impl TreeConfig {
    /// Create a configuration for the given actors.
    ///
    /// Uses default values for other parameters:
    /// - Budget: 1 action per actor
    /// - Seed: 0
    pub fn new<I, A>(actors: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ActorId>,
    {
        Self {
            actors: actors.into_iter().map(Into::into).collect(),
            budget: default_budget(),
            seed: 0,
        }
    }

    /// Set the per-actor action budget.
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }

    /// Set the random seed for outcome generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the preconditions of tree generation.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when the actor set is
    /// empty, an actor appears twice, or the budget is zero.
    pub fn validate(&self) -> Result<()> {
        if self.actors.is_empty() {
            return Err(Error::invalid_configuration("actor set must not be empty"));
        }
        if self.budget < 1 {
            return Err(Error::invalid_configuration(format!(
                "per-actor budget must be at least 1, got {}",
                self.budget
            )));
        }
        let mut seen = HashSet::with_capacity(self.actors.len());
        for actor in &self.actors {
            if !seen.insert(*actor) {
                return Err(Error::invalid_configuration(format!(
                    "actor '{actor}' appears more than once"
                )));
            }
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read configuration {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}
