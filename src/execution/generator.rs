//! Interleaving generator
//!
//! Builds the tree of every interleaving of a set of actors where each actor
//! acts exactly `budget` times. Leaves receive an outcome drawn from an
//! [`OutcomeSource`] in depth-first order, so a seeded source reproduces the
//! same tree.

use std::ops::{Deref, DerefMut};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use super::node::Node;
use crate::{
    config::TreeConfig,
    error::Result,
    identifiers::{ActorId, ExecutionPath, Outcome},
};

/// Supplies the outcome of each completed execution.
pub trait OutcomeSource {
    /// Draw an outcome in `[0, num_actors)`.
    fn draw(&mut self, num_actors: usize) -> Outcome;
}

/// Uniform outcomes from a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededOutcomes {
    rng: StdRng,
}

impl SeededOutcomes {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl OutcomeSource for SeededOutcomes {
    fn draw(&mut self, num_actors: usize) -> Outcome {
        Outcome::new(self.rng.random_range(0..num_actors))
    }
}

/// Replays a fixed sequence of outcomes, cycling when exhausted.
///
/// Values are reduced modulo the actor count so every drawn outcome stays in
/// range. An empty script always yields `0`.
#[derive(Debug, Clone)]
pub struct ScriptedOutcomes {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedOutcomes {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of outcomes drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn draw(&mut self, num_actors: usize) -> Outcome {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()] % num_actors.max(1)
        };
        self.cursor += 1;
        Outcome::new(value)
    }
}

/// Actions spent by each actor along the current path.
#[derive(Debug)]
struct Budget {
    spent: Vec<u32>,
    limit: u32,
}

impl Budget {
    fn new(actors: usize, limit: u32) -> Self {
        Self {
            spent: vec![0; actors],
            limit,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.spent.iter().all(|&count| count == self.limit)
    }

    fn has_room(&self, actor: usize) -> bool {
        self.spent[actor] < self.limit
    }

    /// Spend one action of `actor` until the returned guard is dropped.
    fn spend(&mut self, actor: usize) -> Spend<'_> {
        self.spent[actor] += 1;
        Spend {
            budget: self,
            actor,
        }
    }
}

/// Scoped spend; refunds the action on drop so siblings see the same budget.
struct Spend<'a> {
    budget: &'a mut Budget,
    actor: usize,
}

impl Deref for Spend<'_> {
    type Target = Budget;

    fn deref(&self) -> &Budget {
        &*self.budget
    }
}

impl DerefMut for Spend<'_> {
    fn deref_mut(&mut self) -> &mut Budget {
        &mut *self.budget
    }
}

impl Drop for Spend<'_> {
    fn drop(&mut self) {
        self.budget.spent[self.actor] -= 1;
    }
}

struct Generator<'a, O: ?Sized> {
    actors: &'a [ActorId],
    outcomes: &'a mut O,
    leaves: usize,
}

impl<O: OutcomeSource + ?Sized> Generator<'_, O> {
    fn grow(&mut self, budget: &mut Budget, path: &mut ExecutionPath) -> Node {
        if budget.is_exhausted() {
            self.leaves += 1;
            return Node::leaf(path.clone(), self.outcomes.draw(self.actors.len()));
        }

        let actors = self.actors;
        let mut children = Vec::new();
        for (index, actor) in actors.iter().enumerate() {
            if !budget.has_room(index) {
                continue;
            }
            let mut spent = budget.spend(index);
            path.push(*actor);
            children.push(self.grow(&mut spent, path));
            path.pop();
        }
        Node::branch(path.clone(), children)
    }
}

/// Generate the full interleaving tree for `config`.
///
/// Fails with [`crate::Error::InvalidConfiguration`] before allocating
/// anything when the configuration is invalid. The returned root carries no
/// labels; [`crate::ExecutionTree`] adds `INITIAL`.
pub fn generate<O>(config: &TreeConfig, outcomes: &mut O) -> Result<Node>
where
    O: OutcomeSource + ?Sized,
{
    config.validate()?;
    debug!(
        actors = config.actors.len(),
        budget = config.budget,
        "generating interleavings"
    );

    let mut generator = Generator {
        actors: &config.actors,
        outcomes,
        leaves: 0,
    };
    let mut budget = Budget::new(config.actors.len(), config.budget);
    let mut path = ExecutionPath::root();
    let root = generator.grow(&mut budget, &mut path);

    debug!(leaves = generator.leaves, "generation complete");
    Ok(root)
}
