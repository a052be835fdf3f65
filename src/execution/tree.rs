//! Execution tree container

use tracing::{debug, warn};

use super::{
    classifier::{self, Classification},
    generator::{self, OutcomeSource, SeededOutcomes},
    node::{Label, Node, Nodes},
};
use crate::{
    analysis::ResourceEstimate,
    config::TreeConfig,
    error::Result,
    identifiers::{ActorId, Outcome},
};

/// Complete interleaving tree for one configuration.
///
/// Construction generates the whole tree eagerly. Labels other than
/// `INITIAL` appear only after [`ExecutionTree::assign_labels`].
///
/// # Examples
///
/// ```
/// use valency::{ExecutionTree, Label};
///
/// let mut tree = ExecutionTree::new(['A', 'B'], 1, 7).unwrap();
/// tree.assign_labels();
/// assert!(tree.root().has_label(Label::Initial));
/// assert_eq!(tree.root().children().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ExecutionTree {
    config: TreeConfig,
    root: Node,
}

impl ExecutionTree {
    /// Generate the tree for `actors`, each acting `budget` times, with leaf
    /// outcomes drawn from a generator seeded with `seed`.
    pub fn new<I, A>(actors: I, budget: u32, seed: u64) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<ActorId>,
    {
        Self::from_config(TreeConfig::new(actors).with_budget(budget).with_seed(seed))
    }

    pub fn from_config(config: TreeConfig) -> Result<Self> {
        let mut outcomes = SeededOutcomes::new(config.seed);
        Self::with_outcomes(config, &mut outcomes)
    }

    /// Generate the tree drawing leaf outcomes from `outcomes` instead of the
    /// configured seed.
    pub fn with_outcomes<O>(config: TreeConfig, outcomes: &mut O) -> Result<Self>
    where
        O: OutcomeSource + ?Sized,
    {
        config.validate()?;

        let estimate = ResourceEstimate::for_shape(config.actors.len(), config.budget);
        if estimate.is_large() {
            warn!(
                actors = config.actors.len(),
                budget = config.budget,
                nodes = %estimate.describe_nodes(),
                "execution tree is very large; memory use grows combinatorially"
            );
        }

        let mut root = generator::generate(&config, outcomes)?;
        root.labels.insert(Label::Initial);
        Ok(Self { config, root })
    }

    /// Classify every node, replacing labels from any earlier pass.
    ///
    /// Returns the root's classification.
    pub fn assign_labels(&mut self) -> Classification {
        let classification = classifier::classify(&mut self.root);
        debug!(?classification, "labels assigned");
        classification
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn actors(&self) -> &[ActorId] {
        &self.config.actors
    }

    pub fn budget(&self) -> u32 {
        self.config.budget
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> Nodes<'_> {
        self.root.iter()
    }

    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.root.leaves()
    }

    /// Unique decision value of the whole tree, if every execution agrees.
    pub fn decision_value(&self) -> Option<Outcome> {
        classifier::decision_value(&self.root)
    }
}
