//! Valency classification
//!
//! A single post-order pass computes a [`Classification`] for every node from
//! the classifications of its children, then attaches the matching labels.
//! Decision-value recovery is a separate pure query over leaf outcomes and
//! never consults labels.

use std::collections::BTreeSet;

use super::node::{Body, Label, Node};
use crate::identifiers::Outcome;

/// Result of classifying one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Completed execution with its outcome
    Final(Outcome),
    /// Every completion below reaches the same outcome
    Univalent(Outcome),
    /// Completions below reach more than one outcome
    Bivalent { critical: bool },
}

impl Classification {
    /// Unique decision value, absent for bivalent nodes.
    pub fn decision_value(self) -> Option<Outcome> {
        match self {
            Classification::Final(outcome) | Classification::Univalent(outcome) => Some(outcome),
            Classification::Bivalent { .. } => None,
        }
    }

    pub fn is_bivalent(self) -> bool {
        matches!(self, Classification::Bivalent { .. })
    }

    /// Labels derived from this classification, in attachment order.
    pub fn labels(self) -> &'static [Label] {
        match self {
            Classification::Final(_) => &[Label::Final],
            Classification::Univalent(_) => &[Label::Univalent],
            Classification::Bivalent { critical: false } => &[Label::Bivalent],
            Classification::Bivalent { critical: true } => &[Label::Bivalent, Label::Critical],
        }
    }

    /// Combine the classifications of an internal node's children.
    fn from_children(children: &[Classification]) -> Classification {
        let mut agreed: Option<Outcome> = None;
        let mut split = false;
        let mut bivalent_child = false;

        for child in children {
            match child.decision_value() {
                Some(value) => match agreed {
                    None => agreed = Some(value),
                    Some(existing) if existing != value => split = true,
                    Some(_) => {}
                },
                None => {
                    split = true;
                    bivalent_child = true;
                }
            }
        }

        match agreed {
            Some(value) if !split => Classification::Univalent(value),
            _ => Classification::Bivalent {
                critical: !bivalent_child,
            },
        }
    }
}

/// Classify `node` and its whole subtree, replacing any labels left by an
/// earlier pass. Labels assigned at construction (`INITIAL`) are kept.
pub fn classify(node: &mut Node) -> Classification {
    let classification = match &mut node.body {
        Body::Leaf(outcome) => Classification::Final(*outcome),
        Body::Branch(children) => {
            let verdicts: Vec<Classification> = children.iter_mut().map(classify).collect();
            Classification::from_children(&verdicts)
        }
    };

    node.labels.clear_derived();
    for label in classification.labels() {
        node.labels.insert(*label);
    }
    classification
}

/// Recover the unique decision value reachable from `node`.
///
/// Returns the leaf's outcome for a leaf, otherwise the single outcome shared
/// by every descendant leaf, or `None` when they disagree. Independent of
/// labels, so the result is the same before and after [`classify`].
pub fn decision_value(node: &Node) -> Option<Outcome> {
    match &node.body {
        Body::Leaf(outcome) => Some(*outcome),
        Body::Branch(children) => {
            let mut agreed = None;
            for child in children {
                let value = decision_value(child)?;
                match agreed {
                    None => agreed = Some(value),
                    Some(existing) if existing != value => return None,
                    Some(_) => {}
                }
            }
            agreed
        }
    }
}

/// Every distinct outcome reachable from `node`.
pub fn reachable_outcomes(node: &Node) -> BTreeSet<Outcome> {
    node.leaves().filter_map(Node::outcome).collect()
}
