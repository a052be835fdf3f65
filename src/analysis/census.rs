//! Label counts over a classified tree

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    execution::{ExecutionTree, Label, Node},
    identifiers::Outcome,
};

/// Summary of how labels are distributed across a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelCensus {
    pub nodes: usize,
    pub leaves: usize,
    pub internal: usize,
    pub max_depth: usize,
    pub initial: usize,
    #[serde(rename = "final")]
    pub final_nodes: usize,
    pub univalent: usize,
    pub bivalent: usize,
    pub critical: usize,
    /// Number of leaves per outcome
    pub outcome_histogram: BTreeMap<Outcome, usize>,
    /// Decision value of the root, if every execution agrees
    pub root_decision: Option<Outcome>,
    /// Paths of critical nodes, in pre-order
    pub critical_paths: Vec<String>,
}

impl LabelCensus {
    pub fn of(tree: &ExecutionTree) -> Self {
        Self::of_node(tree.root())
    }

    /// Census of the subtree rooted at `root`.
    pub fn of_node(root: &Node) -> Self {
        let mut census = LabelCensus {
            root_decision: root.decision_value(),
            ..Default::default()
        };

        for node in root.iter() {
            census.nodes += 1;
            census.max_depth = census.max_depth.max(node.path().depth());
            match node.outcome() {
                Some(outcome) => {
                    census.leaves += 1;
                    *census.outcome_histogram.entry(outcome).or_insert(0) += 1;
                }
                None => census.internal += 1,
            }

            for label in node.labels().iter() {
                *census.slot(label) += 1;
            }
            if node.has_label(Label::Critical) {
                census.critical_paths.push(node.path().to_string());
            }
        }

        census
    }

    /// Number of nodes carrying `label`.
    pub fn count(&self, label: Label) -> usize {
        match label {
            Label::Initial => self.initial,
            Label::Final => self.final_nodes,
            Label::Univalent => self.univalent,
            Label::Bivalent => self.bivalent,
            Label::Critical => self.critical,
        }
    }

    fn slot(&mut self, label: Label) -> &mut usize {
        match label {
            Label::Initial => &mut self.initial,
            Label::Final => &mut self.final_nodes,
            Label::Univalent => &mut self.univalent,
            Label::Bivalent => &mut self.bivalent,
            Label::Critical => &mut self.critical,
        }
    }
}
